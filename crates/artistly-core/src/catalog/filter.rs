use crate::catalog::criteria::{Criteria, PriceFilter, PriceRule};
use crate::catalog::sort::sort_by_name;
use crate::domain::Artist;
use tracing::debug;

/// Filtra y ordena el catálogo con la regla de precio por etiqueta.
///
/// Función pura: no modifica `artists` y devuelve una colección nueva. Los
/// criterios vacíos no restringen nada.
pub fn filter_and_sort(artists: &[Artist], criteria: &Criteria) -> Vec<Artist> {
  filter_and_sort_with(artists, criteria, PriceRule::Label)
}

/// Igual que [`filter_and_sort`] pero eligiendo la regla de precio.
///
/// Las etapas se aplican en este orden y se combinan con AND:
/// texto libre, categoría, género, precio, ubicación. Después se ordena
/// por nombre.
pub fn filter_and_sort_with(artists: &[Artist], criteria: &Criteria, price_rule: PriceRule) -> Vec<Artist> {
  let needle = criteria.search_term.to_lowercase();
  let location = criteria.location_filter.to_lowercase();

  let mut result: Vec<Artist> = artists
    .iter()
    .filter(|a| matches_search(a, &needle))
    .filter(|a| matches_type(a, criteria))
    .filter(|a| matches_genres(a, criteria))
    .filter(|a| matches_price(a, &criteria.selected_price_range, price_rule))
    .filter(|a| matches_location(a, &location))
    .cloned()
    .collect();

  sort_by_name(&mut result, criteria.sort_order);

  debug!(total = artists.len(), matched = result.len(), order = ?criteria.sort_order, "catalog query");

  result
}

/// `needle` ya viene en minúsculas.
fn matches_search(artist: &Artist, needle: &str) -> bool {
  if needle.is_empty() {
    return true;
  }

  let hit = |field: &str| field.to_lowercase().contains(needle);

  hit(artist.name.as_str())
    || hit(artist.artist_type.as_str())
    || hit(artist.location.as_str())
    || artist.description.as_deref().is_some_and(hit)
    || artist.genres.iter().any(|g| hit(g.as_str()))
}

fn matches_type(artist: &Artist, criteria: &Criteria) -> bool {
  criteria.selected_types.is_empty() || criteria.selected_types.contains(&artist.artist_type)
}

fn matches_genres(artist: &Artist, criteria: &Criteria) -> bool {
  criteria.selected_genres.is_empty() || artist.genres.iter().any(|g| criteria.selected_genres.contains(g))
}

fn matches_price(artist: &Artist, filter: &PriceFilter, rule: PriceRule) -> bool {
  match filter {
    PriceFilter::Any => true,
    PriceFilter::Unknown(_) => false,
    PriceFilter::Bucket(bucket) => match (rule, artist.booking_price) {
      (PriceRule::BookingPrice, Some(amount)) => bucket.contains_amount(amount),
      _ => bucket.matches(&artist.price_range),
    },
  }
}

/// `location` ya viene en minúsculas.
fn matches_location(artist: &Artist, location: &str) -> bool {
  location.is_empty() || artist.location.to_lowercase().contains(location)
}
