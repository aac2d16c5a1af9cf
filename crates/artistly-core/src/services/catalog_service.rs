use crate::catalog::{Criteria, Facets, PriceRule, filter_and_sort_with};
use crate::domain::{Artist, ArtistId, PriceBucket};
use crate::errors::CoreError;
use crate::onboarding::ArtistDraft;
use crate::ports::ArtistRepository;
use serde::Serialize;
use tracing::{info, warn};

/// Fila de la tabla del panel de gestión.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardRow {
  pub id: ArtistId,
  pub name: String,
  pub category: String,
  pub location: String,
  /// Caché formateado (`₹1,50,000`) o `N/A`.
  pub fee: String,
}

/// Servicio de aplicación del catálogo.
///
/// Recibe el store inyectado; no hay estado global. Todas las consultas se
/// recalculan sobre el contenido actual del repositorio.
pub struct CatalogService<R>
where
  R: ArtistRepository,
{
  repo: R,
  price_rule: PriceRule,
}

impl<R> CatalogService<R>
where
  R: ArtistRepository,
{
  pub fn new(repo: R) -> Self {
    Self { repo, price_rule: PriceRule::default() }
  }

  pub fn with_price_rule(mut self, price_rule: PriceRule) -> Self {
    self.price_rule = price_rule;
    self
  }

  // -------- QUERY (read) --------

  /// Listado filtrado y ordenado con la regla de precio del servicio.
  pub fn browse(&self, criteria: &Criteria) -> Result<Vec<Artist>, CoreError> {
    self.browse_with(criteria, self.price_rule)
  }

  pub fn browse_with(&self, criteria: &Criteria, price_rule: PriceRule) -> Result<Vec<Artist>, CoreError> {
    let artists = self.repo.list_artists()?;
    Ok(filter_and_sort_with(&artists, criteria, price_rule))
  }

  pub fn list_artists(&self) -> Result<Vec<Artist>, CoreError> {
    self.repo.list_artists()
  }

  pub fn get_artist(&self, id: &ArtistId) -> Result<Option<Artist>, CoreError> {
    self.repo.find_artist(id)
  }

  pub fn facets(&self) -> Result<Facets, CoreError> {
    Ok(Facets::from_artists(&self.repo.list_artists()?))
  }

  /// Artistas en orden de inserción, como los muestra el panel.
  pub fn dashboard(&self) -> Result<Vec<DashboardRow>, CoreError> {
    let rows = self
      .repo
      .list_artists()?
      .into_iter()
      .map(|a| DashboardRow {
        fee: a.booking_price.map(format_inr).unwrap_or_else(|| "N/A".to_string()),
        id: a.id,
        name: a.name,
        category: a.artist_type,
        location: a.location,
      })
      .collect();
    Ok(rows)
  }

  // -------- COMMAND (write) --------

  /// Valida el borrador y lo añade al store.
  pub fn onboard(&self, draft: &ArtistDraft) -> Result<Artist, CoreError> {
    let artist = draft.validate()?;

    if let Some(amount) = artist.booking_price {
      let by_amount = PriceBucket::for_amount(amount);
      if !by_amount.matches(&artist.price_range) {
        warn!(
          artist = %artist.name,
          price_range = %artist.price_range,
          amount,
          "booking price falls in {by_amount}, not in the selected range"
        );
      }
    }

    self.repo.append_artist(artist.clone())?;
    info!(id = %artist.id, name = %artist.name, "artist onboarded");

    Ok(artist)
  }
}

/// Formatea rupias con agrupación india: `150000` → `₹1,50,000`.
pub fn format_inr(amount: u64) -> String {
  let digits = amount.to_string();
  if digits.len() <= 3 {
    return format!("₹{digits}");
  }

  let (head, tail) = digits.split_at(digits.len() - 3);
  let mut groups: Vec<&str> = Vec::new();
  let mut end = head.len();
  while end > 0 {
    let start = end.saturating_sub(2);
    groups.push(&head[start..end]);
    end = start;
  }
  groups.reverse();

  format!("₹{},{tail}", groups.join(","))
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::cell::RefCell;

  #[derive(Default)]
  struct VecRepo {
    artists: RefCell<Vec<Artist>>,
  }

  impl ArtistRepository for VecRepo {
    fn list_artists(&self) -> Result<Vec<Artist>, CoreError> {
      Ok(self.artists.borrow().clone())
    }

    fn find_artist(&self, id: &ArtistId) -> Result<Option<Artist>, CoreError> {
      Ok(self.artists.borrow().iter().find(|a| &a.id == id).cloned())
    }

    fn append_artist(&self, artist: Artist) -> Result<(), CoreError> {
      if self.artists.borrow().iter().any(|a| a.id == artist.id) {
        return Err(CoreError::DuplicateId(artist.id));
      }
      self.artists.borrow_mut().push(artist);
      Ok(())
    }
  }

  fn draft(name: &str) -> ArtistDraft {
    ArtistDraft {
      name: name.into(),
      artist_type: "Classical Dancer".into(),
      location: "Chennai, India".into(),
      genres: vec!["Classical".into()],
      price_range: "₹20,000 - ₹50,000".into(),
      rating: 3.0,
      ..Default::default()
    }
  }

  #[test]
  fn format_inr_uses_indian_grouping() {
    assert_eq!(format_inr(0), "₹0");
    assert_eq!(format_inr(999), "₹999");
    assert_eq!(format_inr(15_000), "₹15,000");
    assert_eq!(format_inr(150_000), "₹1,50,000");
    assert_eq!(format_inr(12_345_678), "₹1,23,45,678");
  }

  #[test]
  fn onboarded_artist_is_visible_to_next_query() {
    let service = CatalogService::new(VecRepo::default());
    let artist = service.onboard(&draft("Rukmini")).unwrap();

    let listed = service.browse(&Criteria::default()).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, artist.id);
    assert_eq!(service.get_artist(&artist.id).unwrap(), Some(artist));
  }

  #[test]
  fn invalid_draft_does_not_touch_the_store() {
    let service = CatalogService::new(VecRepo::default());
    let err = service.onboard(&draft("")).unwrap_err();

    assert!(matches!(err, CoreError::Onboarding(_)));
    assert!(service.list_artists().unwrap().is_empty());
  }

  #[test]
  fn dashboard_formats_fee_or_na() {
    let repo = VecRepo::default();
    let mut artist = draft("Rukmini").validate().unwrap();
    artist.booking_price = None;
    repo.append_artist(artist).unwrap();

    let service = CatalogService::new(repo);
    service.onboard(&draft("Tara")).unwrap();

    let fees: Vec<_> = service.dashboard().unwrap().into_iter().map(|r| r.fee).collect();
    assert_eq!(fees, ["N/A", "₹30,000"]);
  }

  #[test]
  fn facets_reflect_current_store() {
    let service = CatalogService::new(VecRepo::default());
    service.onboard(&draft("Tara")).unwrap();
    let facets = service.facets().unwrap();
    assert!(facets.artist_types.contains("Classical Dancer"));
    assert_eq!(facets.genres.len(), 1);
  }
}
