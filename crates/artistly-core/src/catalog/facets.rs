use crate::domain::{Artist, PriceBucket};
use indexmap::IndexSet;
use serde::Serialize;

/// Opciones que ofrecen los selectores de filtro, derivadas de los datos.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Facets {
  /// Géneros distintos, en orden de primera aparición.
  pub genres: IndexSet<String>,
  /// Categorías distintas, en orden de primera aparición.
  pub artist_types: IndexSet<String>,
  pub price_ranges: Vec<PriceBucket>,
}

impl Facets {
  pub fn from_artists(artists: &[Artist]) -> Self {
    let genres = artists.iter().flat_map(|a| a.genres.iter().cloned()).collect();
    let artist_types = artists.iter().map(|a| a.artist_type.clone()).collect();
    Facets { genres, artist_types, price_ranges: PriceBucket::ALL.to_vec() }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{ArtistId, Rating};

  fn artist(name: &str, artist_type: &str, genres: &[&str]) -> Artist {
    Artist {
      id: ArtistId::from(name),
      name: name.into(),
      artist_type: artist_type.into(),
      location: "Delhi, India".into(),
      image_url: String::new(),
      genres: genres.iter().map(|g| g.to_string()).collect(),
      price_range: "₹1,00,000+".into(),
      rating: Rating::new(4.0).unwrap(),
      description: None,
      booking_price: None,
    }
  }

  #[test]
  fn distinct_values_keep_first_seen_order() {
    let artists = vec![
      artist("a", "Playback Singer", &["Bollywood", "Pop"]),
      artist("b", "Electronic DJ", &["EDM", "Pop"]),
      artist("c", "Playback Singer", &["Classical", "Bollywood"]),
    ];

    let facets = Facets::from_artists(&artists);

    assert_eq!(facets.genres.iter().collect::<Vec<_>>(), ["Bollywood", "Pop", "EDM", "Classical"]);
    assert_eq!(facets.artist_types.iter().collect::<Vec<_>>(), ["Playback Singer", "Electronic DJ"]);
    assert_eq!(facets.price_ranges.len(), 4);
  }
}
