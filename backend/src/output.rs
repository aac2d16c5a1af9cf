use artistly_core::catalog::Facets;
use artistly_core::domain::Artist;
use artistly_core::services::DashboardRow;
use std::fmt::{self, Write};

pub fn listing(artists: &[Artist]) -> Result<String, fmt::Error> {
  if artists.is_empty() {
    return Ok("No artists found matching your criteria.\n".to_string());
  }

  let mut out = String::new();
  for a in artists {
    writeln!(
      out,
      "{} | {} | {} | {} | {} | {}",
      a.name,
      a.artist_type,
      a.location,
      a.price_range,
      a.rating,
      a.display_image_url()
    )?;
  }
  Ok(out)
}

pub fn dashboard(rows: &[DashboardRow]) -> Result<String, fmt::Error> {
  if rows.is_empty() {
    return Ok("No artists have been onboarded yet.\n".to_string());
  }

  let mut out = String::from("Name | Category | Location | Fee\n");
  for r in rows {
    writeln!(out, "{} | {} | {} | {}", r.name, r.category, r.location, r.fee)?;
  }
  Ok(out)
}

pub fn facets(facets: &Facets) -> Result<String, fmt::Error> {
  let join = |items: Vec<&str>| items.join(", ");

  let mut out = String::new();
  writeln!(out, "Genres: {}", join(facets.genres.iter().map(String::as_str).collect()))?;
  writeln!(out, "Types: {}", join(facets.artist_types.iter().map(String::as_str).collect()))?;
  writeln!(out, "Price ranges: {}", join(facets.price_ranges.iter().map(|b| b.label()).collect()))?;
  Ok(out)
}

#[cfg(test)]
mod tests {
  use super::*;
  use artistly_core::domain::{ArtistId, PriceBucket, Rating, artist::PLACEHOLDER_IMAGE_SENTINEL};

  #[test]
  fn empty_listing_has_message() {
    assert_eq!(listing(&[]).unwrap(), "No artists found matching your criteria.\n");
    assert_eq!(dashboard(&[]).unwrap(), "No artists have been onboarded yet.\n");
  }

  #[test]
  fn listing_line_substitutes_placeholder_image() {
    let artist = Artist {
      id: ArtistId::from("1"),
      name: "Nucleya".into(),
      artist_type: "Electronic DJ".into(),
      location: "Goa, India".into(),
      image_url: PLACEHOLDER_IMAGE_SENTINEL.into(),
      genres: vec!["EDM".into()],
      price_range: PriceBucket::From50kTo1L.label().into(),
      rating: Rating::new(4.8).unwrap(),
      description: None,
      booking_price: None,
    };

    assert_eq!(
      listing(&[artist]).unwrap(),
      "Nucleya | Electronic DJ | Goa, India | ₹50,000 - ₹1,00,000 | ★★★★☆ | /default-artist.png\n"
    );
  }
}
