//! Alta de artistas: validación del formulario y construcción del registro.
//!
//! El motor de filtrado no valida nada; todo lo que llega al store pasa
//! antes por aquí.

use crate::domain::{Artist, ArtistId, PriceBucket, Rating};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Imagen que se asigna cuando el formulario llega sin URL.
pub const FALLBACK_IMAGE_URL: &str = "https://via.placeholder.com/150?text=Artist+Image";

pub const DEFAULT_DESCRIPTION: &str = "This is a new artist onboarded via the form.";

/// Rupias de caché por cada punto de valoración.
const BOOKING_PRICE_PER_RATING_POINT: f32 = 10_000.0;

const MIN_TEXT_LEN: usize = 2;
const MAX_TEXT_LEN: usize = 100;

static URL_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^https?://[^\s/?#.][^\s/?#]*(?:[/?#]\S*)?$").expect("valid url regex"));

/// Datos tal y como llegan del formulario de alta.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArtistDraft {
  pub name: String,
  #[serde(rename = "type")]
  pub artist_type: String,
  pub location: String,
  pub image_url: String,
  pub genres: Vec<String>,
  pub price_range: String,
  pub rating: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
  pub field: &'static str,
  pub message: String,
}

impl fmt::Display for FieldError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.field, self.message)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OnboardError {
  #[error("invalid artist submission: {}", join_errors(.0))]
  Invalid(Vec<FieldError>),
}

impl OnboardError {
  pub fn fields(&self) -> &[FieldError] {
    match self {
      OnboardError::Invalid(errors) => errors,
    }
  }
}

fn join_errors(errors: &[FieldError]) -> String {
  errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

impl ArtistDraft {
  /// Valida el borrador y, si todo es correcto, construye un [`Artist`] con
  /// id nuevo. Se informan todos los campos erróneos a la vez.
  pub fn validate(&self) -> Result<Artist, OnboardError> {
    let mut errors = Vec::new();
    let mut fail = |field: &'static str, message: &str| {
      errors.push(FieldError { field, message: message.to_string() });
    };

    let name = self.name.trim();
    if name.chars().count() < MIN_TEXT_LEN {
      fail("name", "Artist name must be at least 2 characters.");
    } else if name.chars().count() > MAX_TEXT_LEN {
      fail("name", "Artist name cannot exceed 100 characters.");
    }

    let artist_type = self.artist_type.trim();
    if artist_type.is_empty() {
      fail("type", "Please select an artist type.");
    }

    let location = self.location.trim();
    if location.chars().count() < MIN_TEXT_LEN {
      fail("location", "Location must be at least 2 characters.");
    } else if location.chars().count() > MAX_TEXT_LEN {
      fail("location", "Location cannot exceed 100 characters.");
    }

    let image_url = self.image_url.trim();
    if !image_url.is_empty() && !URL_RE.is_match(image_url) {
      fail("imageUrl", "Please enter a valid URL for the image.");
    }

    let mut genres: Vec<String> = Vec::new();
    for genre in self.genres.iter().map(|g| g.trim()).filter(|g| !g.is_empty()) {
      if !genres.iter().any(|g| g == genre) {
        genres.push(genre.to_string());
      }
    }
    if genres.is_empty() {
      fail("genres", "Please select at least one genre.");
    }

    let price_range = self.price_range.trim();
    if price_range.is_empty() {
      fail("priceRange", "Please select a price range.");
    } else if PriceBucket::classify(price_range).is_empty() {
      fail("priceRange", "Price range does not match any known bucket.");
    }

    let rating = Rating::new(self.rating);
    if self.rating < 1.0 || !self.rating.is_finite() {
      fail("rating", "Rating must be at least 1.");
    } else if rating.is_none() {
      fail("rating", "Rating cannot exceed 5.");
    }

    let rating = match rating {
      Some(r) if errors.is_empty() => r,
      _ => return Err(OnboardError::Invalid(errors)),
    };

    Ok(Artist {
      id: ArtistId::generate(),
      name: name.to_string(),
      artist_type: artist_type.to_string(),
      location: location.to_string(),
      image_url: if image_url.is_empty() { FALLBACK_IMAGE_URL.to_string() } else { image_url.to_string() },
      genres,
      price_range: price_range.to_string(),
      rating,
      description: Some(DEFAULT_DESCRIPTION.to_string()),
      booking_price: Some((rating.as_f32() * BOOKING_PRICE_PER_RATING_POINT).round() as u64),
    })
  }
}
