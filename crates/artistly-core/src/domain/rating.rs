use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Valoración de un artista en la escala `[1.0, 5.0]`.
///
/// Internamente se guarda como entero *fixed-point* con 4 decimales:
///
/// - `1.0` → `10000`
/// - `4.9` → `49000`
/// - `5.0` → `50000`
///
/// En JSON se expone como número decimal (`"rating": 4.9`), que es la forma
/// del registro que consumen las vistas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Rating(u32);

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("rating {0} is outside [1.0, 5.0]")]
pub struct RatingOutOfRange(pub f32);

impl Rating {
  const SCALE_FACTOR: u32 = 10_000;
  const MIN_VALUE: u32 = Self::SCALE_FACTOR;
  const MAX_VALUE: u32 = 5 * Self::SCALE_FACTOR;

  /// Crea una `Rating` a partir de un `f32`.
  ///
  /// Devuelve `None` si el valor no es finito o cae fuera de `[1.0, 5.0]`.
  pub fn new(value: f32) -> Option<Self> {
    if !value.is_finite() || !(1.0..=5.0).contains(&value) {
      return None;
    }

    let scaled_value = (value * Self::SCALE_FACTOR as f32).round() as u32;

    if !(Self::MIN_VALUE..=Self::MAX_VALUE).contains(&scaled_value) {
      return None;
    }

    Some(Self(scaled_value))
  }

  pub fn as_f32(&self) -> f32 {
    self.0 as f32 / Self::SCALE_FACTOR as f32
  }
}

impl TryFrom<f32> for Rating {
  type Error = RatingOutOfRange;

  fn try_from(value: f32) -> Result<Self, Self::Error> {
    Rating::new(value).ok_or(RatingOutOfRange(value))
  }
}

impl From<Rating> for f32 {
  fn from(r: Rating) -> Self {
    r.as_f32()
  }
}

impl fmt::Display for Rating {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    // floor: solo 5.0 llega a ★★★★★
    let full_stars = self.as_f32().floor() as usize;
    let empty_stars = 5 - full_stars;

    for _ in 0..full_stars {
      write!(f, "★")?;
    }
    for _ in 0..empty_stars {
      write!(f, "☆")?;
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_bounds_and_rejects_outside() {
    assert!(Rating::new(1.0).is_some());
    assert!(Rating::new(5.0).is_some());
    assert!(Rating::new(0.9).is_none());
    assert!(Rating::new(5.1).is_none());
    assert!(Rating::new(f32::NAN).is_none());
  }

  #[test]
  fn stars_use_floor() {
    assert_eq!(Rating::new(4.9).unwrap().to_string(), "★★★★☆");
    assert_eq!(Rating::new(5.0).unwrap().to_string(), "★★★★★");
    assert_eq!(Rating::new(3.5).unwrap().to_string(), "★★★☆☆");
  }

  #[test]
  fn deserialization_rejects_out_of_range() {
    assert!(serde_json::from_str::<Rating>("4.5").is_ok());
    assert!(serde_json::from_str::<Rating>("0.5").is_err());
  }
}
