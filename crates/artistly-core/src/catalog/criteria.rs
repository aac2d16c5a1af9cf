use crate::domain::PriceBucket;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Valor que las vistas usan para "sin restricción" en los selectores.
pub const ALL_SENTINEL: &str = "all";

/// Parámetros de una consulta al catálogo.
///
/// Todos los campos tienen un valor por defecto que significa "sin
/// restricción"; un `Criteria::default()` devuelve el catálogo completo,
/// ordenado por nombre.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Criteria {
  /// Texto libre, sin distinguir mayúsculas.
  pub search_term: String,
  /// Categorías aceptadas. Vacío = todas.
  pub selected_types: IndexSet<String>,
  /// Géneros aceptados (basta con uno en común). Vacío = todos.
  pub selected_genres: IndexSet<String>,
  pub selected_price_range: PriceFilter,
  /// Subcadena de la ubicación, sin distinguir mayúsculas.
  pub location_filter: String,
  pub sort_order: SortOrder,
}

impl Criteria {
  pub fn with_search(mut self, term: impl Into<String>) -> Self {
    self.search_term = term.into();
    self
  }

  /// Añade una categoría. `"all"` y la cadena vacía se ignoran, igual que
  /// en el selector único de la vista de listado.
  pub fn with_type(mut self, artist_type: impl Into<String>) -> Self {
    let artist_type = artist_type.into();
    if !artist_type.is_empty() && artist_type != ALL_SENTINEL {
      self.selected_types.insert(artist_type);
    }
    self
  }

  pub fn with_types<I, S>(self, types: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    types.into_iter().fold(self, |c, t| c.with_type(t))
  }

  pub fn with_genres<I, S>(mut self, genres: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.selected_genres.extend(genres.into_iter().map(Into::into));
    self
  }

  pub fn with_price_range(mut self, label: &str) -> Self {
    self.selected_price_range = PriceFilter::parse(label);
    self
  }

  pub fn with_location(mut self, location: impl Into<String>) -> Self {
    self.location_filter = location.into();
    self
  }

  pub fn sorted(mut self, order: SortOrder) -> Self {
    self.sort_order = order;
    self
  }

  /// `true` si ningún filtro está activo (el orden no cuenta).
  pub fn is_unrestricted(&self) -> bool {
    self.search_term.is_empty()
      && self.selected_types.is_empty()
      && self.selected_genres.is_empty()
      && self.selected_price_range == PriceFilter::Any
      && self.location_filter.is_empty()
  }
}

/// Selección de tramo de precio.
///
/// Una etiqueta que no corresponde a ningún tramo no se descarta: se
/// conserva como [`PriceFilter::Unknown`] y no deja pasar a ningún artista.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PriceFilter {
  #[default]
  Any,
  Bucket(PriceBucket),
  Unknown(String),
}

impl PriceFilter {
  pub fn parse(label: &str) -> Self {
    let trimmed = label.trim();
    if trimmed.is_empty() || trimmed == ALL_SENTINEL {
      return PriceFilter::Any;
    }
    match PriceBucket::from_label(trimmed) {
      Some(bucket) => PriceFilter::Bucket(bucket),
      None => PriceFilter::Unknown(label.to_string()),
    }
  }
}

impl From<String> for PriceFilter {
  fn from(s: String) -> Self {
    PriceFilter::parse(&s)
  }
}

impl From<PriceFilter> for String {
  fn from(f: PriceFilter) -> Self {
    match f {
      PriceFilter::Any => ALL_SENTINEL.to_string(),
      PriceFilter::Bucket(b) => b.label().to_string(),
      PriceFilter::Unknown(s) => s,
    }
  }
}

impl From<PriceBucket> for PriceFilter {
  fn from(b: PriceBucket) -> Self {
    PriceFilter::Bucket(b)
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
  #[default]
  Asc,
  Desc,
}

impl SortOrder {
  pub fn toggle(self) -> Self {
    match self {
      SortOrder::Asc => SortOrder::Desc,
      SortOrder::Desc => SortOrder::Asc,
    }
  }
}

impl fmt::Display for SortOrder {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SortOrder::Asc => write!(f, "A-Z"),
      SortOrder::Desc => write!(f, "Z-A"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid sort order: {input}")]
pub struct SortOrderParseError {
  pub input: String,
}

impl FromStr for SortOrder {
  type Err = SortOrderParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "asc" | "a-z" | "ascending" => Ok(SortOrder::Asc),
      "desc" | "z-a" | "descending" => Ok(SortOrder::Desc),
      _ => Err(SortOrderParseError { input: s.to_string() }),
    }
  }
}

/// Regla para decidir si un artista cae en el tramo de precio elegido.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceRule {
  /// Contención textual sobre `price_range` (ver [`PriceBucket::matches`]).
  #[default]
  Label,
  /// Comparación numérica de `booking_price` contra el rango del tramo.
  /// Los artistas sin importe vuelven a la regla textual.
  BookingPrice,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid price rule: {input}")]
pub struct PriceRuleParseError {
  pub input: String,
}

impl FromStr for PriceRule {
  type Err = PriceRuleParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().replace('_', "-").as_str() {
      "label" => Ok(PriceRule::Label),
      "booking-price" => Ok(PriceRule::BookingPrice),
      _ => Err(PriceRuleParseError { input: s.to_string() }),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_criteria_is_unrestricted() {
    let c = Criteria::default();
    assert!(c.is_unrestricted());
    assert_eq!(c.sort_order, SortOrder::Asc);
  }

  #[test]
  fn all_sentinel_does_not_select_a_type() {
    let c = Criteria::default().with_type("all").with_type("");
    assert!(c.selected_types.is_empty());
    assert!(c.is_unrestricted());
  }

  #[test]
  fn price_filter_parsing() {
    assert_eq!(PriceFilter::parse(""), PriceFilter::Any);
    assert_eq!(PriceFilter::parse("all"), PriceFilter::Any);
    assert_eq!(PriceFilter::parse("₹1,00,000+"), PriceFilter::Bucket(PriceBucket::Above1L));
    assert_eq!(PriceFilter::parse("cheap"), PriceFilter::Unknown("cheap".into()));
  }

  #[test]
  fn criteria_deserializes_with_missing_fields() {
    let c: Criteria =
      serde_json::from_str(r#"{"searchTerm":"zakir","selectedPriceRange":"Under ₹20,000"}"#).unwrap();
    assert_eq!(c.search_term, "zakir");
    assert_eq!(c.selected_price_range, PriceFilter::Bucket(PriceBucket::Under20k));
    assert!(c.selected_genres.is_empty());
  }

  #[test]
  fn sort_order_toggles_and_parses() {
    assert_eq!(SortOrder::Asc.toggle(), SortOrder::Desc);
    assert_eq!(SortOrder::Desc.toggle().toggle(), SortOrder::Desc);
    assert_eq!("Z-A".parse::<SortOrder>(), Ok(SortOrder::Desc));
    assert!("sideways".parse::<SortOrder>().is_err());
  }

  #[test]
  fn price_rule_parses_both_spellings() {
    assert_eq!("booking_price".parse::<PriceRule>(), Ok(PriceRule::BookingPrice));
    assert_eq!("label".parse::<PriceRule>(), Ok(PriceRule::Label));
  }
}
