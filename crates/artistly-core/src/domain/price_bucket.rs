use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Tramos de precio con los que se clasifica a los artistas.
///
/// Es un vocabulario cerrado: el `price_range` de cada [`Artist`](super::artist::Artist)
/// debe poder reproducirse con al menos uno de estos tramos, o ese artista
/// queda inalcanzable cuando se filtra por precio.
///
/// La pertenencia a un tramo se decide por texto, no por importe (ver
/// [`PriceBucket::matches`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriceBucket {
  #[serde(rename = "Under ₹20,000")]
  Under20k,
  #[serde(rename = "₹20,000 - ₹50,000")]
  From20kTo50k,
  #[serde(rename = "₹50,000 - ₹1,00,000")]
  From50kTo1L,
  #[serde(rename = "₹1,00,000+")]
  Above1L,
}

impl PriceBucket {
  pub const ALL: [PriceBucket; 4] =
    [PriceBucket::Under20k, PriceBucket::From20kTo50k, PriceBucket::From50kTo1L, PriceBucket::Above1L];

  /// Etiqueta canónica tal como la muestran las vistas.
  pub fn label(self) -> &'static str {
    match self {
      PriceBucket::Under20k => "Under ₹20,000",
      PriceBucket::From20kTo50k => "₹20,000 - ₹50,000",
      PriceBucket::From50kTo1L => "₹50,000 - ₹1,00,000",
      PriceBucket::Above1L => "₹1,00,000+",
    }
  }

  /// Importes representativos que identifican el tramo dentro de un texto libre.
  fn markers(self) -> &'static [&'static str] {
    match self {
      PriceBucket::Under20k => &["₹15,000", "₹18,000"],
      PriceBucket::From20kTo50k => &["₹20,000", "₹25,000", "₹40,000", "₹45,000"],
      PriceBucket::From50kTo1L => &["₹50,000", "₹60,000", "₹75,000", "₹80,000"],
      PriceBucket::Above1L => &["₹1,00,000+"],
    }
  }

  /// Intervalo semiabierto `[min, max)` en rupias enteras.
  fn amount_range(self) -> (u64, Option<u64>) {
    match self {
      PriceBucket::Under20k => (0, Some(20_000)),
      PriceBucket::From20kTo50k => (20_000, Some(50_000)),
      PriceBucket::From50kTo1L => (50_000, Some(100_000)),
      PriceBucket::Above1L => (100_000, None),
    }
  }

  /// Busca el tramo cuya etiqueta canónica coincide exactamente con `label`.
  pub fn from_label(label: &str) -> Option<Self> {
    let label = label.trim();
    Self::ALL.into_iter().find(|b| b.label() == label)
  }

  /// Decide si un texto de `price_range` pertenece a este tramo.
  ///
  /// - Si el texto es una de las cuatro etiquetas canónicas, pertenece a ese
  ///   tramo y a ningún otro.
  /// - En cualquier otro caso se busca, por contención literal, alguno de los
  ///   importes representativos del tramo (p. ej. `"₹15,000 - ₹18,000"` cae en
  ///   *Under ₹20,000*).
  pub fn matches(self, price_range: &str) -> bool {
    if let Some(canonical) = Self::from_label(price_range) {
      return canonical == self;
    }
    self.markers().iter().any(|m| price_range.contains(m))
  }

  /// Tramos que aceptan `price_range`. Vacío significa que el texto es
  /// inalcanzable por el filtro de precio.
  pub fn classify(price_range: &str) -> Vec<PriceBucket> {
    if price_range.trim().is_empty() {
      return Vec::new();
    }
    Self::ALL.into_iter().filter(|b| b.matches(price_range)).collect()
  }

  /// Tramo numérico que contiene `amount` (rupias).
  pub fn for_amount(amount: u64) -> Self {
    Self::ALL
      .into_iter()
      .find(|b| b.contains_amount(amount))
      .unwrap_or(PriceBucket::Above1L)
  }

  pub fn contains_amount(self, amount: u64) -> bool {
    let (min, max) = self.amount_range();
    amount >= min && max.is_none_or(|max| amount < max)
  }
}

impl fmt::Display for PriceBucket {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown price range: {input}")]
pub struct PriceBucketParseError {
  pub input: String,
}

impl FromStr for PriceBucket {
  type Err = PriceBucketParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::from_label(s).ok_or_else(|| PriceBucketParseError { input: s.to_string() })
  }
}
