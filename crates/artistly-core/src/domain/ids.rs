use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identificador opaco de un artista.
///
/// Los registros semilla usan claves cortas (`"1"`, `"2"`, ...) y los
/// artistas dados de alta en el onboarding reciben un UUID v4. Al catálogo
/// solo le importa que sea único y estable mientras viva el registro.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtistId(String);

impl ArtistId {
  /// Genera un nuevo identificador único.
  pub fn generate() -> Self {
    ArtistId(Uuid::new_v4().to_string())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for ArtistId {
  fn from(s: &str) -> Self {
    ArtistId(s.to_string())
  }
}

impl From<String> for ArtistId {
  fn from(s: String) -> Self {
    ArtistId(s)
  }
}

impl From<Uuid> for ArtistId {
  fn from(u: Uuid) -> Self {
    ArtistId(u.to_string())
  }
}

impl fmt::Display for ArtistId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn generated_ids_are_distinct() {
    let a = ArtistId::generate();
    let b = ArtistId::generate();
    assert_ne!(a, b);
    assert!(Uuid::parse_str(a.as_str()).is_ok());
  }

  #[test]
  fn serializes_as_plain_string() {
    let id = ArtistId::from("7");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"7\"");
  }
}
