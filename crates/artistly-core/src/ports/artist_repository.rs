use crate::domain::{Artist, ArtistId};
use crate::errors::CoreError;

/// Almacén de artistas del catálogo.
///
/// Solo admite añadir: no hay actualización ni borrado. Un `append_artist`
/// correcto debe verse en el siguiente `list_artists`, y el orden de
/// inserción se conserva.
pub trait ArtistRepository {
  fn list_artists(&self) -> Result<Vec<Artist>, CoreError>;
  fn find_artist(&self, id: &ArtistId) -> Result<Option<Artist>, CoreError>;

  /// Falla con [`CoreError::DuplicateId`] si el id ya existe.
  fn append_artist(&self, artist: Artist) -> Result<(), CoreError>;
}
