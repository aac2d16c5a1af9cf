use crate::domain::ArtistId;
use crate::onboarding::OnboardError;
use thiserror::Error;

/// Error genérico del núcleo de Artistly.
///
/// Las capas superiores (CLI, futuras vistas) deberían mapear este error
/// a mensajes de usuario o logs. El motor de filtrado nunca lo produce.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("an artist with id {0} already exists")]
  DuplicateId(ArtistId),

  #[error(transparent)]
  Onboarding(#[from] OnboardError),
}
