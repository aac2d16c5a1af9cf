mod backend;
mod paths;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use paths::{ArtistlyPaths, BASE_DIR_ENV, ConfigError};

use once_cell::sync::OnceCell;

static CONFIG_BACKEND: OnceCell<TomlConfigBackend> = OnceCell::new();

/// Backend de config compartido por el proceso.
///
/// Se crea en el primer uso. Si los directorios no se pueden resolver o
/// crear, devuelve el error y lo vuelve a intentar en la siguiente llamada.
pub fn config_backend() -> Result<&'static TomlConfigBackend, ConfigError> {
  CONFIG_BACKEND.get_or_try_init(|| ArtistlyPaths::detect().map(TomlConfigBackend::new))
}
