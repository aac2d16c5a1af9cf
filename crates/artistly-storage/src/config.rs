use artistly_config::{ConfigBackend, ConfigError, TomlConfigBackend, config_backend};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct StorageConfig {
  /// Cargar los artistas semilla al arrancar.
  pub seed_on_start: bool,
}

impl Default for StorageConfig {
  fn default() -> Self {
    StorageConfig { seed_on_start: true }
  }
}

impl StorageConfig {
  const SECTION: &'static str = "storage";

  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(config_backend()?)
  }

  /// Lee la sección (o sus valores por defecto) y la vuelve a escribir para
  /// que el fichero siempre muestre todas las claves.
  pub fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    let cfg = backend.load_section_with_default(Self::SECTION)?;
    backend.save_section(Self::SECTION, &cfg)?;
    Ok(cfg)
  }
}
