use crate::paths::{ArtistlyPaths, ConfigError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;
use toml_edit::{DocumentMut, Item};
use tracing::debug;

/// Acceso por secciones (`[storage]`, `[listing]`, ...) al fichero de config.
pub trait ConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;
}

pub struct TomlConfigBackend {
  paths: ArtistlyPaths,
}

impl TomlConfigBackend {
  pub fn new(paths: ArtistlyPaths) -> Self {
    Self { paths }
  }

  pub fn paths(&self) -> &ArtistlyPaths {
    &self.paths
  }

  /// Como [`ConfigBackend::load_section`], pero un fichero o sección ausente
  /// devuelve `T::default()`. Los campos que falten dentro de la sección los
  /// rellena serde (`#[serde(default)]` en cada tipo).
  pub fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    match self.read_file()? {
      Some(content) => take_section(&content, section)?.map_or_else(|| Ok(T::default()), |v| decode(section, v)),
      None => Ok(T::default()),
    }
  }

  /// Contenido del fichero, o `None` si todavía no existe.
  fn read_file(&self) -> Result<Option<String>, ConfigError> {
    let path = self.paths.config_file();
    match fs::read_to_string(&path) {
      Ok(content) => Ok(Some(content)),
      Err(e) if e.kind() == ErrorKind::NotFound => {
        debug!(path = %path.display(), "config file missing");
        Ok(None)
      }
      Err(e) => Err(e.into()),
    }
  }
}

fn take_section(content: &str, section: &str) -> Result<Option<toml::Value>, ConfigError> {
  let mut table: toml::Table = toml::from_str(content)?;
  Ok(table.remove(section))
}

fn decode<T: DeserializeOwned>(section: &str, value: toml::Value) -> Result<T, ConfigError> {
  value.try_into().map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
}

/// Serializa `value` como tabla TOML lista para colgar del documento.
fn encode<T: Serialize>(section: &str, value: &T) -> Result<Item, ConfigError> {
  let body = toml::to_string(value).map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;
  let doc: DocumentMut = body.parse().map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;
  Ok(doc.into_item())
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let path = self.paths.config_file();
    let content = self
      .read_file()?
      .ok_or_else(|| ConfigError::Other(format!("{} does not exist", path.display())))?;
    let value = take_section(&content, section)?
      .ok_or_else(|| ConfigError::Other(format!("missing section [{section}] in {}", path.display())))?;

    decode(section, value)
  }

  /// Reemplaza una sección conservando comentarios y el resto del documento.
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let path = self.paths.config_file();

    let mut doc = match self.read_file()? {
      Some(content) => content
        .parse::<DocumentMut>()
        .map_err(|e| ConfigError::Other(format!("parse {}: {e}", path.display())))?,
      None => DocumentMut::new(),
    };
    doc[section] = encode(section, value)?;

    atomic_write_str(&path, &doc.to_string())?;
    debug!(path = %path.display(), section, "config section saved");

    Ok(())
  }
}

/// Escribe en `<fichero>.toml.tmp` y renombra encima del destino.
fn atomic_write_str(path: &Path, contents: &str) -> std::io::Result<()> {
  let tmp_path = path.with_extension("toml.tmp");
  let mut tmp_file = fs::File::create(&tmp_path)?;
  tmp_file.write_all(contents.as_bytes())?;
  tmp_file.sync_all()?;
  drop(tmp_file);

  fs::rename(&tmp_path, path)
}
