use crate::domain::ids::ArtistId;
use crate::domain::rating::Rating;
use serde::{Deserialize, Serialize};

/// Valor centinela de `image_url` que las vistas deben sustituir por la
/// imagen por defecto.
pub const PLACEHOLDER_IMAGE_SENTINEL: &str = "http://image.jpg";

/// Imagen local que reemplaza al centinela.
pub const DEFAULT_IMAGE_URL: &str = "/default-artist.png";

/// Representa a un artista contratable dentro del catálogo.
///
/// Una vez guardado en el store el registro no cambia; la única mutación
/// del catálogo es añadir artistas nuevos. La forma serializada (camelCase)
/// es el contrato con cualquier capa de persistencia futura.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
  /// Identificador único del artista.
  pub id: ArtistId,

  /// Nombre artístico. Nunca vacío.
  pub name: String,

  /// Categoría (p. ej. "Bollywood Singer"). Conjunto abierto, derivado de los datos.
  #[serde(rename = "type")]
  pub artist_type: String,

  /// Ubicación en texto libre; también se usa para búsquedas por subcadena.
  pub location: String,

  /// Referencia a la imagen. Puede ser [`PLACEHOLDER_IMAGE_SENTINEL`].
  pub image_url: String,

  /// Géneros en el orden en que se declararon.
  pub genres: Vec<String>,

  /// Etiqueta de tramo de precio (ver [`PriceBucket`](super::price_bucket::PriceBucket)).
  pub price_range: String,

  pub rating: Rating,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,

  /// Caché orientativo en rupias.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub booking_price: Option<u64>,
}

impl Artist {
  /// Imagen a mostrar, con el centinela ya sustituido.
  pub fn display_image_url(&self) -> &str {
    if self.image_url == PLACEHOLDER_IMAGE_SENTINEL { DEFAULT_IMAGE_URL } else { &self.image_url }
  }
}
