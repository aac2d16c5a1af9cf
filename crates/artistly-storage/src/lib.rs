pub mod config;
pub mod seed;

use std::cell::RefCell;

use indexmap::IndexMap;
use tracing::{debug, info};

use artistly_core::domain::{Artist, ArtistId};
use artistly_core::errors::CoreError;
use artistly_core::ports::ArtistRepository;

pub use config::StorageConfig;
pub use seed::seed_artists;

/// Store de artistas en memoria, vivo mientras dure el proceso.
///
/// Un único dueño y un único hilo: la mutabilidad interior con `RefCell`
/// basta para que `append_artist` funcione a través de `&self`. El
/// `IndexMap` conserva el orden de inserción y garantiza ids únicos.
#[derive(Debug, Default)]
pub struct InMemoryArtistStore {
  artists: RefCell<IndexMap<ArtistId, Artist>>,
}

impl InMemoryArtistStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Store con los artistas semilla ya cargados.
  pub fn seeded() -> Self {
    let store = Self::new();
    {
      let mut artists = store.artists.borrow_mut();
      for artist in seed_artists() {
        artists.insert(artist.id.clone(), artist);
      }
    }
    debug!(count = store.len(), "seed artists loaded");
    store
  }

  pub fn from_config(cfg: &StorageConfig) -> Self {
    if cfg.seed_on_start { Self::seeded() } else { Self::new() }
  }

  pub fn len(&self) -> usize {
    self.artists.borrow().len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl ArtistRepository for InMemoryArtistStore {
  fn list_artists(&self) -> Result<Vec<Artist>, CoreError> {
    Ok(self.artists.borrow().values().cloned().collect())
  }

  fn find_artist(&self, id: &ArtistId) -> Result<Option<Artist>, CoreError> {
    Ok(self.artists.borrow().get(id).cloned())
  }

  fn append_artist(&self, artist: Artist) -> Result<(), CoreError> {
    let mut artists = self.artists.borrow_mut();

    if artists.contains_key(&artist.id) {
      return Err(CoreError::DuplicateId(artist.id));
    }

    info!(id = %artist.id, total = artists.len() + 1, "artist appended");
    artists.insert(artist.id.clone(), artist);

    Ok(())
  }
}
