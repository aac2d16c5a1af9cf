mod cli;
mod config;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::warn;

use artistly_core::catalog::Criteria;
use artistly_core::onboarding::ArtistDraft;
use artistly_core::services::CatalogService;
use artistly_storage::{InMemoryArtistStore, StorageConfig};

use crate::cli::{Cli, Commands};
use crate::config::ListingConfig;

/// Service wired to the process-lifetime store.
type ConcreteCatalogService = CatalogService<InMemoryArtistStore>;

pub fn run() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    )
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();

  let (storage_cfg, listing_cfg) = load_config();

  // --- Dependency Injection Phase ---
  let store = InMemoryArtistStore::from_config(&storage_cfg);
  let service: ConcreteCatalogService = CatalogService::new(store).with_price_rule(listing_cfg.price_rule);

  match cli.command {
    Commands::List(args) => {
      let criteria = args.criteria(&listing_cfg);
      let artists = service.browse_with(&criteria, args.price_rule(&listing_cfg))?;
      emit(cli.json, &artists, || output::listing(&artists))
    }
    Commands::Dashboard => {
      let rows = service.dashboard()?;
      emit(cli.json, &rows, || output::dashboard(&rows))
    }
    Commands::Facets => {
      let facets = service.facets()?;
      emit(cli.json, &facets, || output::facets(&facets))
    }
    Commands::Onboard(args) => {
      let artist = service.onboard(&ArtistDraft::from(args)).context("onboarding failed")?;
      let criteria = Criteria::default().sorted(listing_cfg.default_sort);
      let artists = service.browse(&criteria)?;
      emit(cli.json, &artist, || {
        Ok(format!("Onboarded {} ({})\n\n{}", artist.name, artist.id, output::listing(&artists)?))
      })
    }
  }
}

/// Config problems (read-only home, malformed file) never block a query:
/// each section falls back to its defaults.
fn load_config() -> (StorageConfig, ListingConfig) {
  let storage_cfg = StorageConfig::load().unwrap_or_else(|e| {
    warn!(error = %e, "could not load [storage] config, using defaults");
    StorageConfig::default()
  });
  let listing_cfg = ListingConfig::load().unwrap_or_else(|e| {
    warn!(error = %e, "could not load [listing] config, using defaults");
    ListingConfig::default()
  });
  (storage_cfg, listing_cfg)
}

fn emit<T, F>(json: bool, value: &T, text: F) -> Result<()>
where
  T: Serialize + ?Sized,
  F: FnOnce() -> Result<String, std::fmt::Error>,
{
  if json {
    println!("{}", serde_json::to_string_pretty(value)?);
  } else {
    print!("{}", text()?);
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use artistly_config::BASE_DIR_ENV;
  use tempfile::tempdir;

  #[test]
  fn unusable_config_dir_falls_back_to_defaults() {
    let tmp = tempdir().unwrap();
    let blocker = tmp.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();

    let original = std::env::var(BASE_DIR_ENV).ok();
    unsafe { std::env::set_var(BASE_DIR_ENV, blocker.join("base")) };

    let (storage_cfg, listing_cfg) = load_config();

    match original {
      Some(val) => unsafe { std::env::set_var(BASE_DIR_ENV, val) },
      None => unsafe { std::env::remove_var(BASE_DIR_ENV) },
    }

    assert_eq!(storage_cfg, StorageConfig::default());
    assert_eq!(listing_cfg, ListingConfig::default());
  }
}
