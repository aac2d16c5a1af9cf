use artistly_config::{ConfigBackend, ConfigError, TomlConfigBackend, config_backend};
use artistly_core::catalog::{PriceRule, SortOrder};
use serde::{Deserialize, Serialize};

/// `[listing]` section: defaults applied to every catalog query.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
  /// Order used when the command line does not ask for one.
  pub default_sort: SortOrder,
  /// How a selected price bucket is matched against artists.
  pub price_rule: PriceRule,
}

impl ListingConfig {
  const SECTION: &'static str = "listing";

  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(config_backend()?)
  }

  pub fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    let cfg = backend.load_section_with_default(Self::SECTION)?;
    backend.save_section(Self::SECTION, &cfg)?;
    Ok(cfg)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use artistly_config::ArtistlyPaths;
  use tempfile::tempdir;

  #[test]
  fn reads_listing_section() {
    let tmp = tempdir().unwrap();
    let backend = TomlConfigBackend::new(ArtistlyPaths::at(tmp.path()).unwrap());
    std::fs::write(
      backend.paths().config_file(),
      "[listing]\ndefault_sort = \"desc\"\nprice_rule = \"booking-price\"\n",
    )
    .unwrap();

    let cfg = ListingConfig::load_from(&backend).unwrap();

    assert_eq!(cfg.default_sort, SortOrder::Desc);
    assert_eq!(cfg.price_rule, PriceRule::BookingPrice);
  }

  #[test]
  fn missing_section_falls_back_to_defaults() {
    let tmp = tempdir().unwrap();
    let backend = TomlConfigBackend::new(ArtistlyPaths::at(tmp.path()).unwrap());

    assert_eq!(ListingConfig::load_from(&backend).unwrap(), ListingConfig::default());
  }
}
