use artistly_core::catalog::{Criteria, PriceRule, SortOrder};
use artistly_core::onboarding::ArtistDraft;
use clap::{Args, Parser, Subcommand};

use crate::config::ListingConfig;

#[derive(Parser, Debug)]
#[command(name = "artistly", version)]
#[command(about = "Browse, filter and onboard bookable artists", long_about = None)]
pub struct Cli {
  /// Print JSON instead of a text table
  #[arg(long, global = true)]
  pub json: bool,

  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Filtered, sorted artist listing
  List(ListArgs),
  /// Manager dashboard: every artist in insertion order with its fee
  Dashboard,
  /// Genres, artist types and price ranges available as filters
  Facets,
  /// Validate and add a new artist, then print the catalog
  Onboard(OnboardArgs),
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
  /// Free-text search over name, type, location, genres and description
  #[arg(long, short)]
  pub search: Option<String>,

  /// Artist type to keep (repeatable; "all" means no restriction)
  #[arg(long = "type", short = 't')]
  pub types: Vec<String>,

  /// Genre to keep (repeatable; any one match is enough)
  #[arg(long = "genre", short)]
  pub genres: Vec<String>,

  /// Price range label, e.g. "₹20,000 - ₹50,000"
  #[arg(long, short)]
  pub price: Option<String>,

  /// Location substring
  #[arg(long, short)]
  pub location: Option<String>,

  /// Sort Z-A instead of the configured default
  #[arg(long, conflicts_with = "asc")]
  pub desc: bool,

  /// Sort A-Z instead of the configured default
  #[arg(long)]
  pub asc: bool,

  /// Override the configured price matching rule ("label" or "booking-price")
  #[arg(long)]
  pub price_rule: Option<PriceRule>,
}

impl ListArgs {
  pub fn criteria(&self, listing: &ListingConfig) -> Criteria {
    let order = if self.desc {
      SortOrder::Desc
    } else if self.asc {
      SortOrder::Asc
    } else {
      listing.default_sort
    };

    let mut criteria = Criteria::default()
      .with_types(self.types.iter().cloned())
      .with_genres(self.genres.iter().cloned())
      .sorted(order);

    if let Some(search) = &self.search {
      criteria = criteria.with_search(search.clone());
    }
    if let Some(price) = &self.price {
      criteria = criteria.with_price_range(price);
    }
    if let Some(location) = &self.location {
      criteria = criteria.with_location(location.clone());
    }

    criteria
  }

  pub fn price_rule(&self, listing: &ListingConfig) -> PriceRule {
    self.price_rule.unwrap_or(listing.price_rule)
  }
}

#[derive(Args, Debug)]
pub struct OnboardArgs {
  #[arg(long)]
  pub name: String,

  #[arg(long = "type")]
  pub artist_type: String,

  #[arg(long)]
  pub location: String,

  /// Leave empty to use the placeholder image
  #[arg(long, default_value = "")]
  pub image_url: String,

  /// Genre (repeatable, at least one)
  #[arg(long = "genre")]
  pub genres: Vec<String>,

  /// Price range label
  #[arg(long)]
  pub price: String,

  #[arg(long, default_value_t = 4.0)]
  pub rating: f32,
}

impl From<OnboardArgs> for ArtistDraft {
  fn from(args: OnboardArgs) -> Self {
    ArtistDraft {
      name: args.name,
      artist_type: args.artist_type,
      location: args.location,
      image_url: args.image_url,
      genres: args.genres,
      price_range: args.price,
      rating: args.rating,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use artistly_core::catalog::PriceFilter;
  use artistly_core::domain::PriceBucket;

  fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("artistly").chain(args.iter().copied())).unwrap()
  }

  #[test]
  fn list_flags_become_criteria() {
    let cli = parse(&["list", "-s", "khan", "--type", "all", "--genre", "Comedy", "--price", "₹20,000 - ₹50,000"]);
    let Commands::List(args) = cli.command else { panic!("expected list") };

    let criteria = args.criteria(&ListingConfig::default());

    assert_eq!(criteria.search_term, "khan");
    assert!(criteria.selected_types.is_empty());
    assert!(criteria.selected_genres.contains("Comedy"));
    assert_eq!(criteria.selected_price_range, PriceFilter::Bucket(PriceBucket::From20kTo50k));
    assert_eq!(criteria.sort_order, SortOrder::Asc);
  }

  #[test]
  fn sort_flag_overrides_configured_default() {
    let listing = ListingConfig { default_sort: SortOrder::Desc, ..Default::default() };

    let Commands::List(args) = parse(&["list"]).command else { panic!("expected list") };
    assert_eq!(args.criteria(&listing).sort_order, SortOrder::Desc);

    let Commands::List(args) = parse(&["list", "--asc"]).command else { panic!("expected list") };
    assert_eq!(args.criteria(&listing).sort_order, SortOrder::Asc);
  }

  #[test]
  fn price_rule_flag_parses() {
    let Commands::List(args) = parse(&["list", "--price-rule", "booking-price"]).command else {
      panic!("expected list")
    };
    assert_eq!(args.price_rule(&ListingConfig::default()), PriceRule::BookingPrice);
  }

  #[test]
  fn onboard_args_map_to_draft() {
    let cli = parse(&[
      "onboard", "--name", "Lagori", "--type", "Fusion Rock Band", "--location", "Bangalore", "--genre", "Fusion",
      "--price", "₹50,000 - ₹1,00,000",
    ]);
    let Commands::Onboard(args) = cli.command else { panic!("expected onboard") };

    let draft = ArtistDraft::from(args);
    assert_eq!(draft.genres, ["Fusion"]);
    assert_eq!(draft.rating, 4.0);
    assert!(draft.validate().is_ok());
  }
}
