pub mod artist;
pub mod ids;
pub mod price_bucket;
pub mod rating;

pub use artist::Artist;
pub use ids::ArtistId;
pub use price_bucket::PriceBucket;
pub use rating::Rating;
