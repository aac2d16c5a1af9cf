pub mod catalog_service;

pub use catalog_service::{CatalogService, DashboardRow, format_inr};
