//! Motor de búsqueda del catálogo: criterios, cadena de predicados y orden.

pub mod criteria;
pub mod facets;
pub mod filter;
pub mod sort;

pub use criteria::{ALL_SENTINEL, Criteria, PriceFilter, PriceRule, SortOrder};
pub use facets::Facets;
pub use filter::{filter_and_sort, filter_and_sort_with};
pub use sort::compare_names;
