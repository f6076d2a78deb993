//! Search module.
//!
//! Text/category queries with sorting for the product grid, and the spec
//! filter used by the build assistant.

mod filter;
mod query;

pub use filter::SpecFilter;
pub use query::{ProductQuery, SortOption};
