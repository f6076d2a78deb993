//! Product catalog module.
//!
//! Contains the product model, the backend record boundary, admin drafts,
//! the catalog provider seam and inventory stats.

mod category;
mod draft;
mod product;
mod provider;
mod record;
pub mod seed;
pub mod specs;
mod stats;

pub use category::Category;
pub use draft::ProductDraft;
pub use product::{similar_products, Product, PLACEHOLDER_IMAGE};
pub use provider::{CatalogProvider, InMemoryCatalog};
pub use record::{PriceUnit, ProductRecord};
pub use specs::{SpecSchema, Specifications};
pub use stats::{low_stock, InventoryStats};
