//! Domain types and logic for the Storefront PC shop.
//!
//! - **Catalog**: products, categories, specifications, the catalog provider
//! - **Cart**: the session cart store with derived totals
//! - **Search**: grid queries and spec filters
//! - **Assistant**: PC builder recommendations
//! - **Comments**: product comments and ratings
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let desk = Product::new("1", "Office Elite", Category::Work, Money::new(79999, Currency::USD));
//! let mut cart = CartStore::default();
//! cart.add_to_cart(&desk);
//! cart.add_to_cart(&desk);
//!
//! assert_eq!(cart.total_items(), 2);
//! assert_eq!(cart.total_price().display(), "$1599.98");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod assistant;
pub mod cart;
pub mod catalog;
pub mod comments;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        CatalogProvider, Category, InMemoryCatalog, PriceUnit, Product, ProductDraft,
        ProductRecord, Specifications,
    };

    // Cart
    pub use crate::cart::{
        CartChange, CartConfig, CartLine, CartNotice, CartNotifier, CartStore, CartSummary,
        StockPolicy,
    };

    // Search
    pub use crate::search::{ProductQuery, SortOption, SpecFilter};

    // Assistant
    pub use crate::assistant::{recommend, Answers, Budget, Recommendation, UseCase};

    // Comments
    pub use crate::comments::{Comment, CommentBoard, NewComment};
}
