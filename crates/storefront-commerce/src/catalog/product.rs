//! Catalog product type.

use crate::catalog::{Category, Specifications};
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Image shown when a product has none.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400.png";

/// A product in the catalog.
///
/// Products reach the cart fully resolved; the cart keeps its own copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Brand name.
    pub brand: String,
    /// Catalog category.
    pub category: Category,
    /// Full description.
    pub description: String,
    /// Unit price in minor units.
    pub price: Money,
    /// Image URLs; the first is the main image.
    pub images: Vec<String>,
    /// Units in stock.
    pub stock: i64,
    /// Category-dependent attributes.
    pub specifications: Specifications,
}

impl Product {
    /// Create a product with an empty description, no images and no stock.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: Category,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: String::new(),
            category,
            description: String::new(),
            price,
            images: Vec::new(),
            stock: 0,
            specifications: Specifications::new(),
        }
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = stock.max(0);
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.images.push(url.into());
        self
    }

    pub fn with_spec(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.specifications.insert(key, value);
        self
    }

    /// The canonical image, or the placeholder.
    pub fn main_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Look up a specification value.
    pub fn spec(&self, key: &str) -> Option<&str> {
        self.specifications.get(key)
    }

    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Stock value (price × stock), clamped at the `i64` bounds.
    pub fn stock_value(&self) -> Money {
        self.price.saturating_multiply(self.stock)
    }
}

/// Products sharing `product`'s category, excluding itself, in catalog order.
pub fn similar_products<'a>(
    products: &'a [Product],
    product: &Product,
    limit: usize,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| p.category == product.category && p.id != product.id)
        .take(limit)
        .collect()
}
