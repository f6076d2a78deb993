//! Inventory overview for the admin panel.

use crate::catalog::Product;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Aggregate inventory figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryStats {
    /// Σ price × stock.
    pub total_value: Money,
    /// Σ stock.
    pub total_units: i64,
    /// Number of distinct listings.
    pub unique_products: usize,
    /// Listings with no stock left.
    pub out_of_stock: usize,
}

impl InventoryStats {
    /// Compute stats over `products` priced in `currency`.
    pub fn compute(products: &[Product], currency: Currency) -> Self {
        let values: Vec<Money> = products.iter().map(Product::stock_value).collect();
        Self {
            total_value: Money::saturating_sum(values.iter(), currency),
            total_units: products
                .iter()
                .fold(0_i64, |acc, p| acc.saturating_add(p.stock)),
            unique_products: products.len(),
            out_of_stock: products.iter().filter(|p| !p.is_in_stock()).count(),
        }
    }
}

/// Products at or below `threshold` units, lowest first.
pub fn low_stock(products: &[Product], threshold: i64) -> Vec<&Product> {
    let mut low: Vec<&Product> = products.iter().filter(|p| p.stock <= threshold).collect();
    low.sort_by_key(|p| p.stock);
    low
}
