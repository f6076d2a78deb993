//! Cart line type.

use crate::catalog::Product;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One product and its quantity.
///
/// The product is captured by value when first added, so its price is
/// frozen for the life of the line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product as it was when added.
    pub product: Product,
    /// Quantity, always at least 1.
    pub quantity: i64,
}

impl CartLine {
    pub(crate) fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Captured unit price.
    pub fn unit_price(&self) -> Money {
        self.product.price
    }

    /// Unit price × quantity.
    pub fn subtotal(&self) -> Money {
        self.product.price.saturating_multiply(self.quantity)
    }
}
