//! Cart summary for the order-summary panel.

use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Derived totals for a cart at one point in time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    /// Cart currency.
    pub currency: Currency,
    /// Per-line breakdown, in cart order.
    pub lines: Vec<LineSummary>,
    /// Sum of quantities.
    pub total_items: i64,
    /// Sum of line subtotals.
    pub subtotal: Money,
    /// Shipping is free.
    pub shipping_total: Money,
    /// Subtotal plus shipping.
    pub grand_total: Money,
}

impl CartSummary {
    /// True when the cart has no lines (the empty-state view).
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether shipping costs nothing.
    pub fn has_free_shipping(&self) -> bool {
        self.shipping_total.is_zero()
    }
}

/// Pricing for a single cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineSummary {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: i64,
    /// unit_price × quantity.
    pub subtotal: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary() {
        let summary = CartSummary {
            currency: Currency::USD,
            lines: vec![],
            total_items: 0,
            subtotal: Money::zero(Currency::USD),
            shipping_total: Money::zero(Currency::USD),
            grand_total: Money::zero(Currency::USD),
        };
        assert!(summary.is_empty());
        assert!(summary.has_free_shipping());
    }
}
