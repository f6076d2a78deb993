//! The session cart store.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cart::{CartLine, CartNotice, CartNotifier, CartSummary, LineSummary, NoopNotifier};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// Whether the cart looks at `Product::stock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StockPolicy {
    /// Stock is informational; any positive quantity is allowed.
    #[default]
    Unchecked,
    /// Quantities are clamped to the stock captured with the product.
    CapAtStock,
}

impl StockPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockPolicy::Unchecked => "unchecked",
            StockPolicy::CapAtStock => "cap-at-stock",
        }
    }
}

/// Cart settings fixed for the life of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CartConfig {
    /// Currency every line must be priced in.
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub stock_policy: StockPolicy,
}

/// Why an add was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RejectReason {
    /// The product id is blank.
    InvalidProductId,
    /// The product is priced in another currency.
    CurrencyMismatch,
    /// Stock is enforced and the product has none.
    OutOfStock,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::InvalidProductId => write!(f, "product has no id"),
            RejectReason::CurrencyMismatch => write!(f, "product is priced in another currency"),
            RejectReason::OutOfStock => write!(f, "product is out of stock"),
        }
    }
}

/// Outcome of a cart operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum CartChange {
    /// A new line was appended with quantity 1.
    Added { product_id: ProductId },
    /// An existing line grew by one.
    Incremented { product_id: ProductId, quantity: i64 },
    /// A line's quantity was replaced.
    Updated { product_id: ProductId, quantity: i64 },
    /// The requested quantity was clamped. `previous` equals `quantity`
    /// when the line was already at its limit.
    Capped {
        product_id: ProductId,
        requested: i64,
        previous: i64,
        quantity: i64,
    },
    /// A line was removed.
    Removed { product_id: ProductId },
    /// Every line was removed.
    Cleared { lines: usize },
    /// Nothing matched; the cart is as it was.
    Unchanged,
    /// The product was refused.
    Rejected {
        product_id: ProductId,
        reason: RejectReason,
    },
}

impl CartChange {
    /// Whether the cart's lines changed.
    pub fn is_mutation(&self) -> bool {
        match self {
            CartChange::Unchanged | CartChange::Rejected { .. } => false,
            CartChange::Cleared { lines } => *lines > 0,
            CartChange::Capped {
                previous, quantity, ..
            } => previous != quantity,
            _ => true,
        }
    }
}

/// The shopping cart for one session.
///
/// Lines are unique by product id and kept in the order products were first
/// added. Totals are derived on demand. Every operation is total: misses are
/// reported as [`CartChange::Unchanged`], never as errors.
pub struct CartStore {
    config: CartConfig,
    lines: Vec<CartLine>,
    notifier: Box<dyn CartNotifier>,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new(config: CartConfig) -> Self {
        Self {
            config,
            lines: Vec::new(),
            notifier: Box::new(NoopNotifier),
        }
    }

    /// Send acknowledgments to `notifier`.
    pub fn with_notifier(mut self, notifier: impl CartNotifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    /// Add one unit of `product`.
    ///
    /// An existing line is incremented; otherwise a line with quantity 1 is
    /// appended holding a copy of `product`.
    pub fn add_to_cart(&mut self, product: &Product) -> CartChange {
        if product.id.is_blank() {
            return self.reject(product, RejectReason::InvalidProductId);
        }
        if product.price.currency != self.config.currency {
            return self.reject(product, RejectReason::CurrencyMismatch);
        }

        let policy = self.config.stock_policy;
        let change = match self.lines.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => {
                let limit = quantity_limit(policy, &line.product);
                let requested = line.quantity.saturating_add(1);
                if requested > limit {
                    CartChange::Capped {
                        product_id: product.id.clone(),
                        requested,
                        previous: line.quantity,
                        quantity: line.quantity,
                    }
                } else {
                    line.quantity = requested;
                    CartChange::Incremented {
                        product_id: product.id.clone(),
                        quantity: requested,
                    }
                }
            }
            None => {
                if policy == StockPolicy::CapAtStock && product.stock <= 0 {
                    return self.reject(product, RejectReason::OutOfStock);
                }
                self.lines.push(CartLine::new(product.clone()));
                CartChange::Added {
                    product_id: product.id.clone(),
                }
            }
        };

        tracing::debug!(product_id = %product.id, ?change, "add to cart");
        self.announce(&change, &product.name);
        change
    }

    /// Replace a line's quantity.
    ///
    /// Unknown ids are a no-op. Quantities of zero or less remove the line.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) -> CartChange {
        if quantity <= 0 {
            return self.remove_from_cart(product_id);
        }

        let policy = self.config.stock_policy;
        let Some(line) = self.lines.iter_mut().find(|l| &l.product.id == product_id) else {
            tracing::debug!(product_id = %product_id, "update of product not in cart");
            return CartChange::Unchanged;
        };

        let limit = quantity_limit(policy, &line.product);
        let change = if quantity > limit {
            let previous = line.quantity;
            line.quantity = limit;
            CartChange::Capped {
                product_id: product_id.clone(),
                requested: quantity,
                previous,
                quantity: limit,
            }
        } else {
            line.quantity = quantity;
            CartChange::Updated {
                product_id: product_id.clone(),
                quantity,
            }
        };
        let name = line.product.name.clone();

        tracing::debug!(product_id = %product_id, ?change, "update quantity");
        self.announce(&change, &name);
        change
    }

    /// Remove the line for `product_id`, if any.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) -> CartChange {
        let Some(index) = self.lines.iter().position(|l| &l.product.id == product_id) else {
            return CartChange::Unchanged;
        };
        let line = self.lines.remove(index);
        let change = CartChange::Removed {
            product_id: product_id.clone(),
        };

        tracing::debug!(product_id = %product_id, "remove from cart");
        self.announce(&change, &line.product.name);
        change
    }

    /// Remove every line. Clearing an empty cart reports `Cleared { lines: 0 }`.
    pub fn clear_cart(&mut self) -> CartChange {
        let lines = self.lines.len();
        self.lines.clear();
        let change = CartChange::Cleared { lines };
        if lines > 0 {
            tracing::debug!(lines, "cart cleared");
            self.announce(&change, "");
        }
        change
    }

    /// Sum of all quantities.
    pub fn total_items(&self) -> i64 {
        self.lines
            .iter()
            .fold(0_i64, |acc, l| acc.saturating_add(l.quantity))
    }

    /// Sum of quantity × captured price.
    pub fn total_price(&self) -> Money {
        let subtotals: Vec<Money> = self.lines.iter().map(CartLine::subtotal).collect();
        Money::saturating_sum(subtotals.iter(), self.config.currency)
    }

    /// Lines in the order they were added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for `product_id`.
    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product.id == product_id)
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Snapshot of lines and totals.
    pub fn summary(&self) -> CartSummary {
        let currency = self.config.currency;
        let subtotal = self.total_price();
        let shipping_total = Money::zero(currency);
        CartSummary {
            currency,
            lines: self
                .lines
                .iter()
                .map(|l| LineSummary {
                    product_id: l.product.id.clone(),
                    name: l.product.name.clone(),
                    unit_price: l.unit_price(),
                    quantity: l.quantity,
                    subtotal: l.subtotal(),
                })
                .collect(),
            total_items: self.total_items(),
            subtotal,
            shipping_total,
            grand_total: subtotal.try_add(&shipping_total).unwrap_or(subtotal),
        }
    }

    fn reject(&self, product: &Product, reason: RejectReason) -> CartChange {
        let change = CartChange::Rejected {
            product_id: product.id.clone(),
            reason,
        };
        tracing::debug!(product_id = %product.id, %reason, "add to cart rejected");
        self.announce(&change, &product.name);
        change
    }

    fn announce(&self, change: &CartChange, name: &str) {
        let (title, description) = match change {
            CartChange::Added { .. } | CartChange::Incremented { .. } => (
                "Added to cart".to_string(),
                format!("{} has been added to your cart.", name),
            ),
            CartChange::Updated { quantity, .. } => (
                "Cart updated".to_string(),
                format!("{} quantity set to {}.", name, quantity),
            ),
            CartChange::Capped { quantity, .. } => (
                "Quantity limited".to_string(),
                format!("Only {} x {} can be in your cart.", quantity, name),
            ),
            CartChange::Removed { .. } => (
                "Removed from cart".to_string(),
                format!("{} has been removed from your cart.", name),
            ),
            CartChange::Cleared { .. } => (
                "Cart cleared".to_string(),
                "All items have been removed from your cart.".to_string(),
            ),
            CartChange::Rejected { reason, .. } => (
                "Could not add to cart".to_string(),
                format!("{}: {}.", name, reason),
            ),
            CartChange::Unchanged => return,
        };
        self.notifier.notify(&CartNotice {
            title,
            description,
            change: change.clone(),
        });
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(CartConfig::default())
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("config", &self.config)
            .field("lines", &self.lines)
            .finish_non_exhaustive()
    }
}

fn quantity_limit(policy: StockPolicy, product: &Product) -> i64 {
    match policy {
        StockPolicy::Unchecked => i64::MAX,
        StockPolicy::CapAtStock => product.stock.max(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn product(id: &str, cents: i64) -> Product {
        Product::new(id, format!("Product {}", id), Category::Desktop, Money::new(cents, Currency::USD))
            .with_stock(10)
    }

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    #[test]
    fn test_empty_cart() {
        let cart = CartStore::default();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), usd(0));
        assert!(cart.summary().is_empty());
    }

    #[test]
    fn test_repeated_add_accumulates_one_line() {
        let mut cart = CartStore::default();
        let p = product("a", 100);
        for _ in 0..5 {
            cart.add_to_cart(&p);
        }
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.line(&p.id).unwrap().quantity, 5);
    }

    #[test]
    fn test_first_add_then_increment() {
        let mut cart = CartStore::default();
        let p = product("a", 100);
        assert_eq!(cart.add_to_cart(&p), CartChange::Added { product_id: p.id.clone() });
        assert_eq!(
            cart.add_to_cart(&p),
            CartChange::Incremented { product_id: p.id.clone(), quantity: 2 }
        );
    }

    #[test]
    fn test_distinct_products_get_distinct_lines() {
        let mut cart = CartStore::default();
        let a = product("a", 100);
        let b = product("b", 50);
        cart.add_to_cart(&a);
        cart.add_to_cart(&b);
        cart.add_to_cart(&b);

        assert_eq!(cart.unique_item_count(), 2);
        assert_eq!(cart.total_items(), 3);
        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_scenario_totals() {
        let mut cart = CartStore::default();
        cart.add_to_cart(&product("a", 100));
        cart.add_to_cart(&product("b", 50));
        cart.add_to_cart(&product("b", 50));

        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price(), usd(200));
    }

    #[test]
    fn test_update_quantity_replaces() {
        let mut cart = CartStore::default();
        let a = product("a", 100);
        cart.add_to_cart(&a);

        let change = cart.update_quantity(&a.id, 5);
        assert_eq!(change, CartChange::Updated { product_id: a.id.clone(), quantity: 5 });
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.total_items(), 5);

        cart.update_quantity(&a.id, 2);
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn test_update_to_zero_or_negative_removes() {
        let mut cart = CartStore::default();
        let a = product("a", 100);
        let b = product("b", 100);
        cart.add_to_cart(&a);
        cart.add_to_cart(&b);

        assert_eq!(cart.update_quantity(&a.id, 0), CartChange::Removed { product_id: a.id.clone() });
        assert_eq!(cart.update_quantity(&b.id, -5), CartChange::Removed { product_id: b.id.clone() });
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_missing_is_noop() {
        let mut cart = CartStore::default();
        cart.add_to_cart(&product("a", 100));
        let missing = ProductId::new("zzz");

        assert_eq!(cart.update_quantity(&missing, 3), CartChange::Unchanged);
        assert_eq!(cart.update_quantity(&missing, 0), CartChange::Unchanged);
        assert_eq!(cart.update_quantity(&missing, -5), CartChange::Unchanged);
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = CartStore::default();
        let a = product("a", 100);
        cart.add_to_cart(&a);
        cart.add_to_cart(&product("b", 100));

        assert_eq!(cart.remove_from_cart(&a.id), CartChange::Removed { product_id: a.id.clone() });
        let lines_after_first = cart.lines().to_vec();
        assert_eq!(cart.remove_from_cart(&a.id), CartChange::Unchanged);
        assert_eq!(cart.lines(), lines_after_first.as_slice());
    }

    #[test]
    fn test_clear_cart() {
        let mut cart = CartStore::default();
        cart.add_to_cart(&product("a", 100));
        cart.add_to_cart(&product("b", 300));

        let first = cart.clear_cart();
        assert_eq!(first, CartChange::Cleared { lines: 2 });
        assert!(first.is_mutation());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), usd(0));

        let second = cart.clear_cart();
        assert_eq!(second, CartChange::Cleared { lines: 0 });
        assert!(!second.is_mutation());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_price_captured_at_add_time() {
        let mut cart = CartStore::default();
        let mut a = product("a", 100);
        cart.add_to_cart(&a);
        cart.add_to_cart(&a);

        a.price = usd(999);
        cart.add_to_cart(&a);

        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price(), usd(300));
        assert_eq!(cart.line(&a.id).unwrap().unit_price(), usd(100));
    }

    #[test]
    fn test_unchecked_policy_ignores_stock() {
        let mut cart = CartStore::default();
        let a = product("a", 100).with_stock(1);
        cart.add_to_cart(&a);
        cart.add_to_cart(&a);
        cart.add_to_cart(&a);
        assert_eq!(cart.total_items(), 3);

        let none_left = product("b", 100).with_stock(0);
        assert_eq!(
            cart.add_to_cart(&none_left),
            CartChange::Added { product_id: none_left.id.clone() }
        );
    }

    #[test]
    fn test_cap_at_stock_policy() {
        let mut cart = CartStore::new(CartConfig {
            currency: Currency::USD,
            stock_policy: StockPolicy::CapAtStock,
        });
        let a = product("a", 100).with_stock(2);
        cart.add_to_cart(&a);
        cart.add_to_cart(&a);
        assert_eq!(
            cart.add_to_cart(&a),
            CartChange::Capped { product_id: a.id.clone(), requested: 3, previous: 2, quantity: 2 }
        );
        assert_eq!(
            cart.update_quantity(&a.id, 7),
            CartChange::Capped { product_id: a.id.clone(), requested: 7, previous: 2, quantity: 2 }
        );
        assert_eq!(cart.total_items(), 2);

        let sold_out = product("b", 100).with_stock(0);
        assert_eq!(
            cart.add_to_cart(&sold_out),
            CartChange::Rejected { product_id: sold_out.id.clone(), reason: RejectReason::OutOfStock }
        );
        assert!(cart.line(&sold_out.id).is_none());
    }

    #[test]
    fn test_large_quantities_are_exact_without_stock_policy() {
        let mut cart = CartStore::default();
        let a = product("a", 100);
        cart.add_to_cart(&a);

        assert_eq!(
            cart.update_quantity(&a.id, 10_000),
            CartChange::Updated { product_id: a.id.clone(), quantity: 10_000 }
        );
        for _ in 0..10_000 {
            cart.add_to_cart(&a);
        }
        assert_eq!(cart.total_items(), 20_000);
        assert_eq!(cart.total_price(), usd(2_000_000));

        cart.update_quantity(&a.id, i64::MAX);
        assert_eq!(cart.line(&a.id).unwrap().quantity, i64::MAX);
        assert_eq!(cart.total_items(), i64::MAX);
    }

    #[test]
    fn test_capped_at_limit_is_not_a_mutation() {
        let mut cart = CartStore::new(CartConfig {
            currency: Currency::USD,
            stock_policy: StockPolicy::CapAtStock,
        });
        let a = product("a", 100).with_stock(3);
        cart.add_to_cart(&a);

        let clamped = cart.update_quantity(&a.id, 5);
        assert_eq!(
            clamped,
            CartChange::Capped { product_id: a.id.clone(), requested: 5, previous: 1, quantity: 3 }
        );
        assert!(clamped.is_mutation());

        let at_limit = cart.add_to_cart(&a);
        assert!(!at_limit.is_mutation());
        let again = cart.update_quantity(&a.id, 9);
        assert_eq!(
            again,
            CartChange::Capped { product_id: a.id.clone(), requested: 9, previous: 3, quantity: 3 }
        );
        assert!(!again.is_mutation());
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_rejects_other_currency_and_blank_id() {
        let mut cart = CartStore::default();
        let eur = Product::new("e", "Euro thing", Category::Desktop, Money::new(100, Currency::EUR));
        assert!(matches!(
            cart.add_to_cart(&eur),
            CartChange::Rejected { reason: RejectReason::CurrencyMismatch, .. }
        ));

        let blank = product(" ", 100);
        assert!(matches!(
            cart.add_to_cart(&blank),
            CartChange::Rejected { reason: RejectReason::InvalidProductId, .. }
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_summary() {
        let mut cart = CartStore::default();
        cart.add_to_cart(&product("a", 100));
        cart.add_to_cart(&product("b", 50));
        cart.update_quantity(&ProductId::new("b"), 4);

        let summary = cart.summary();
        assert_eq!(summary.total_items, 5);
        assert_eq!(summary.subtotal, usd(300));
        assert_eq!(summary.grand_total, usd(300));
        assert!(summary.has_free_shipping());
        assert_eq!(summary.lines[1].subtotal, usd(200));
    }

    #[test]
    fn test_notifier_receives_acknowledgments() {
        let notices: Rc<RefCell<Vec<CartNotice>>> = Rc::default();
        let sink = Rc::clone(&notices);
        let mut cart = CartStore::default()
            .with_notifier(move |n: &CartNotice| sink.borrow_mut().push(n.clone()));

        let a = product("a", 100);
        cart.add_to_cart(&a);
        cart.update_quantity(&ProductId::new("missing"), 2);
        cart.remove_from_cart(&a.id);
        cart.clear_cart();

        let notices = notices.borrow();
        let titles: Vec<&str> = notices.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["Added to cart", "Removed from cart"]);
        assert_eq!(notices[0].description, "Product a has been added to your cart.");
    }

    #[test]
    fn test_independent_stores() {
        let mut first = CartStore::default();
        let second = CartStore::default();
        first.add_to_cart(&product("a", 100));
        assert_eq!(first.total_items(), 1);
        assert_eq!(second.total_items(), 0);
    }

    #[test]
    fn test_is_mutation() {
        assert!(!CartChange::Unchanged.is_mutation());
        assert!(!CartChange::Cleared { lines: 0 }.is_mutation());
        assert!(CartChange::Removed { product_id: ProductId::new("a") }.is_mutation());
    }
}
