//! Shopping cart module.
//!
//! A [`CartStore`] holds the lines of one session's cart, derives its totals
//! and reports every change as a [`CartChange`].

mod line;
mod notify;
mod pricing;
mod store;

pub use line::CartLine;
pub use notify::{CartNotice, CartNotifier, NoopNotifier};
pub use pricing::{CartSummary, LineSummary};
pub use store::{CartChange, CartConfig, CartStore, RejectReason, StockPolicy};
