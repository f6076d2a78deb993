//! User-visible acknowledgments of cart changes.

use crate::cart::CartChange;

/// A transient message for the shopper ("Added to cart").
#[derive(Debug, Clone, PartialEq)]
pub struct CartNotice {
    pub title: String,
    pub description: String,
    pub change: CartChange,
}

/// Receives a notice after every cart change that did something.
pub trait CartNotifier {
    fn notify(&self, notice: &CartNotice);
}

/// Discards all notices.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl CartNotifier for NoopNotifier {
    fn notify(&self, _notice: &CartNotice) {}
}

impl<F> CartNotifier for F
where
    F: Fn(&CartNotice),
{
    fn notify(&self, notice: &CartNotice) {
        self(notice)
    }
}
