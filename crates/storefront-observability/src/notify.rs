//! Cart acknowledgments routed into the session log.

use storefront_commerce::cart::{CartChange, CartNotice, CartNotifier};

use crate::{LogLevel, SessionLogger};

/// Logs every cart notice, then hands it to an optional inner notifier.
pub struct NotifyingLogger {
    logger: SessionLogger,
    inner: Option<Box<dyn CartNotifier>>,
}

impl NotifyingLogger {
    pub fn new(logger: SessionLogger) -> Self {
        Self {
            logger,
            inner: None,
        }
    }

    /// Also deliver notices to `notifier` (a terminal toast, for example).
    pub fn forward_to(mut self, notifier: impl CartNotifier + 'static) -> Self {
        self.inner = Some(Box::new(notifier));
        self
    }
}

impl CartNotifier for NotifyingLogger {
    fn notify(&self, notice: &CartNotice) {
        let level = match notice.change {
            CartChange::Rejected { .. } | CartChange::Capped { .. } => LogLevel::Warn,
            _ => LogLevel::Info,
        };
        self.logger
            .builder(level, notice.title.clone())
            .field("description", notice.description.clone())
            .fields_from("change", &notice.change)
            .emit();

        if let Some(inner) = &self.inner {
            inner.notify(notice);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LogFormat, LogSink};
    use std::cell::Cell;
    use std::rc::Rc;
    use storefront_commerce::prelude::*;

    #[test]
    fn test_cart_changes_are_logged() {
        let (sink, lines) = LogSink::buffer();
        let logger = SessionLogger::new(SessionId::new("s-9"))
            .with_format(LogFormat::Json)
            .with_sink(sink);
        let forwarded = Rc::new(Cell::new(0));
        let counter = Rc::clone(&forwarded);
        let notifier = NotifyingLogger::new(logger)
            .forward_to(move |_: &CartNotice| counter.set(counter.get() + 1));

        let mut cart = CartStore::default().with_notifier(notifier);
        let product = Product::new("1", "Office Elite", Category::Work, Money::new(79999, Currency::USD));
        cart.add_to_cart(&product);
        cart.update_quantity(&product.id, 3);

        let lines = lines.lock().unwrap();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(first["message"], "Added to cart");
        assert_eq!(first["kind"], "added");
        assert_eq!(first["product_id"], "1");
        assert_eq!(first["session_id"], "s-9");

        let second: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(second["kind"], "updated");
        assert_eq!(second["quantity"], 3);
        assert_eq!(forwarded.get(), 2);
    }
}
