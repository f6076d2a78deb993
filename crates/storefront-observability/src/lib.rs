//! Session logging for the storefront.
//!
//! This crate provides:
//! - `SessionLogger` - Structured logging with shopping session context
//! - `NotifyingLogger` - A cart notifier that logs every acknowledgment

mod logging;
mod notify;

pub use logging::*;
pub use notify::*;

// Re-export SessionId from storefront-commerce for convenience
pub use storefront_commerce::SessionId;
