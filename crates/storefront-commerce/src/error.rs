//! Commerce error types.

use thiserror::Error;

/// Errors raised by the catalog, comments and record conversion.
///
/// Cart operations never fail and do not use this type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A product with this id already exists.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// Comment not found.
    #[error("Comment not found: {0}")]
    CommentNotFound(String),

    /// Price is negative, NaN or out of range.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Currency differs from the catalog currency.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// A specification key required by the category is missing.
    #[error("Category {category} requires specification '{key}'")]
    MissingSpecification { category: String, key: String },

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}
