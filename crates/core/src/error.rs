//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is raised before any state is touched, so an `Err` always
/// leaves the stores exactly as they were before the call.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// An argument failed validation (negative price, non-positive sale quantity, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An entity with the same identifier already exists.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// The referenced entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A sale asked for more units than are on hand.
    #[error("insufficient stock for {product_id}: available {available}, requested {requested}")]
    InsufficientStock {
        product_id: String,
        available: i64,
        requested: i64,
    },

    /// Positional access outside `[0, size)`.
    #[error("index {index} out of range for store of size {size}")]
    OutOfRange { index: usize, size: usize },
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn duplicate_key(key: impl Into<String>) -> Self {
        Self::DuplicateKey(key.into())
    }

    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound(key.into())
    }

    pub fn insufficient_stock(product_id: impl Into<String>, available: i64, requested: i64) -> Self {
        Self::InsufficientStock {
            product_id: product_id.into(),
            available,
            requested,
        }
    }

    pub fn out_of_range(index: usize, size: usize) -> Self {
        Self::OutOfRange { index, size }
    }
}
