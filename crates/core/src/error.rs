//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business/domain failures (validation,
/// uniqueness, stock sufficiency). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested resource was not found (domain-level).
    #[error("not found")]
    NotFound,

    /// Another part already carries this barcode.
    #[error("barcode '{0}' is already assigned to another part")]
    DuplicateBarcode(String),

    /// An outgoing batch asked for more units than are on the shelf.
    #[error("insufficient stock for '{name}': requested {requested}, available {available}")]
    InsufficientStock {
        name: String,
        available: u32,
        requested: u32,
    },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn duplicate_barcode(barcode: impl Into<String>) -> Self {
        Self::DuplicateBarcode(barcode.into())
    }

    pub fn insufficient_stock(name: impl Into<String>, available: u32, requested: u32) -> Self {
        Self::InsufficientStock {
            name: name.into(),
            available,
            requested,
        }
    }
}
