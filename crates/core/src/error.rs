//! Inventory error model.

use thiserror::Error;

/// Result type used across the inventory layer.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// Covers deterministic failures of the in-memory store and its input
/// boundary. File and parse failures belong to the persistence layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A boundary value failed validation (e.g. empty name, non-numeric quantity).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The requested item has no entry in the inventory.
    #[error("item not found: {item}")]
    NotFound { item: String },

    /// Applying a quantity change would overflow the stored count.
    #[error("quantity overflow for item: {item}")]
    Overflow { item: String },
}

impl InventoryError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(item: impl Into<String>) -> Self {
        Self::NotFound { item: item.into() }
    }

    pub fn overflow(item: impl Into<String>) -> Self {
        Self::Overflow { item: item.into() }
    }

    /// True for the "missing entity" kind, which callers commonly tolerate.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
