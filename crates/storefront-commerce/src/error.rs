//! Commerce error types.

use serde::Serialize;
use thiserror::Error;

use crate::ids::ProductId;

/// Errors that can occur in catalog and cart operations.
///
/// All of these are local and recoverable: the engine keeps its state
/// and the caller decides what to show.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CommerceError {
    /// Product not found in the current catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(u64, u32),

    /// Price is negative or not a finite number.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),
}
