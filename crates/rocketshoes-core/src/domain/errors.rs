//! Domain error types
//!
//! This module defines error types raised while constructing validated
//! domain values.

use thiserror::Error;

/// Errors that can occur in domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Product identifiers must be positive integers
    #[error("Invalid product id: {0}")]
    InvalidProductId(String),

    /// Cart quantities must be positive integers
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
}
