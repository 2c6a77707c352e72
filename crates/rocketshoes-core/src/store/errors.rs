//! Cart operation errors and outcomes

use thiserror::Error;

use crate::domain::{DomainError, ProductId};

/// Reasons a cart operation was rejected
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    /// More units were requested than the stock service reports
    #[error("Requested {requested} units of product {product_id}, only {available} in stock")]
    OutOfStock {
        /// Product the request was for
        product_id: ProductId,
        /// Units requested
        requested: i64,
        /// Units available
        available: u32,
    },

    /// The product is not in the cart
    #[error("Product {0} is not in the cart")]
    NotInCart(ProductId),

    /// A catalog or stock call failed
    #[error("Service call failed: {0}")]
    Service(String),

    /// Reading or writing the durable cart snapshot failed
    #[error("Persistence failed: {0}")]
    Persistence(String),

    /// A value violated a domain rule
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl CartError {
    /// Wraps a port error from the catalog or stock service
    pub(crate) fn service(err: anyhow::Error) -> Self {
        CartError::Service(format!("{err:#}"))
    }

    /// Wraps a port error from durable storage
    pub(crate) fn persistence(err: impl std::fmt::Display) -> Self {
        CartError::Persistence(err.to_string())
    }
}

/// What a mutating cart operation did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartOutcome {
    /// A new cart was written to storage and published
    Committed,
    /// Nothing to do; the cart is unchanged and nobody was notified
    Ignored,
    /// The operation failed; the cart is unchanged and the user was notified
    Rejected(CartError),
}

impl CartOutcome {
    /// Returns true if the cart changed
    pub fn is_committed(&self) -> bool {
        matches!(self, CartOutcome::Committed)
    }
}
