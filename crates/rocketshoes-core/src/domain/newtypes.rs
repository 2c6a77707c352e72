//! Domain newtypes with validation
//!
//! This module provides strongly-typed wrappers for the integer values the
//! cart is keyed and counted by. Each newtype ensures data validity at
//! construction time, including when deserialized from a stored snapshot.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::DomainError;

// ============================================================================
// ProductId
// ============================================================================

/// Identifier of a catalog product, and the unique key of a cart item
///
/// Always a positive integer; zero is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct ProductId(u64);

impl ProductId {
    /// Create a ProductId, rejecting zero
    pub fn new(value: u64) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::InvalidProductId(
                "product id must be a positive integer".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// Get the inner integer value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u64>()
            .map_err(|e| DomainError::InvalidProductId(format!("{s}: {e}")))?;
        Self::new(value)
    }
}

impl TryFrom<u64> for ProductId {
    type Error = DomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductId> for u64 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

// ============================================================================
// Quantity
// ============================================================================

/// Number of units of a product held in the cart
///
/// Always at least 1: an item whose quantity would drop to zero is removed
/// from the cart instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// A single unit, the quantity of a freshly added item
    pub const ONE: Quantity = Quantity(1);

    /// Create a Quantity, rejecting zero
    pub fn new(value: u32) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::InvalidQuantity(
                "quantity must be at least 1".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// Get the inner integer value
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// The next quantity up, or `None` on overflow
    #[must_use]
    pub fn incremented(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for Quantity {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let value = u32::try_from(value)
            .map_err(|_| DomainError::InvalidQuantity(format!("{value} is out of range")))?;
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}
