//! Stock availability

use serde::{Deserialize, Serialize};

use super::newtypes::{ProductId, Quantity};

/// Units of a product purchasable right now, as reported by the stock service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockInfo {
    /// The product this record describes
    pub product_id: ProductId,
    /// Available units; zero means out of stock
    pub amount: u32,
}

impl StockInfo {
    /// Creates a stock record
    pub fn new(product_id: ProductId, amount: u32) -> Self {
        Self { product_id, amount }
    }

    /// Returns true if at least one unit is available
    pub fn is_available(&self) -> bool {
        self.amount > 0
    }

    /// Returns true if `requested` units can be purchased
    pub fn covers(&self, requested: Quantity) -> bool {
        requested.get() <= self.amount
    }
}
