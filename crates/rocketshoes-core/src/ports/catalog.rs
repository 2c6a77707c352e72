//! Catalog and stock service ports (driven/secondary ports)
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result` because transport errors are adapter-specific
//!   (HTTP status codes, timeouts, malformed bodies) and the store treats
//!   every failure the same way: caught at the operation boundary.
//! - Both services are usually served by one HTTP backend, so a single
//!   adapter type may implement both traits.

use crate::domain::{Product, ProductId, StockInfo};

/// Port trait for reading product records from the catalog
#[async_trait::async_trait]
pub trait ICatalogService: Send + Sync {
    /// Fetches the catalog record for `id`
    ///
    /// Fails if the product does not exist or the service is unreachable.
    async fn get_product(&self, id: ProductId) -> anyhow::Result<Product>;
}

/// Port trait for reading current stock availability
#[async_trait::async_trait]
pub trait IStockService: Send + Sync {
    /// Fetches how many units of `id` are purchasable right now
    async fn get_stock(&self, id: ProductId) -> anyhow::Result<StockInfo>;
}
