//! HttpProductApi - catalog and stock port implementations over HTTP
//!
//! Wraps the [`ApiClient`] to fulfil the [`ICatalogService`] and
//! [`IStockService`] port contracts. One backend serves both endpoints, so
//! one adapter implements both traits; share it behind an `Arc`.

use std::sync::Arc;

use anyhow::{Context, Result};
use rocketshoes_core::domain::{Product, ProductId, StockInfo};
use rocketshoes_core::ports::{ICatalogService, IStockService};
use tracing::debug;

use crate::client::ApiClient;

/// Catalog and stock adapter backed by the storefront HTTP API
#[derive(Clone)]
pub struct HttpProductApi {
    client: Arc<ApiClient>,
}

impl HttpProductApi {
    /// Creates an adapter around `client`
    pub fn new(client: ApiClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Returns the underlying client
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

#[async_trait::async_trait]
impl ICatalogService for HttpProductApi {
    async fn get_product(&self, id: ProductId) -> Result<Product> {
        let product = self
            .client
            .get_product(id)
            .await
            .with_context(|| format!("Failed to fetch product {id}"))?;
        debug!(product_id = %id, fields = product.attributes.len(), "Fetched product");
        Ok(product)
    }
}

#[async_trait::async_trait]
impl IStockService for HttpProductApi {
    async fn get_stock(&self, id: ProductId) -> Result<StockInfo> {
        let stock = self
            .client
            .get_stock(id)
            .await
            .with_context(|| format!("Failed to fetch stock for product {id}"))?;
        debug!(product_id = %id, amount = stock.amount, "Fetched stock");
        Ok(stock)
    }
}
