//! Storefront backend client
//!
//! Provides a typed HTTP client for the catalog and stock endpoints.
//! Handles base URL construction, status classification, and JSON
//! deserialization.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rocketshoes_api::client::ApiClient;
//! use rocketshoes_core::domain::ProductId;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = ApiClient::new("http://localhost:3333");
//! let stock = client.get_stock(ProductId::new(1)?).await?;
//! println!("{} units available", stock.amount);
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder};
use rocketshoes_core::domain::{Product, ProductId, StockInfo};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::ApiError;

/// Response from the /stock/{id} endpoint
#[derive(Debug, Deserialize)]
struct StockResponse {
    /// Available units; absent or null reads as zero
    #[serde(default)]
    amount: Option<u32>,
}

/// HTTP client for the storefront backend
pub struct ApiClient {
    /// The underlying HTTP client
    client: Client,
    /// Base URL for API requests, without a trailing slash
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the backend at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: normalize_base_url(base_url.into()),
        }
    }

    /// Creates a client whose requests time out after `timeout`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the HTTP client cannot be built.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: normalize_base_url(base_url.into()),
        })
    }

    /// Returns the base URL for API requests
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Creates a request builder for the given method and path
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - API path relative to base URL (e.g., "/products/1")
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Fetches the catalog record for `id`
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ApiError> {
        let path = format!("/products/{}", id);
        self.get_json(&path).await
    }

    /// Fetches current stock for `id`
    pub async fn get_stock(&self, id: ProductId) -> Result<StockInfo, ApiError> {
        let path = format!("/stock/{}", id);
        let stock: StockResponse = self.get_json(&path).await?;
        Ok(StockInfo::new(id, stock.amount.unwrap_or(0)))
    }

    /// Sends `GET path` and decodes a JSON body
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(path, "GET");

        let response = self.request(Method::GET, path).send().await?;

        let status = response.status();
        if !status.is_success() {
            debug!(path, %status, "Request failed");
            return Err(ApiError::from_status(status, path));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ApiError::InvalidResponse {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

fn normalize_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
