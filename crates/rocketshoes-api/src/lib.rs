//! RocketShoes API - Catalog and stock HTTP client
//!
//! Provides an async client for the storefront backend:
//! - `GET /products/{id}` - product records
//! - `GET /stock/{id}` - stock availability
//!
//! ## Modules
//!
//! - [`client`] - Typed HTTP client over `reqwest`
//! - [`provider`] - `ICatalogService` / `IStockService` port implementations

pub mod client;
pub mod provider;

pub use client::ApiClient;
pub use provider::HttpProductApi;

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the storefront backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// A server-side error occurred (5xx)
    #[error("Server error {status} for {path}")]
    ServerError {
        /// Status returned by the backend
        status: StatusCode,
        /// Request path
        path: String,
    },

    /// Any other non-success status
    #[error("Unexpected status {status} for {path}")]
    UnexpectedStatus {
        /// Status returned by the backend
        status: StatusCode,
        /// Request path
        path: String,
    },

    /// A network-level error occurred (connection refused, timeout, ...)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body could not be parsed
    #[error("Invalid response from {path}: {message}")]
    InvalidResponse {
        /// Request path
        path: String,
        /// Parse failure details
        message: String,
    },
}

impl ApiError {
    /// Classifies a non-success status code
    pub(crate) fn from_status(status: StatusCode, path: &str) -> Self {
        if status == StatusCode::NOT_FOUND {
            ApiError::NotFound(path.to_string())
        } else if status.is_server_error() {
            ApiError::ServerError {
                status,
                path: path.to_string(),
            }
        } else {
            ApiError::UnexpectedStatus {
                status,
                path: path.to_string(),
            }
        }
    }
}
