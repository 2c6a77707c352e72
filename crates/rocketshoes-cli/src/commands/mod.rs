//! CLI subcommands and the wiring they share

pub mod cart;
pub mod config;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use rocketshoes_api::{ApiClient, HttpProductApi};
use rocketshoes_core::config::Config;
use rocketshoes_core::store::{CartPorts, CartProvider, CartStore};
use rocketshoes_storage::SqliteKeyValueStore;
use tracing::debug;

use crate::notifier::ToastNotifier;
use crate::output::OutputFormat;

/// Settings resolved from the global flags
#[derive(Debug, Clone)]
pub struct CliContext {
    pub format: OutputFormat,
    pub quiet: bool,
    pub config_path: PathBuf,
}

impl CliContext {
    /// Loads the configuration file, falling back to defaults when it is missing
    pub fn load_config(&self) -> Result<Config> {
        if !self.config_path.exists() {
            return Ok(Config::default());
        }
        Config::load(&self.config_path).with_context(|| {
            format!(
                "Failed to load configuration from {}",
                self.config_path.display()
            )
        })
    }
}

/// A loaded cart store together with the database it persists to
pub struct CartSession {
    pub provider: CartProvider,
    storage: Arc<SqliteKeyValueStore>,
}

impl CartSession {
    /// Opens storage, connects the storefront API and loads the saved cart
    pub async fn open(config: &Config, format: OutputFormat) -> Result<Self> {
        let storage = SqliteKeyValueStore::open(&config.storage.database)
            .await
            .with_context(|| {
                format!(
                    "Failed to open cart database at {}",
                    config.storage.database.display()
                )
            })?;
        let storage = Arc::new(storage);

        let client = ApiClient::with_timeout(
            config.api.base_url.as_str(),
            Duration::from_secs(config.api.timeout_secs),
        )
        .context("Failed to build HTTP client")?;
        let api = Arc::new(HttpProductApi::new(client));

        let ports = CartPorts {
            catalog: api.clone(),
            stock: api,
            storage: storage.clone(),
            notifier: Arc::new(ToastNotifier::new(format)),
        };

        let store = CartStore::load(ports, config.storage.cart_key.as_str())
            .await
            .context("Failed to load saved cart")?;
        debug!(
            items = store.cart().len(),
            key = store.storage_key(),
            "Cart loaded"
        );

        Ok(Self {
            provider: CartProvider::new(store),
            storage,
        })
    }

    /// Closes the database
    pub async fn close(self) {
        self.storage.close().await;
    }
}
