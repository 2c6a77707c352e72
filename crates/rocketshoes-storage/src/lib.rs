//! RocketShoes Storage - Durable client-local key-value storage
//!
//! SQLite-based storage for values that must survive restarts, such as
//! the saved cart.
//!
//! ## Architecture
//!
//! This crate implements the `IKeyValueStore` port from `rocketshoes-core`
//! using SQLite as the storage backend. It is a driven (secondary) adapter
//! in the hexagonal architecture.
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//! use rocketshoes_storage::SqliteKeyValueStore;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let store = SqliteKeyValueStore::open(Path::new("/home/user/.local/share/rocketshoes/storage.db")).await?;
//! // Hand `store` to the cart store as its IKeyValueStore
//! # Ok(())
//! # }
//! ```

pub mod key_value;

pub use key_value::SqliteKeyValueStore;

/// Errors that can occur during storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The database file could not be opened
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// A database query failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// The `key_value` table could not be created
    #[error("Schema setup failed: {0}")]
    SchemaFailed(String),
}

impl From<sqlx::Error> for StorageError {
    fn from(e: sqlx::Error) -> Self {
        StorageError::QueryFailed(e.to_string())
    }
}
