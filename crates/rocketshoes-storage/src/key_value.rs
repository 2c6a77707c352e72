//! SQLite implementation of IKeyValueStore
//!
//! Stores string values in a single `key_value` table. Writes are upserts,
//! so a `set` replaces the previous value atomically.
//!
//! The store owns one connection. Its only writer is the cart store, which
//! already serializes mutations, so a wider pool buys nothing.

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use rocketshoes_core::ports::IKeyValueStore;

use crate::StorageError;

/// How long a write waits on another process holding the database lock
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLite-based implementation of the key-value storage port
pub struct SqliteKeyValueStore {
    pool: SqlitePool,
}

impl SqliteKeyValueStore {
    /// Opens (or creates) the database file at `path`
    ///
    /// Missing parent directories are created and the table is set up on
    /// first use.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::ConnectionFailed` if the file cannot be opened,
    /// or `StorageError::SchemaFailed` if the table cannot be created.
    pub async fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StorageError::ConnectionFailed(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| {
                StorageError::ConnectionFailed(format!("Failed to open {}: {}", path.display(), e))
            })?;

        let store = Self::from_pool(pool).await?;
        tracing::info!(path = %path.display(), "Key-value store opened");
        Ok(store)
    }

    /// Opens a throwaway in-memory store
    ///
    /// # Errors
    ///
    /// Same as [`open`](Self::open).
    pub async fn in_memory() -> Result<Self, StorageError> {
        // One connection: every in-memory connection is a separate database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| StorageError::ConnectionFailed(e.to_string()))?;

        Self::from_pool(pool).await
    }

    /// Closes the connection
    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn from_pool(pool: SqlitePool) -> Result<Self, StorageError> {
        sqlx::raw_sql(include_str!("schema.sql"))
            .execute(&pool)
            .await
            .map_err(|e| StorageError::SchemaFailed(e.to_string()))?;
        Ok(Self { pool })
    }

    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM key_value WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|(value,)| value))
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            INSERT INTO key_value (key, value, updated_at)
            VALUES (?, ?, strftime('%Y-%m-%dT%H:%M:%SZ', 'now'))
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl IKeyValueStore for SqliteKeyValueStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let value = self
            .read(key)
            .await
            .with_context(|| format!("Failed to read key '{key}'"))?;
        tracing::debug!(key, found = value.is_some(), "Read key");
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.write(key, value)
            .await
            .with_context(|| format!("Failed to write key '{key}'"))?;
        tracing::debug!(key, bytes = value.len(), "Wrote key");
        Ok(())
    }
}
