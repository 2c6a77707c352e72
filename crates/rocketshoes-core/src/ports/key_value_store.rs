//! Durable key-value storage port (driven/secondary port)
//!
//! Models a client-local persistence API in the style of browser
//! `localStorage`: string keys, string values, survives restarts.
//! The cart store keeps one JSON document under a single fixed key.

/// Port trait for durable string key-value storage
///
/// ## Implementation Notes
///
/// - `set` must be durable when it returns: the store commits in-memory
///   state only after a successful write.
/// - `get` on an unknown key returns `Ok(None)`, not an error.
#[async_trait::async_trait]
pub trait IKeyValueStore: Send + Sync {
    /// Reads the value stored under `key`
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}
