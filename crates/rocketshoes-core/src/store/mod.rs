//! The cart store and its access pattern
//!
//! - [`CartStore`] - the state container: in-memory cart, write-through to
//!   durable storage, change listeners
//! - [`CartProvider`] / [`CartHandle`] - provider and accessor pair handing
//!   the store to consumers
//! - [`ListenerRegistry`] - synchronous publish/subscribe of committed carts
//! - [`messages`] - user-facing notification texts

pub mod cart_store;
pub mod errors;
pub mod listeners;
pub mod messages;
pub mod provider;

#[cfg(test)]
pub(crate) mod test_support;

pub use cart_store::{CartPorts, CartStore, UpdateProductAmount};
pub use errors::{CartError, CartOutcome};
pub use listeners::{ListenerRegistry, SubscriptionId};
pub use provider::{CartHandle, CartProvider};

/// Storage key the cart snapshot lives under unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "@RocketShoes:cart";
