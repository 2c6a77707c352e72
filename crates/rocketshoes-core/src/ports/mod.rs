//! Port definitions (hexagonal architecture interfaces)
//!
//! This module defines the port traits that form the boundaries of the
//! hexagonal architecture. Ports are interfaces that the cart store
//! depends on, but whose implementations live in adapter crates.
//!
//! ## Ports Overview
//!
//! - [`ICatalogService`] - Product details (`GET /products/{id}`)
//! - [`IStockService`] - Stock availability (`GET /stock/{id}`)
//! - [`IKeyValueStore`] - Durable client-local key-value storage
//! - [`INotificationService`] - Transient user-facing messages (toasts)

pub mod catalog;
pub mod key_value_store;
pub mod notification;

pub use catalog::{ICatalogService, IStockService};
pub use key_value_store::IKeyValueStore;
pub use notification::{INotificationService, Notification, NotificationLevel};
