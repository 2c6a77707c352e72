//! RocketShoes Core - Cart domain logic and state store
//!
//! This crate contains the hexagonal architecture core with:
//! - **Domain entities** - `ProductId`, `Quantity`, `Product`, `CartItem`, `Cart`, `StockInfo`
//! - **Port definitions** - Traits for adapters: `ICatalogService`, `IStockService`,
//!   `IKeyValueStore`, `INotificationService`
//! - **Cart store** - `CartStore`, the single state container, plus the
//!   `CartProvider` / `CartHandle` accessor pair and change listeners
//! - **Configuration** - YAML configuration with defaults and validation
//!
//! # Architecture
//!
//! This crate follows the hexagonal (ports & adapters) architecture pattern.
//! The domain module contains pure business logic with no I/O.
//! Ports define trait interfaces that adapter crates implement.
//! The store orchestrates domain types through port interfaces.

pub mod config;
pub mod domain;
pub mod ports;
pub mod store;
