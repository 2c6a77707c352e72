//! Domain entities and business logic
//!
//! This module contains the core domain types for the cart:
//! - Newtypes for product identifiers and quantities
//! - Catalog products and the items held in a cart
//! - The ordered cart collection and its derived summary
//! - Stock availability records
//! - Domain-specific error types

pub mod cart;
pub mod errors;
pub mod newtypes;
pub mod product;
pub mod stock;

// Re-export commonly used types
pub use cart::{Cart, CartSummary};
pub use errors::DomainError;
pub use newtypes::{ProductId, Quantity};
pub use product::{CartItem, Product};
pub use stock::StockInfo;
