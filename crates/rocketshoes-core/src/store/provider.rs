//! Provider and accessor for the cart store
//!
//! The host application builds one [`CartStore`], mounts it in a
//! [`CartProvider`], and hands the provider to the parts of the
//! application that need the cart. Those consumers call
//! [`CartProvider::use_cart`] to obtain a [`CartHandle`], which exposes the
//! cart and its three mutations. All handles from one provider share the
//! same store. Nesting providers is unsupported.

use std::sync::Arc;

use crate::domain::{Cart, CartSummary, ProductId};

use super::cart_store::{CartStore, UpdateProductAmount};
use super::errors::CartOutcome;
use super::listeners::SubscriptionId;

/// Owns the application's cart store and hands out accessors
#[derive(Debug, Clone)]
pub struct CartProvider {
    store: Arc<CartStore>,
}

impl CartProvider {
    /// Mounts `store` as the application's cart
    pub fn new(store: CartStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Mounts an already shared store
    pub fn from_shared(store: Arc<CartStore>) -> Self {
        Self { store }
    }

    /// Returns an accessor for the mounted store
    pub fn use_cart(&self) -> CartHandle {
        CartHandle {
            store: Arc::clone(&self.store),
        }
    }
}

/// Accessor for the cart: the current cart plus its mutations
///
/// Cheap to clone; every clone talks to the same store.
#[derive(Debug, Clone)]
pub struct CartHandle {
    store: Arc<CartStore>,
}

impl CartHandle {
    /// Snapshot of the current cart
    pub fn cart(&self) -> Cart {
        self.store.cart()
    }

    /// Totals of the current cart
    pub fn summary(&self) -> CartSummary {
        self.store.summary()
    }

    /// See [`CartStore::add_product`]
    pub async fn add_product(&self, product_id: ProductId) -> CartOutcome {
        self.store.add_product(product_id).await
    }

    /// See [`CartStore::remove_product`]
    pub async fn remove_product(&self, product_id: ProductId) -> CartOutcome {
        self.store.remove_product(product_id).await
    }

    /// See [`CartStore::update_product_amount`]
    pub async fn update_product_amount(&self, request: UpdateProductAmount) -> CartOutcome {
        self.store.update_product_amount(request).await
    }

    /// Registers a listener for committed carts
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&Cart) + Send + Sync + 'static,
    {
        self.store.subscribe(listener)
    }

    /// Removes a listener
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// Returns true if both handles reach the same store
    pub fn same_store(&self, other: &CartHandle) -> bool {
        Arc::ptr_eq(&self.store, &other.store)
    }
}
