//! Cart state container
//!
//! [`CartStore`] holds the cart in memory, writes every change through to
//! durable storage, and publishes committed carts to listeners.
//!
//! ## Design Notes
//!
//! - Mutations are serialized by a single-writer gate held across the whole
//!   read-modify-write, service calls included. Two overlapping
//!   `add_product` calls for the same id therefore produce one item with
//!   two units rather than two items.
//! - Reads (`cart`, `summary`) never wait on the writer gate.
//! - A candidate cart is written to storage first; only after the write
//!   succeeds is it swapped into memory and published. A failed write
//!   leaves both the in-memory cart and the listeners untouched.
//! - Failures never escape as errors: they are reported to the user through
//!   the notification port and returned as [`CartOutcome::Rejected`].

use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::domain::{Cart, CartItem, CartSummary, DomainError, ProductId, Quantity};
use crate::ports::{
    ICatalogService, IKeyValueStore, INotificationService, IStockService, Notification,
};

use super::errors::{CartError, CartOutcome};
use super::listeners::{ListenerRegistry, SubscriptionId};
use super::messages;
use super::DEFAULT_STORAGE_KEY;

/// Request to set the quantity of a product already in the cart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductAmount {
    /// Product whose quantity changes
    pub product_id: ProductId,
    /// Requested quantity; values below 1 are ignored
    pub amount: i64,
}

/// The adapters a [`CartStore`] talks to
#[derive(Clone)]
pub struct CartPorts {
    /// Product details
    pub catalog: Arc<dyn ICatalogService>,
    /// Stock availability
    pub stock: Arc<dyn IStockService>,
    /// Durable snapshot storage
    pub storage: Arc<dyn IKeyValueStore>,
    /// User-facing messages
    pub notifier: Arc<dyn INotificationService>,
}

/// The cart state container
pub struct CartStore {
    catalog: Arc<dyn ICatalogService>,
    stock: Arc<dyn IStockService>,
    storage: Arc<dyn IKeyValueStore>,
    notifier: Arc<dyn INotificationService>,
    storage_key: String,
    state: RwLock<Cart>,
    writer: Mutex<()>,
    listeners: ListenerRegistry,
}

impl CartStore {
    /// Creates a store, restoring the cart saved under `storage_key`
    ///
    /// A missing snapshot yields an empty cart. A snapshot that cannot be
    /// decoded is logged and ignored; it is overwritten by the next commit.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Persistence`] if storage cannot be read.
    pub async fn load(ports: CartPorts, storage_key: impl Into<String>) -> Result<Self, CartError> {
        let storage_key = storage_key.into();

        let raw = ports
            .storage
            .get(&storage_key)
            .await
            .map_err(|e| CartError::persistence(format!("{e:#}")))?;

        let cart = match raw {
            Some(raw) => decode_snapshot(&storage_key, &raw),
            None => {
                debug!(key = %storage_key, "No saved cart, starting empty");
                Cart::new()
            }
        };

        info!(key = %storage_key, items = cart.len(), "Cart store initialized");

        Ok(Self {
            catalog: ports.catalog,
            stock: ports.stock,
            storage: ports.storage,
            notifier: ports.notifier,
            storage_key,
            state: RwLock::new(cart),
            writer: Mutex::new(()),
            listeners: ListenerRegistry::new(),
        })
    }

    /// Creates a store using [`DEFAULT_STORAGE_KEY`]
    pub async fn load_default(ports: CartPorts) -> Result<Self, CartError> {
        Self::load(ports, DEFAULT_STORAGE_KEY).await
    }

    /// The key the snapshot is stored under
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    // --- Reads ---

    /// Snapshot of the current cart
    pub fn cart(&self) -> Cart {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Totals of the current cart
    pub fn summary(&self) -> CartSummary {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .summary()
    }

    /// Units of `id` in the cart, if present
    pub fn amount_of(&self, id: ProductId) -> Option<Quantity> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .map(|item| item.amount)
    }

    /// Returns true if `id` is in the cart
    pub fn contains(&self, id: ProductId) -> bool {
        self.amount_of(id).is_some()
    }

    // --- Listeners ---

    /// Registers a listener called with every committed cart
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&Cart) + Send + Sync + 'static,
    {
        self.listeners.subscribe(listener)
    }

    /// Removes a listener; returns false if it was not registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    // --- Mutations ---

    /// Adds one unit of `product_id`
    ///
    /// A product already in the cart is incremented through the same path
    /// as [`update_product_amount`](Self::update_product_amount), including
    /// its stock check and messages. A new product is fetched from the
    /// catalog and stock services concurrently; when the stock is zero the
    /// call does nothing.
    pub async fn add_product(&self, product_id: ProductId) -> CartOutcome {
        let _writer = self.writer.lock().await;

        if let Some(existing) = self.amount_of(product_id) {
            debug!(product_id = %product_id, amount = existing.get(), "Product already in cart, incrementing");
            return match existing.incremented() {
                Some(next) => self.set_amount(product_id, i64::from(next.get())).await,
                None => {
                    let err = DomainError::InvalidQuantity(format!("{existing} cannot be incremented"));
                    self.reject(err.into(), messages::ADD_PRODUCT_FAILED).await
                }
            };
        }

        match self.append(product_id).await {
            Ok(outcome) => outcome,
            Err(err) => self.reject(err, messages::ADD_PRODUCT_FAILED).await,
        }
    }

    /// Removes `product_id` from the cart
    pub async fn remove_product(&self, product_id: ProductId) -> CartOutcome {
        let _writer = self.writer.lock().await;

        let result = match self.cart().without(product_id) {
            Some(next) => self.commit(next).await.map(|()| CartOutcome::Committed),
            None => Err(CartError::NotInCart(product_id)),
        };

        match result {
            Ok(outcome) => {
                info!(product_id = %product_id, "Product removed from cart");
                outcome
            }
            Err(err) => self.reject(err, messages::REMOVE_PRODUCT_FAILED).await,
        }
    }

    /// Sets the quantity of a product already in the cart
    ///
    /// Amounts below 1 are ignored rather than treated as a removal.
    pub async fn update_product_amount(&self, request: UpdateProductAmount) -> CartOutcome {
        let _writer = self.writer.lock().await;
        self.set_amount(request.product_id, request.amount).await
    }

    // --- Internals (caller holds the writer gate) ---

    async fn set_amount(&self, product_id: ProductId, amount: i64) -> CartOutcome {
        if amount < 1 {
            debug!(product_id = %product_id, amount, "Ignoring non-positive amount");
            return CartOutcome::Ignored;
        }

        match self.try_set_amount(product_id, amount).await {
            Ok(outcome) => outcome,
            Err(err @ CartError::OutOfStock { .. }) => self.reject(err, messages::OUT_OF_STOCK).await,
            Err(err) => self.reject(err, messages::UPDATE_AMOUNT_FAILED).await,
        }
    }

    async fn try_set_amount(
        &self,
        product_id: ProductId,
        amount: i64,
    ) -> Result<CartOutcome, CartError> {
        debug!(product_id = %product_id, "Fetching stock");
        let stock = self
            .stock
            .get_stock(product_id)
            .await
            .map_err(CartError::service)?;

        // amount >= 1 here, so a failed conversion means more than u32::MAX units
        let quantity = Quantity::try_from(amount)
            .ok()
            .filter(|quantity| stock.covers(*quantity))
            .ok_or(CartError::OutOfStock {
                product_id,
                requested: amount,
                available: stock.amount,
            })?;
        let Some(next) = self.cart().with_amount(product_id, quantity) else {
            debug!(product_id = %product_id, "Product not in cart, nothing to update");
            return Ok(CartOutcome::Ignored);
        };

        self.commit(next).await?;
        info!(product_id = %product_id, amount, "Product amount updated");
        Ok(CartOutcome::Committed)
    }

    async fn append(&self, product_id: ProductId) -> Result<CartOutcome, CartError> {
        debug!(product_id = %product_id, "Fetching product and stock");
        let (product, stock) = tokio::try_join!(
            self.catalog.get_product(product_id),
            self.stock.get_stock(product_id),
        )
        .map_err(CartError::service)?;

        if product.id != product_id {
            return Err(CartError::Service(format!(
                "catalog returned product {} for id {}",
                product.id, product_id
            )));
        }

        if !stock.is_available() {
            debug!(product_id = %product_id, "Product out of stock, not adding");
            return Ok(CartOutcome::Ignored);
        }

        let Some(next) = self.cart().with_item(CartItem::from_product(product)) else {
            return Ok(CartOutcome::Ignored);
        };

        self.commit(next).await?;
        info!(product_id = %product_id, "Product added to cart");
        Ok(CartOutcome::Committed)
    }

    /// Writes `next` to storage, then swaps it in and publishes it
    async fn commit(&self, next: Cart) -> Result<(), CartError> {
        let raw = serde_json::to_string(&next).map_err(CartError::persistence)?;

        self.storage
            .set(&self.storage_key, &raw)
            .await
            .map_err(|e| CartError::persistence(format!("{e:#}")))?;

        *self.state.write().unwrap_or_else(PoisonError::into_inner) = next.clone();
        debug!(items = next.len(), "Cart committed");

        self.listeners.emit(&next);
        Ok(())
    }

    async fn reject(&self, err: CartError, message: &str) -> CartOutcome {
        match &err {
            CartError::Persistence(_) => error!(error = %err, "Cart operation failed"),
            _ => warn!(error = %err, "Cart operation rejected"),
        }

        if let Err(e) = self.notifier.notify(&Notification::error(message)).await {
            warn!(error = %e, "Failed to deliver notification");
        }

        CartOutcome::Rejected(err)
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("storage_key", &self.storage_key)
            .field("cart", &self.cart())
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}

/// Decodes a stored snapshot, falling back to an empty cart
fn decode_snapshot(key: &str, raw: &str) -> Cart {
    match serde_json::from_str::<Cart>(raw) {
        Ok(cart) => cart,
        Err(e) => {
            warn!(key, error = %e, "Saved cart is unreadable, starting empty");
            Cart::new()
        }
    }
}
