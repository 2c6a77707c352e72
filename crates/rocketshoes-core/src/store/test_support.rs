//! In-memory port implementations for store tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, bail};
use async_trait::async_trait;

use crate::domain::{Cart, Product, ProductId, StockInfo};
use crate::ports::{
    ICatalogService, IKeyValueStore, INotificationService, IStockService, Notification,
};

use super::cart_store::{CartPorts, CartStore};
use super::DEFAULT_STORAGE_KEY;

pub(crate) fn id(n: u64) -> ProductId {
    ProductId::new(n).unwrap()
}

/// Catalog backed by a map; requests can be aliased to another product
#[derive(Default)]
pub(crate) struct MockCatalog {
    products: Mutex<HashMap<u64, Product>>,
    aliases: Mutex<HashMap<u64, u64>>,
    calls: AtomicUsize,
}

impl MockCatalog {
    pub(crate) fn insert(&self, product: Product) {
        self.products
            .lock()
            .unwrap()
            .insert(product.id.get(), product);
    }

    pub(crate) fn alias(&self, requested: u64, served: u64) {
        self.aliases.lock().unwrap().insert(requested, served);
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ICatalogService for MockCatalog {
    async fn get_product(&self, id: ProductId) -> anyhow::Result<Product> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        // Let a concurrently polled operation run into the writer gate
        tokio::task::yield_now().await;

        let key = self
            .aliases
            .lock()
            .unwrap()
            .get(&id.get())
            .copied()
            .unwrap_or(id.get());
        self.products
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .ok_or_else(|| anyhow!("product {id} not found"))
    }
}

/// Stock levels backed by a map
#[derive(Default)]
pub(crate) struct MockStock {
    levels: Mutex<HashMap<u64, u32>>,
    failing: AtomicBool,
    calls: AtomicUsize,
}

impl MockStock {
    pub(crate) fn set(&self, id: u64, amount: u32) {
        self.levels.lock().unwrap().insert(id, amount);
    }

    pub(crate) fn fail(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IStockService for MockStock {
    async fn get_stock(&self, id: ProductId) -> anyhow::Result<StockInfo> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            bail!("stock service unavailable");
        }
        let amount = self
            .levels
            .lock()
            .unwrap()
            .get(&id.get())
            .copied()
            .ok_or_else(|| anyhow!("stock for {id} not found"))?;
        Ok(StockInfo::new(id, amount))
    }
}

/// Key-value storage held in a map, with switchable failures
#[derive(Default)]
pub(crate) struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
    failing_reads: AtomicBool,
    failing_writes: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryStorage {
    pub(crate) fn put(&self, key: &str, value: serde_json::Value) {
        self.put_raw(key, &value.to_string());
    }

    pub(crate) fn put_raw(&self, key: &str, raw: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), raw.to_string());
    }

    pub(crate) fn saved_cart(&self) -> Option<Cart> {
        self.values
            .lock()
            .unwrap()
            .get(DEFAULT_STORAGE_KEY)
            .map(|raw| serde_json::from_str(raw).unwrap())
    }

    pub(crate) fn fail_reads(&self, failing: bool) {
        self.failing_reads.store(failing, Ordering::SeqCst);
    }

    pub(crate) fn fail_writes(&self, failing: bool) {
        self.failing_writes.store(failing, Ordering::SeqCst);
    }

    pub(crate) fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IKeyValueStore for MemoryStorage {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        if self.failing_reads.load(Ordering::SeqCst) {
            bail!("storage unreadable");
        }
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        if self.failing_writes.load(Ordering::SeqCst) {
            bail!("storage full");
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.put_raw(key, value);
        Ok(())
    }
}

/// Notifier that records every message
#[derive(Default)]
pub(crate) struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
    failing: AtomicBool,
}

impl RecordingNotifier {
    pub(crate) fn messages(&self) -> Vec<String> {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }

    pub(crate) fn fail(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl INotificationService for RecordingNotifier {
    async fn notify(&self, notification: &Notification) -> anyhow::Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            bail!("toast container missing");
        }
        self.seen.lock().unwrap().push(notification.clone());
        Ok(())
    }
}

/// All mock ports wired together
#[derive(Default)]
pub(crate) struct Harness {
    pub(crate) catalog: Arc<MockCatalog>,
    pub(crate) stock: Arc<MockStock>,
    pub(crate) storage: Arc<MemoryStorage>,
    pub(crate) notifier: Arc<RecordingNotifier>,
}

impl Harness {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Registers catalog product `n` with `stock` units available
    pub(crate) fn with_product(self, n: u64, stock: u32) -> Self {
        self.catalog.insert(
            Product::new(id(n))
                .with_attribute("title", format!("Tênis {n}"))
                .with_attribute("price", 100.0 + n as f64)
                .with_attribute("image", format!("https://cdn.example.com/tenis{n}.jpg")),
        );
        self.stock.set(n, stock);
        self
    }

    pub(crate) fn ports(&self) -> CartPorts {
        CartPorts {
            catalog: self.catalog.clone(),
            stock: self.stock.clone(),
            storage: self.storage.clone(),
            notifier: self.notifier.clone(),
        }
    }

    pub(crate) async fn store(&self) -> CartStore {
        CartStore::load_default(self.ports()).await.unwrap()
    }
}
