//! End-to-end cart flow against a mocked storefront backend

use std::sync::Arc;

use rocketshoes_api::HttpProductApi;
use rocketshoes_core::domain::{Cart, ProductId};
use rocketshoes_core::store::{
    messages, CartOutcome, CartPorts, CartProvider, CartStore, UpdateProductAmount,
    DEFAULT_STORAGE_KEY,
};

use crate::common::{self, MemoryStorage, RecordingNotifier};

fn id(n: u64) -> ProductId {
    ProductId::new(n).unwrap()
}

struct Fixture {
    provider: CartProvider,
    storage: Arc<MemoryStorage>,
    notifier: Arc<RecordingNotifier>,
    _server: wiremock::MockServer,
}

async fn fixture() -> Fixture {
    let (server, client) = common::setup_api_mock().await;
    common::mount_product(&server, 1).await;
    common::mount_stock(&server, 1, 3).await;
    common::mount_product(&server, 2).await;
    common::mount_stock(&server, 2, 0).await;
    common::mount_status(&server, "/products/404", 404).await;
    common::mount_status(&server, "/stock/404", 404).await;

    let api = Arc::new(HttpProductApi::new(client));
    let storage = Arc::new(MemoryStorage::default());
    let notifier = Arc::new(RecordingNotifier::default());

    let ports = CartPorts {
        catalog: api.clone(),
        stock: api,
        storage: storage.clone(),
        notifier: notifier.clone(),
    };
    let store = CartStore::load_default(ports).await.unwrap();

    Fixture {
        provider: CartProvider::new(store),
        storage,
        notifier,
        _server: server,
    }
}

#[tokio::test]
async fn test_add_increment_and_persist() {
    let fx = fixture().await;
    let cart = fx.provider.use_cart();

    assert_eq!(cart.add_product(id(1)).await, CartOutcome::Committed);
    assert_eq!(cart.add_product(id(1)).await, CartOutcome::Committed);

    let current = cart.cart();
    assert_eq!(current.len(), 1);
    assert_eq!(current.items()[0].amount.get(), 2);
    assert_eq!(current.items()[0].price(), Some(139.9));

    let raw = fx.storage.raw(DEFAULT_STORAGE_KEY).expect("cart not persisted");
    let saved: Cart = serde_json::from_str(&raw).unwrap();
    assert_eq!(saved, current);
}

#[tokio::test]
async fn test_out_of_stock_paths() {
    let fx = fixture().await;
    let cart = fx.provider.use_cart();

    // Zero stock on a new product: silently ignored
    assert_eq!(cart.add_product(id(2)).await, CartOutcome::Ignored);
    assert!(fx.notifier.messages().is_empty());

    // Beyond stock on an existing product: rejected with a message
    cart.add_product(id(1)).await;
    let outcome = cart
        .update_product_amount(UpdateProductAmount {
            product_id: id(1),
            amount: 4,
        })
        .await;

    assert!(matches!(outcome, CartOutcome::Rejected(_)));
    assert_eq!(cart.cart().items()[0].amount.get(), 1);
    assert_eq!(fx.notifier.messages(), vec![messages::OUT_OF_STOCK]);
}

#[tokio::test]
async fn test_unknown_product_notifies() {
    let fx = fixture().await;
    let cart = fx.provider.use_cart();

    let outcome = cart.add_product(id(404)).await;

    assert!(matches!(outcome, CartOutcome::Rejected(_)));
    assert!(cart.cart().is_empty());
    assert!(fx.storage.raw(DEFAULT_STORAGE_KEY).is_none());
    assert_eq!(fx.notifier.messages(), vec![messages::ADD_PRODUCT_FAILED]);
}
