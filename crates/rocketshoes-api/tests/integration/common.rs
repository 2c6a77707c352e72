//! Shared test helpers for storefront API integration tests
//!
//! Provides wiremock-based mock server setup for the catalog and stock
//! endpoints, plus in-memory storage and notifier ports for store tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rocketshoes_api::client::ApiClient;
use rocketshoes_core::ports::{IKeyValueStore, INotificationService, Notification};

/// Starts a mock server and returns it with a client pointing at it
pub async fn setup_api_mock() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(server.uri());
    (server, client)
}

/// Mounts `GET /products/{id}` returning a sneaker record
pub async fn mount_product(server: &MockServer, id: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/products/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": id,
            "title": format!("Tênis VR Caminhada Confortável {id}"),
            "price": 139.9,
            "image": format!("https://rocketseat-cdn.s3-sa-east-1.amazonaws.com/modulo-redux/tenis{id}.jpg")
        })))
        .mount(server)
        .await;
}

/// Mounts `GET /stock/{id}` returning `amount` units
pub async fn mount_stock(server: &MockServer, id: u64, amount: u32) {
    Mock::given(method("GET"))
        .and(path(format!("/stock/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": id,
            "amount": amount
        })))
        .mount(server)
        .await;
}

/// Mounts `GET {route}` answering with a bare status code
pub async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Key-value storage held in memory
#[derive(Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl IKeyValueStore for MemoryStorage {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.raw(key))
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Notifier that records messages
#[derive(Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl INotificationService for RecordingNotifier {
    async fn notify(&self, notification: &Notification) -> anyhow::Result<()> {
        self.seen
            .lock()
            .unwrap()
            .push(notification.message.clone());
        Ok(())
    }
}
