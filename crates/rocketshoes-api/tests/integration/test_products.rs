//! Integration tests for the catalog endpoint

use rocketshoes_core::domain::ProductId;
use rocketshoes_core::ports::ICatalogService;
use rocketshoes_api::{ApiError, HttpProductApi};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common;

fn id(n: u64) -> ProductId {
    ProductId::new(n).unwrap()
}

#[tokio::test]
async fn test_get_product_keeps_catalog_fields() {
    let (server, client) = common::setup_api_mock().await;
    common::mount_product(&server, 1).await;

    let product = client.get_product(id(1)).await.expect("get_product failed");

    assert_eq!(product.id, id(1));
    assert_eq!(
        product.attributes["title"],
        serde_json::json!("Tênis VR Caminhada Confortável 1")
    );
    assert_eq!(product.attributes["price"], serde_json::json!(139.9));
    assert!(product.attributes.contains_key("image"));
}

#[tokio::test]
async fn test_get_product_not_found() {
    let (server, client) = common::setup_api_mock().await;
    common::mount_status(&server, "/products/42", 404).await;

    let err = client.get_product(id(42)).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(ref p) if p == "/products/42"));
}

#[tokio::test]
async fn test_get_product_invalid_body() {
    let (server, client) = common::setup_api_mock().await;
    Mock::given(method("GET"))
        .and(path("/products/3"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client.get_product(id(3)).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidResponse { .. }));
}

#[tokio::test]
async fn test_port_adapter_adds_context() {
    let (server, client) = common::setup_api_mock().await;
    common::mount_status(&server, "/products/7", 500).await;
    let api = HttpProductApi::new(client);

    let err = api.get_product(id(7)).await.unwrap_err();
    assert!(err.to_string().contains("Failed to fetch product 7"));
    assert!(matches!(
        err.downcast_ref::<ApiError>(),
        Some(ApiError::ServerError { .. })
    ));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let client = rocketshoes_api::ApiClient::new("http://127.0.0.1:9");

    let err = client.get_product(id(1)).await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
