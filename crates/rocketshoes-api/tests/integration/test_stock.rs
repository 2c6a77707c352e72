//! Integration tests for the stock endpoint

use rocketshoes_core::domain::ProductId;
use rocketshoes_core::ports::IStockService;
use rocketshoes_api::{ApiError, HttpProductApi};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common;

fn id(n: u64) -> ProductId {
    ProductId::new(n).unwrap()
}

#[tokio::test]
async fn test_get_stock() {
    let (server, client) = common::setup_api_mock().await;
    common::mount_stock(&server, 2, 5).await;

    let stock = client.get_stock(id(2)).await.expect("get_stock failed");

    assert_eq!(stock.product_id, id(2));
    assert_eq!(stock.amount, 5);
    assert!(stock.is_available());
}

#[tokio::test]
async fn test_get_stock_missing_amount_reads_as_zero() {
    let (server, client) = common::setup_api_mock().await;
    Mock::given(method("GET"))
        .and(path("/stock/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 4})))
        .mount(&server)
        .await;

    let stock = client.get_stock(id(4)).await.unwrap();
    assert_eq!(stock.amount, 0);
    assert!(!stock.is_available());
}

#[tokio::test]
async fn test_get_stock_server_error() {
    let (server, client) = common::setup_api_mock().await;
    common::mount_status(&server, "/stock/1", 503).await;

    let err = client.get_stock(id(1)).await.unwrap_err();
    assert!(matches!(err, ApiError::ServerError { .. }));
}

#[tokio::test]
async fn test_port_adapter_get_stock() {
    let (server, client) = common::setup_api_mock().await;
    common::mount_stock(&server, 6, 1).await;
    let api = HttpProductApi::new(client);

    let stock = api.get_stock(id(6)).await.unwrap();
    assert_eq!(stock.amount, 1);
}
