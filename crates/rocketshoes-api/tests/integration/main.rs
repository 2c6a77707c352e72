//! Integration tests for rocketshoes-api
//!
//! Uses wiremock to simulate the storefront backend and verifies
//! end-to-end behavior of the ApiClient, the port adapter, and a cart
//! store wired to it.

mod common;

mod test_cart_flow;
mod test_products;
mod test_stock;
