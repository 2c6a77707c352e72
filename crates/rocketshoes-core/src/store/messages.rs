//! Notification texts shown to the user
//!
//! The storefront is Brazilian; messages are in Portuguese and must match
//! what the UI has always shown.

/// Adding a product failed (catalog/stock unreachable, unknown product)
pub const ADD_PRODUCT_FAILED: &str = "Erro na adição do produto";

/// Removing a product failed (not in the cart, or the cart could not be saved)
pub const REMOVE_PRODUCT_FAILED: &str = "Erro na remoção do produto";

/// The requested quantity exceeds the available stock
pub const OUT_OF_STOCK: &str = "Quantidade solicitada fora de estoque";

/// Changing a quantity failed (stock unreachable, or the cart could not be saved)
pub const UPDATE_AMOUNT_FAILED: &str = "Erro na alteração de quantidade do produto";
