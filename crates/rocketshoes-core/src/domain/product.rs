//! Catalog products and cart items
//!
//! The catalog owns the shape of a product record. The cart only interprets
//! `id` (and, for cart items, `amount`); every other field is carried
//! through verbatim so that whatever the catalog returns is what gets
//! stored and shown.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::newtypes::{ProductId, Quantity};

/// Opaque product attributes keyed by field name
pub type Attributes = Map<String, Value>;

/// Attribute keys that may carry a display name, in lookup order
const NAME_KEYS: &[&str] = &["title", "name"];

/// Attribute keys that may carry an image URL, in lookup order
const IMAGE_KEYS: &[&str] = &["image", "imageUrl"];

/// A product record as returned by the catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier
    pub id: ProductId,
    /// All remaining fields of the catalog record
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl Product {
    /// Creates a product with no attributes
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            attributes: Attributes::new(),
        }
    }

    /// Sets a single attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// A product placed in the cart, with the number of units selected
///
/// Serializes as the catalog record with an `amount` field added, e.g.
/// `{"id": 1, "title": "Tênis", "price": 139.9, "image": "...", "amount": 2}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Catalog identifier, unique within a cart
    pub id: ProductId,
    /// Units selected, always at least 1
    pub amount: Quantity,
    /// Catalog fields carried through unchanged
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl CartItem {
    /// Builds a cart item holding a single unit of `product`
    ///
    /// A stray `amount` field in the catalog record is dropped so it cannot
    /// shadow the cart quantity.
    pub fn from_product(product: Product) -> Self {
        let mut attributes = product.attributes;
        attributes.remove("amount");
        Self {
            id: product.id,
            amount: Quantity::ONE,
            attributes,
        }
    }

    /// Returns a copy of this item with a different quantity
    #[must_use]
    pub fn with_amount(&self, amount: Quantity) -> Self {
        Self {
            amount,
            ..self.clone()
        }
    }

    /// Display name, read from `title` or `name`
    pub fn title(&self) -> Option<&str> {
        NAME_KEYS
            .iter()
            .find_map(|key| self.attributes.get(*key).and_then(Value::as_str))
    }

    /// Image URL, read from `image` or `imageUrl`
    pub fn image(&self) -> Option<&str> {
        IMAGE_KEYS
            .iter()
            .find_map(|key| self.attributes.get(*key).and_then(Value::as_str))
    }

    /// Unit price, accepting either a JSON number or a numeric string
    pub fn price(&self) -> Option<f64> {
        match self.attributes.get("price")? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Unit price multiplied by the quantity; zero when the price is unknown
    pub fn subtotal(&self) -> f64 {
        self.price().unwrap_or(0.0) * f64::from(self.amount.get())
    }
}
