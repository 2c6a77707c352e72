//! The cart collection
//!
//! A [`Cart`] is an ordered sequence of [`CartItem`]s, unique by product id.
//! Mutating methods are persistent-style: they return a new cart and leave
//! the receiver untouched, so the store can write the candidate state to
//! storage before committing it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::newtypes::{ProductId, Quantity};
use super::product::CartItem;

/// Ordered collection of cart items, unique by product id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CartItem>", into = "Vec<CartItem>")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// All items, in insertion order
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Iterates over the items in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, CartItem> {
        self.items.iter()
    }

    /// Number of distinct products in the cart
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the cart holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up the item for `id`
    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns true if an item for `id` is present
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Returns a cart with `item` appended, or `None` if its id is already present
    #[must_use]
    pub fn with_item(&self, item: CartItem) -> Option<Self> {
        if self.contains(item.id) {
            return None;
        }
        let mut items = self.items.clone();
        items.push(item);
        Some(Self { items })
    }

    /// Returns a cart without the item for `id`, or `None` if it is absent
    #[must_use]
    pub fn without(&self, id: ProductId) -> Option<Self> {
        if !self.contains(id) {
            return None;
        }
        let items = self
            .items
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();
        Some(Self { items })
    }

    /// Returns a cart where the item for `id` holds `amount` units
    ///
    /// Other items and the ordering are preserved. Returns `None` if no item
    /// matches `id`.
    #[must_use]
    pub fn with_amount(&self, id: ProductId, amount: Quantity) -> Option<Self> {
        if !self.contains(id) {
            return None;
        }
        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id == id {
                    item.with_amount(amount)
                } else {
                    item.clone()
                }
            })
            .collect();
        Some(Self { items })
    }

    /// Computes the derived totals for this cart
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            distinct_items: self.items.len(),
            total_units: self
                .items
                .iter()
                .map(|item| u64::from(item.amount.get()))
                .sum(),
            subtotal: self.items.iter().map(CartItem::subtotal).sum(),
        }
    }
}

impl From<Vec<CartItem>> for Cart {
    /// Builds a cart from raw items, keeping the first occurrence of each id
    fn from(raw: Vec<CartItem>) -> Self {
        let mut seen = HashSet::with_capacity(raw.len());
        let mut items = Vec::with_capacity(raw.len());
        for item in raw {
            if seen.insert(item.id) {
                items.push(item);
            } else {
                warn!(product_id = %item.id, "Dropping duplicate cart item");
            }
        }
        Self { items }
    }
}

impl From<Cart> for Vec<CartItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartItem;
    type IntoIter = std::slice::Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Totals derived from a cart, for headers and order summaries
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CartSummary {
    /// Number of distinct products
    pub distinct_items: usize,
    /// Sum of all quantities
    pub total_units: u64,
    /// Sum of price times quantity; items without a price count as zero
    pub subtotal: f64,
}
