use serde::{Deserialize, Serialize};

use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::ProductId;

/// A product snapshot taken when it was put in the cart, plus how many.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub cart_quantity: u32,
}

impl CartItem {
    pub fn product_id(&self) -> &ProductId {
        &self.product.id
    }

    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.cart_quantity)
    }
}

/// Ordered cart lines, at most one per product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id() == product_id)
    }

    /// Increments an existing line or appends a new one.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        match self.items.iter_mut().find(|i| i.product_id() == &product.id) {
            Some(item) => item.cart_quantity = item.cart_quantity.saturating_add(quantity),
            None => self.items.push(CartItem {
                product: product.clone(),
                cart_quantity: quantity,
            }),
        }
    }

    /// Sets a line's quantity, floored at 1. Returns false when the line is absent.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) -> bool {
        match self.items.iter_mut().find(|i| i.product_id() == product_id) {
            Some(item) => {
                item.cart_quantity = u32::try_from(quantity.max(1)).unwrap_or(u32::MAX);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.product_id() != product_id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Number of units across all lines (the header badge). Widened so
    /// several full-stock lines cannot overflow.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.cart_quantity)).sum()
    }
}
