//! The working cart: the list of line items being assembled this session.
//!
//! Owned exclusively by [`CatalogController`](crate::controller::CatalogController).
//! Dialogs receive a cloned snapshot and hand changes back as typed events;
//! they never mutate this list directly.

use crate::model::{CartItem, Product, ProductId};

#[derive(Debug, Clone, Default)]
pub struct CartModel {
    items: Vec<CartItem>,
}

impl CartModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the list with the backend's persisted cart.
    pub fn replace(&mut self, items: Vec<CartItem>) {
        self.items = items;
    }

    /// Moves one unit of `product` into the cart: increments an existing
    /// line, or creates a new one with quantity 1.
    pub fn add_one(&mut self, product: &Product) {
        match self.items.iter_mut().find(|i| i.external_id == product.id) {
            Some(item) => item.quantity += 1,
            None => self.items.push(CartItem::new(
                product.id.clone(),
                product.name.clone(),
                product.price,
                1,
            )),
        }
    }

    /// Overwrites a line's quantity. A quantity of 0 keeps the line in
    /// place; zeroed lines are never pruned. No-op for unknown ids.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: u32) {
        if let Some(item) = self.items.iter_mut().find(|i| &i.external_id == id) {
            item.quantity = quantity;
        }
    }

    pub fn get(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.external_id == id)
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
