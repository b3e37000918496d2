//! The paginated catalog view: products and their remaining quantity.
//!
//! Owned exclusively by [`CatalogController`](crate::controller::CatalogController).
//! Rows are replaced wholesale by a page load, appended by a successful add,
//! and mutated in place as units move into or out of the cart.

use crate::model::{Product, ProductId};

#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole view with a freshly loaded page.
    pub fn replace(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// Appends newly created product records to the view.
    pub fn append(&mut self, products: Vec<Product>) {
        self.products.extend(products);
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Overwrites a row's remaining quantity. No-op for unknown ids.
    pub fn set_remaining(&mut self, id: &ProductId, quantity: u32) {
        if let Some(product) = self.products.iter_mut().find(|p| &p.id == id) {
            product.quantity = quantity;
        }
    }

    /// Removes a row after a confirmed remote delete. Returns whether a row
    /// was actually removed.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| &p.id != id);
        self.products.len() != before
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
