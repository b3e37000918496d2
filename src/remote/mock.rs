//! # Mock backend
//!
//! Expectation-queue test double for [`RemoteCatalog`](super::RemoteCatalog).
//!
//! Queue up responses with `expect_*().return_*()`, hand the mock to the
//! code under test, then call [`MockRemote::verify`] to assert every queued
//! expectation was consumed. Calls are matched strictly in order; an
//! unexpected call panics the test.
//!
//! # Example
//! ```ignore
//! let mock = MockRemote::new();
//! mock.expect_products(10, 0).return_ok(vec![product]);
//! mock.expect_cart_items().return_ok(vec![]);
//!
//! let remote = Arc::new(mock);
//! // ... drive the controller against `remote` ...
//! remote.verify();
//! ```

use super::{Envelope, RemoteCatalog, RemoteResult, TransportError};
use crate::model::{CartItem, Product, ProductDraft, ProductId};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// One scripted response, tagged with the call it answers.
#[derive(Debug)]
enum Expectation {
    Products {
        limit: u32,
        offset: u32,
        response: RemoteResult<Vec<Product>>,
    },
    DeleteProduct {
        id: ProductId,
        response: RemoteResult<()>,
    },
    AddProduct {
        response: RemoteResult<Vec<Product>>,
    },
    UpdateProducts {
        response: RemoteResult<()>,
    },
    CartItems {
        response: RemoteResult<Vec<CartItem>>,
    },
    SaveToCart {
        response: RemoteResult<()>,
    },
}

/// A scripted [`RemoteCatalog`] with expectation tracking.
///
/// Also records the payloads handed to the write calls
/// ([`saved_carts`](MockRemote::saved_carts),
/// [`updated_products`](MockRemote::updated_products)) so tests can assert
/// exactly what would have been persisted.
#[derive(Default)]
pub struct MockRemote {
    expectations: Mutex<VecDeque<Expectation>>,
    saved_carts: Mutex<Vec<Vec<CartItem>>>,
    updated_products: Mutex<Vec<Vec<Product>>>,
    added_drafts: Mutex<Vec<ProductDraft>>,
}

impl MockRemote {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `products_by_limit_and_offset(limit, offset)` call.
    pub fn expect_products(&self, limit: u32, offset: u32) -> ExpectationBuilder<'_, Vec<Product>> {
        self.builder(move |response| Expectation::Products {
            limit,
            offset,
            response,
        })
    }

    /// Expects a `delete_product_by_id(id)` call.
    pub fn expect_delete_product(&self, id: impl Into<ProductId>) -> ExpectationBuilder<'_, ()> {
        let id = id.into();
        self.builder(move |response| Expectation::DeleteProduct { id, response })
    }

    /// Expects an `add_product` call.
    pub fn expect_add_product(&self) -> ExpectationBuilder<'_, Vec<Product>> {
        self.builder(|response| Expectation::AddProduct { response })
    }

    /// Expects an `update_products` call.
    pub fn expect_update_products(&self) -> ExpectationBuilder<'_, ()> {
        self.builder(|response| Expectation::UpdateProducts { response })
    }

    /// Expects a `cart_items` call.
    pub fn expect_cart_items(&self) -> ExpectationBuilder<'_, Vec<CartItem>> {
        self.builder(|response| Expectation::CartItems { response })
    }

    /// Expects a `save_to_cart` call.
    pub fn expect_save_to_cart(&self) -> ExpectationBuilder<'_, ()> {
        self.builder(|response| Expectation::SaveToCart { response })
    }

    /// Panics unless every queued expectation was consumed.
    pub fn verify(&self) {
        let expectations = self.expectations.lock().unwrap();
        if !expectations.is_empty() {
            panic!(
                "not all expectations were met, {} remaining",
                expectations.len()
            );
        }
    }

    /// Every payload handed to `save_to_cart`, in call order.
    pub fn saved_carts(&self) -> Vec<Vec<CartItem>> {
        self.saved_carts.lock().unwrap().clone()
    }

    /// Every payload handed to `update_products`, in call order.
    pub fn updated_products(&self) -> Vec<Vec<Product>> {
        self.updated_products.lock().unwrap().clone()
    }

    /// Every draft handed to `add_product`, in call order.
    pub fn added_drafts(&self) -> Vec<ProductDraft> {
        self.added_drafts.lock().unwrap().clone()
    }

    fn builder<T>(
        &self,
        wrap: impl FnOnce(RemoteResult<T>) -> Expectation + 'static,
    ) -> ExpectationBuilder<'_, T> {
        ExpectationBuilder {
            expectations: &self.expectations,
            wrap: Box::new(wrap),
        }
    }

    fn next(&self, call: &str) -> Expectation {
        self.expectations
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected call to {call}: no expectations queued"))
    }
}

/// Builder that attaches a scripted response to a pending expectation.
pub struct ExpectationBuilder<'a, T> {
    expectations: &'a Mutex<VecDeque<Expectation>>,
    wrap: Box<dyn FnOnce(RemoteResult<T>) -> Expectation>,
}

impl<'a, T> ExpectationBuilder<'a, T> {
    /// Scripts a successful envelope carrying `data`.
    pub fn return_ok(self, data: T) {
        self.push(Ok(Envelope::success(data)));
    }

    /// Scripts an unsuccessful envelope (an explicit backend failure).
    pub fn return_failure(self, message: impl Into<String>, detail: impl Into<String>) {
        self.push(Ok(Envelope::failure(message, detail)));
    }

    /// Scripts a transport-level failure (no envelope at all).
    pub fn return_transport_error(self, error: TransportError) {
        self.push(Err(error));
    }

    fn push(self, response: RemoteResult<T>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back((self.wrap)(response));
    }
}

#[async_trait]
impl RemoteCatalog for MockRemote {
    async fn products_by_limit_and_offset(
        &self,
        limit: u32,
        offset: u32,
    ) -> RemoteResult<Vec<Product>> {
        match self.next("products_by_limit_and_offset") {
            Expectation::Products {
                limit: expected_limit,
                offset: expected_offset,
                response,
            } => {
                assert_eq!((limit, offset), (expected_limit, expected_offset));
                response
            }
            other => panic!("expected {other:?}, got products_by_limit_and_offset"),
        }
    }

    async fn delete_product_by_id(&self, id: &ProductId) -> RemoteResult<()> {
        match self.next("delete_product_by_id") {
            Expectation::DeleteProduct {
                id: expected_id,
                response,
            } => {
                assert_eq!(id, &expected_id);
                response
            }
            other => panic!("expected {other:?}, got delete_product_by_id"),
        }
    }

    async fn add_product(&self, draft: &ProductDraft) -> RemoteResult<Vec<Product>> {
        self.added_drafts.lock().unwrap().push(draft.clone());
        match self.next("add_product") {
            Expectation::AddProduct { response } => response,
            other => panic!("expected {other:?}, got add_product"),
        }
    }

    async fn update_products(&self, products: &[Product]) -> RemoteResult<()> {
        self.updated_products.lock().unwrap().push(products.to_vec());
        match self.next("update_products") {
            Expectation::UpdateProducts { response } => response,
            other => panic!("expected {other:?}, got update_products"),
        }
    }

    async fn cart_items(&self) -> RemoteResult<Vec<CartItem>> {
        match self.next("cart_items") {
            Expectation::CartItems { response } => response,
            other => panic!("expected {other:?}, got cart_items"),
        }
    }

    async fn save_to_cart(&self, items: &[CartItem]) -> RemoteResult<()> {
        self.saved_carts.lock().unwrap().push(items.to_vec());
        match self.next("save_to_cart") {
            Expectation::SaveToCart { response } => response,
            other => panic!("expected {other:?}, got save_to_cart"),
        }
    }
}
