//! The remote backend seam.
//!
//! Persistence and business rules live in an external managed backend; this
//! crate only sees it through the [`RemoteCatalog`] trait. Every call is
//! async, and every call resolves to the backend's uniform [`Envelope`]
//! result, or fails outright with a [`TransportError`] when the call never
//! produced a well-formed result at all.
//!
//! # Testing
//!
//! See the [`mock`] module for an expectation-queue [`MockRemote`](mock::MockRemote)
//! that lets tests script backend behavior deterministically.

pub mod error;
pub mod mock;

pub use error::TransportError;

use crate::model::{CartItem, Product, ProductDraft, ProductId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// What every remote call resolves to: a backend envelope, or a transport
/// failure that prevented any envelope from arriving.
pub type RemoteResult<T> = Result<Envelope<T>, TransportError>;

/// The backend's uniform result wrapper.
///
/// An unsuccessful envelope carries a user-facing `error_message` and a
/// detailed `full_error_message` for the log; a successful one carries the
/// payload. Field names match the backend JSON (`isSuccess`, `errorMessage`,
/// ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub is_success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_error_message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            is_success: true,
            data: Some(data),
            error_message: None,
            full_error_message: None,
        }
    }

    pub fn failure(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            is_success: false,
            data: None,
            error_message: Some(message.into()),
            full_error_message: Some(detail.into()),
        }
    }
}

/// The opaque backend the coordinator talks to.
///
/// Implementations are out of scope here; production code adapts whatever
/// transport the host platform provides, tests use
/// [`MockRemote`](mock::MockRemote).
#[async_trait]
pub trait RemoteCatalog: Send + Sync {
    /// Fetches one page of catalog products.
    async fn products_by_limit_and_offset(
        &self,
        limit: u32,
        offset: u32,
    ) -> RemoteResult<Vec<Product>>;

    /// Deletes a product from the backing catalog.
    async fn delete_product_by_id(&self, id: &ProductId) -> RemoteResult<()>;

    /// Creates a product; the backend echoes back the created record(s).
    async fn add_product(&self, draft: &ProductDraft) -> RemoteResult<Vec<Product>>;

    /// Persists updated product records.
    async fn update_products(&self, products: &[Product]) -> RemoteResult<()>;

    /// Fetches the persisted cart.
    async fn cart_items(&self) -> RemoteResult<Vec<CartItem>>;

    /// Persists the full cart item list.
    async fn save_to_cart(&self, items: &[CartItem]) -> RemoteResult<()>;
}
