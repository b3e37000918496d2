//! The top-level orchestrator.
//!
//! [`CatalogController`] owns all shared view state (catalog, cart, ledger),
//! loads it from the backend, wires row actions, opens dialogs over
//! snapshots, and applies their result events. Remote failures stop here:
//! they are surfaced through the [`StatusReporter`] and never propagate to
//! the caller, so every controller entry point returns `()`.
//!
//! There is no guard against re-triggering an action while an identical
//! remote call is still in flight; the single-threaded event model makes
//! that an accepted race.

use crate::cart::CartModel;
use crate::catalog::ProductCatalog;
use crate::dialog::{AddProductDialog, AddProductEvent, CartDialogEvent, CartEditDialog};
use crate::ledger::QuantityLedger;
use crate::model::{CartItem, DraftEdit, Product, ProductDraft, ProductId};
use crate::remote::{Envelope, RemoteCatalog};
use crate::report::{report_controller_error, report_fatal_error, StatusReporter};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Catalog page size for the initial load.
pub const PAGE_SIZE: u32 = 10;

pub struct CatalogController {
    catalog: ProductCatalog,
    cart: CartModel,
    ledger: QuantityLedger,
    remote: Arc<dyn RemoteCatalog>,
    reporter: Arc<dyn StatusReporter>,
}

impl CatalogController {
    pub fn new(remote: Arc<dyn RemoteCatalog>, reporter: Arc<dyn StatusReporter>) -> Self {
        Self {
            catalog: ProductCatalog::new(),
            cart: CartModel::new(),
            ledger: QuantityLedger::new(),
            remote,
            reporter,
        }
    }

    // =========================================================================
    // Initial load
    // =========================================================================

    /// Loads the first catalog page and the persisted cart, then seeds the
    /// quantity ledger with both: each product's remaining stock plus each
    /// cart line's quantity. The ledger totals are the session's ceiling for
    /// all later cart edits.
    #[instrument(skip(self))]
    pub async fn load(&mut self) {
        // A transport failure on the page load aborts the whole load; an
        // unsuccessful envelope does not.
        if !self.load_products(PAGE_SIZE, 0).await {
            return;
        }
        self.load_cart_items().await;
        info!(
            products = self.catalog.len(),
            cart_items = self.cart.len(),
            ledger_entries = self.ledger.len(),
            "loaded"
        );
    }

    /// Returns `false` when the fetch failed at the transport level.
    async fn load_products(&mut self, limit: u32, offset: u32) -> bool {
        match self.remote.products_by_limit_and_offset(limit, offset).await {
            Ok(Envelope {
                is_success: true,
                data: Some(products),
                ..
            }) => {
                for product in &products {
                    self.ledger.record(&product.id, product.quantity);
                }
                self.catalog.replace(products);
                true
            }
            Ok(result) => {
                report_controller_error(&result, self.reporter.as_ref(), "load products");
                true
            }
            Err(error) => {
                report_fatal_error(&error, self.reporter.as_ref(), "load products");
                false
            }
        }
    }

    async fn load_cart_items(&mut self) {
        match self.remote.cart_items().await {
            Ok(Envelope {
                is_success: true,
                data: Some(items),
                ..
            }) => {
                for item in &items {
                    self.ledger.record(&item.external_id, item.quantity);
                }
                self.cart.replace(items);
            }
            Ok(result) => report_controller_error(&result, self.reporter.as_ref(), "load cart"),
            Err(error) => report_fatal_error(&error, self.reporter.as_ref(), "load cart"),
        }
    }

    // =========================================================================
    // Row actions
    // =========================================================================

    /// Moves one unit of a catalog row into the cart.
    ///
    /// Optimistic and purely local: the catalog row's remaining quantity is
    /// decremented and the cart line incremented (or created with quantity
    /// 1) with no remote call. A row with nothing remaining is a no-op.
    pub fn add_to_cart(&mut self, id: &ProductId) {
        let Some(product) = self.catalog.get(id) else {
            return;
        };
        if product.quantity == 0 {
            return;
        }
        let product = product.clone();
        self.catalog.set_remaining(id, product.quantity - 1);
        self.cart.add_one(&product);
        debug!(%id, remaining = product.quantity - 1, "moved one unit to cart");
    }

    /// Deletes a catalog row through the backend.
    ///
    /// Nothing is mutated optimistically: the row is only removed after the
    /// backend confirms, so a failure needs no rollback.
    #[instrument(skip(self))]
    pub async fn delete_product(&mut self, id: &ProductId) {
        match self.remote.delete_product_by_id(id).await {
            Ok(result) if result.is_success => {
                self.catalog.remove(id);
                info!(%id, "product deleted");
                self.reporter.success("Deleted the Product from the Catalog");
            }
            Ok(result) => report_controller_error(&result, self.reporter.as_ref(), "delete product"),
            Err(error) => report_fatal_error(&error, self.reporter.as_ref(), "delete product"),
        }
    }

    // =========================================================================
    // Cart dialog
    // =========================================================================

    /// Opens the cart-editing dialog over snapshots of the cart and ledger.
    pub fn open_cart_dialog(&self) -> CartEditDialog {
        CartEditDialog::new(self.cart.items().to_vec(), self.ledger.clone())
    }

    /// Applies a result event from the cart dialog.
    pub async fn handle_cart_event(&mut self, event: CartDialogEvent) {
        match event {
            CartDialogEvent::Update(edits) => self.apply_cart_update(&edits),
            CartDialogEvent::Save(items) => self.save_cart_to_catalog(&items).await,
        }
    }

    /// Reconciles a validated edit batch into the catalog and cart: each
    /// row's remaining quantity becomes `ledger total − new cart quantity`,
    /// and the cart line's quantity is overwritten.
    pub fn apply_cart_update(&mut self, edits: &[DraftEdit]) {
        for edit in edits {
            let Some(total) = self.ledger.get(&edit.external_id) else {
                continue;
            };
            let quantity = u32::try_from(edit.quantity).unwrap_or(0);
            self.catalog
                .set_remaining(&edit.external_id, total.saturating_sub(quantity));
            self.cart.set_quantity(&edit.external_id, quantity);
            debug!(id = %edit.external_id, quantity, "cart line reconciled");
        }
    }

    /// Persists the saved cart's product records: maps each cart line back
    /// to its full catalog product and sends the batch to the backend.
    #[instrument(skip_all)]
    async fn save_cart_to_catalog(&mut self, items: &[CartItem]) {
        let products: Vec<Product> = items
            .iter()
            .filter_map(|item| self.catalog.get(&item.external_id).cloned())
            .collect();
        match self.remote.update_products(&products).await {
            Ok(result) if result.is_success => {
                info!(products = products.len(), "cart saved to catalog");
                self.reporter.success("Saved Cart to the Catalog");
            }
            Ok(result) => report_controller_error(&result, self.reporter.as_ref(), "update products"),
            Err(error) => report_fatal_error(&error, self.reporter.as_ref(), "update products"),
        }
    }

    // =========================================================================
    // Add-product dialog
    // =========================================================================

    /// Opens the add-product dialog.
    pub fn open_add_dialog(&self) -> AddProductDialog {
        AddProductDialog::new()
    }

    /// Applies a result event from the add-product dialog.
    pub async fn handle_add_event(&mut self, event: AddProductEvent) {
        match event {
            AddProductEvent::Save(draft) => self.add_product(draft).await,
        }
    }

    /// Creates a product through the backend and appends the echoed
    /// record(s) to the catalog view.
    #[instrument(skip(self, draft))]
    pub async fn add_product(&mut self, draft: ProductDraft) {
        match self.remote.add_product(&draft).await {
            Ok(Envelope {
                is_success: true,
                data: Some(products),
                ..
            }) => {
                info!(created = products.len(), "product added");
                self.catalog.append(products);
                self.reporter.success("Added a new Product to the Catalog");
            }
            Ok(result) => report_controller_error(&result, self.reporter.as_ref(), "add product"),
            Err(error) => report_fatal_error(&error, self.reporter.as_ref(), "add product"),
        }
    }

    // =========================================================================
    // View state
    // =========================================================================

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn cart(&self) -> &CartModel {
        &self.cart
    }

    pub fn ledger(&self) -> &QuantityLedger {
        &self.ledger
    }
}
