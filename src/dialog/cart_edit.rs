//! The cart-editing dialog.
//!
//! Works on an owned snapshot of the cart plus a snapshot of the quantity
//! ledger. Edit batches go through parse → validate → apply: every row must
//! pass or the whole batch is rejected with row-level errors, and the error
//! map is rebuilt on every pass. Saving sends the full current item list to
//! the backend; only a successful save (or a cancel) closes the dialog.

use super::error::RowErrors;
use super::{parse_int_base10, CartDialogEvent, DialogState};
use crate::ledger::QuantityLedger;
use crate::model::{CartItem, DraftEdit, DraftRow};
use crate::remote::RemoteCatalog;
use crate::report::{report_controller_error, report_fatal_error, StatusReporter};
use tracing::debug;

pub struct CartEditDialog {
    items: Vec<CartItem>,
    ledger: QuantityLedger,
    errors: RowErrors,
    state: DialogState,
}

impl CartEditDialog {
    /// Opens the dialog over a snapshot of the cart and the ledger.
    pub fn new(items: Vec<CartItem>, ledger: QuantityLedger) -> Self {
        Self {
            items,
            ledger,
            errors: RowErrors::new(),
            state: DialogState::Open,
        }
    }

    /// The dialog's working copy of the cart.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Row errors from the most recent validation pass.
    pub fn errors(&self) -> &RowErrors {
        &self.errors
    }

    pub fn is_done(&self) -> bool {
        self.state == DialogState::Done
    }

    /// Sum of `price × quantity` over the working copy, recomputed per call.
    pub fn total_price(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.price * f64::from(item.quantity))
            .sum()
    }

    /// Parses, validates, and applies an edit batch.
    ///
    /// Rejections are all-or-nothing: if any row fails, no row is applied,
    /// the failures are kept in [`errors`](Self::errors), and `None` is
    /// returned. On success the edits are folded into the working copy and
    /// returned as an [`Update`](CartDialogEvent::Update) event for the
    /// controller to reconcile catalog quantities with.
    pub fn apply_draft_edits(&mut self, rows: &[DraftRow]) -> Option<CartDialogEvent> {
        let mut errors = RowErrors::new();
        let mut edits = Vec::with_capacity(rows.len());

        for row in rows {
            // Same integer-prefix coercion the add dialog uses: "6.5" claims
            // 6 units. Only input with no digits at all is invalid.
            let parsed = parse_int_base10(&row.quantity);
            if parsed.is_nan() {
                errors.add(
                    &row.external_id,
                    "quantity",
                    format!("'{}' is not a number", row.quantity),
                );
                continue;
            }
            let quantity = parsed as i64;

            if quantity < 0 {
                errors.add(&row.external_id, "quantity", "quantity cannot be negative");
            }
            match self.ledger.get(&row.external_id) {
                None => {
                    errors.add(&row.external_id, "quantity", "unknown product");
                }
                Some(total) if i64::from(total) - quantity < 0 => {
                    errors.add(
                        &row.external_id,
                        "quantity",
                        format!("only {total} units exist across catalog and cart"),
                    );
                }
                Some(_) => {}
            }

            edits.push(DraftEdit {
                external_id: row.external_id.clone(),
                quantity,
                name: row.name.clone(),
                price: row.price,
            });
        }

        // Stale errors from a previous pass are gone either way.
        self.errors = errors;
        if !self.errors.is_empty() {
            debug!(rejected_rows = self.errors.len(), "edit batch rejected");
            return None;
        }

        for item in &mut self.items {
            if let Some(edit) = edits.iter().find(|e| e.external_id == item.external_id) {
                *item = item.merged_with(edit);
            }
        }
        debug!(edits = edits.len(), "edit batch applied");
        Some(CartDialogEvent::Update(edits))
    }

    /// Persists the full current item list.
    ///
    /// On success, emits a [`Save`](CartDialogEvent::Save) event carrying the
    /// saved list and closes the dialog. On an unsuccessful envelope or a
    /// transport failure the error is reported and the dialog stays open; the
    /// user decides whether to try again.
    pub async fn save(
        &mut self,
        remote: &dyn RemoteCatalog,
        reporter: &dyn StatusReporter,
    ) -> Option<CartDialogEvent> {
        match remote.save_to_cart(&self.items).await {
            Ok(result) if result.is_success => {
                self.state = DialogState::Done;
                Some(CartDialogEvent::Save(self.items.clone()))
            }
            Ok(result) => {
                report_controller_error(&result, reporter, "save cart");
                None
            }
            Err(error) => {
                report_fatal_error(&error, reporter, "save cart");
                None
            }
        }
    }

    /// Dismisses the dialog without emitting anything.
    pub fn cancel(&mut self) {
        self.state = DialogState::Done;
    }
}
