//! Modal dialogs as pure state machines.
//!
//! Dialogs never touch the controller's state. Each one is constructed from
//! an immutable snapshot of what it needs, collects edits locally, and hands
//! results back as typed events; the controller applies them. The host UI
//! only has to render a dialog's state and forward its user input.
//!
//! - [`CartEditDialog`]: quantity edits against the cart, validated against
//!   the quantity ledger and applied all-or-nothing.
//! - [`AddProductDialog`]: a new product's field values, with per-field
//!   type coercion.

pub mod add_product;
pub mod cart_edit;
pub mod error;

pub use add_product::*;
pub use cart_edit::*;
pub use error::*;

use crate::model::{CartItem, DraftEdit, ProductDraft};

/// Integer-prefix parse shared by both dialogs: optional sign, then leading
/// decimal digits; any trailing text is ignored. No digits at all yields
/// `NaN`. `"7.9"` parses to `7`.
pub(crate) fn parse_int_base10(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    match digits[..end].parse::<f64>() {
        Ok(value) => sign * value,
        Err(_) => f64::NAN,
    }
}

/// Whether a dialog is still collecting input or has been dismissed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Open,
    Done,
}

/// Result events emitted by [`CartEditDialog`].
#[derive(Debug, Clone, PartialEq)]
pub enum CartDialogEvent {
    /// A validated edit batch was applied to the dialog's working copy.
    /// Carries the batch so the controller can reconcile catalog quantities.
    Update(Vec<DraftEdit>),
    /// The cart was persisted. Carries the full cart item list as saved.
    Save(Vec<CartItem>),
}

/// Result event emitted by [`AddProductDialog`].
#[derive(Debug, Clone, PartialEq)]
pub enum AddProductEvent {
    /// The accumulated field map, as last touched. No completeness
    /// validation is performed here; the backend owns that.
    Save(ProductDraft),
}
