use super::draft::DraftEdit;
use super::product::ProductId;
use serde::{Deserialize, Serialize};

/// A line item in the working cart.
///
/// `external_id` references exactly one [`Product`](super::Product) for as
/// long as the line exists. A line whose quantity reaches 0 is kept, not
/// pruned; the row stays available for re-entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub external_id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(
        external_id: impl Into<ProductId>,
        name: impl Into<String>,
        price: f64,
        quantity: u32,
    ) -> Self {
        Self {
            external_id: external_id.into(),
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Returns a copy of this item with the draft's fields folded in.
    ///
    /// Draft fields that are empty or zero keep the existing value; only
    /// non-empty, non-zero draft fields override.
    pub fn merged_with(&self, edit: &DraftEdit) -> CartItem {
        CartItem {
            external_id: self.external_id.clone(),
            name: match &edit.name {
                Some(name) if !name.is_empty() => name.clone(),
                _ => self.name.clone(),
            },
            price: match edit.price {
                Some(price) if price != 0.0 => price,
                _ => self.price,
            },
            quantity: if edit.quantity > 0 {
                edit.quantity as u32
            } else {
                self.quantity
            },
        }
    }
}
