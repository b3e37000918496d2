use super::product::ProductId;

/// One raw edit row as it arrives from the cart dialog's editable table.
///
/// `quantity` is whatever the user typed; it is parsed and validated by
/// [`CartEditDialog`](crate::dialog::CartEditDialog) before anything is
/// applied.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftRow {
    pub external_id: ProductId,
    pub quantity: String,
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl DraftRow {
    pub fn quantity(external_id: impl Into<ProductId>, quantity: impl Into<String>) -> Self {
        Self {
            external_id: external_id.into(),
            quantity: quantity.into(),
            name: None,
            price: None,
        }
    }
}

/// A parsed and validated edit row, ready to be folded into a cart item.
///
/// Transient: produced by one validation pass, consumed by the merge and the
/// `Update` event, then discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftEdit {
    pub external_id: ProductId,
    pub quantity: i64,
    pub name: Option<String>,
    pub price: Option<f64>,
}
