//! The quantity ledger: the original total of every product across catalog
//! and cart.
//!
//! Built once at load time by recording each catalog row's remaining stock
//! and each existing cart line's quantity. The stored total is a ceiling,
//! not a live balance: entries are only ever incremented, never decremented,
//! so `catalog[id].quantity + cart[id].quantity <= ledger[id]` holds for the
//! whole session. Cart edits that would claim more than the recorded total
//! are rejected against this map.

use crate::model::ProductId;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct QuantityLedger {
    totals: HashMap<ProductId, u32>,
}

impl QuantityLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `delta` to the stored total for `id`, starting from 0 for
    /// products never seen before. There is no removal operation.
    pub fn record(&mut self, id: &ProductId, delta: u32) {
        *self.totals.entry(id.clone()).or_insert(0) += delta;
    }

    /// Returns the recorded total, or `None` if the product was never
    /// recorded.
    pub fn get(&self, id: &ProductId) -> Option<u32> {
        self.totals.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}
