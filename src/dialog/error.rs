//! Row-scoped validation errors for the cart edit dialog.

use crate::model::ProductId;
use std::collections::{BTreeMap, BTreeSet};

/// A validation failure attached to one cart line.
///
/// Shaped for inline rendering next to the offending row: a short title,
/// one message per violation, and the set of field names to highlight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    pub external_id: ProductId,
    pub title: String,
    pub messages: Vec<String>,
    pub field_names: BTreeSet<String>,
}

impl RowError {
    fn new(external_id: ProductId) -> Self {
        Self {
            external_id,
            title: "Invalid cart edit".to_string(),
            messages: Vec::new(),
            field_names: BTreeSet::new(),
        }
    }
}

/// Validation errors for one pass over an edit batch, keyed by cart line.
///
/// A non-empty map rejects the entire batch. The map is rebuilt from scratch
/// on every validation pass; errors are never merged across passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowErrors {
    rows: BTreeMap<ProductId, RowError>,
}

impl RowErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation of `field` on the given row, creating the row
    /// entry on first use.
    pub fn add(&mut self, external_id: &ProductId, field: &str, message: impl Into<String>) {
        let row = self
            .rows
            .entry(external_id.clone())
            .or_insert_with(|| RowError::new(external_id.clone()));
        row.messages.push(message.into());
        row.field_names.insert(field.to_string());
    }

    pub fn get(&self, external_id: &ProductId) -> Option<&RowError> {
        self.rows.get(external_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RowError> {
        self.rows.values()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violations_accumulate_per_row() {
        let mut errors = RowErrors::new();
        let id = ProductId::new("p1");
        errors.add(&id, "quantity", "quantity cannot be negative");
        errors.add(&id, "quantity", "only 5 units exist");
        assert_eq!(errors.len(), 1);
        let row = errors.get(&id).unwrap();
        assert_eq!(row.messages.len(), 2);
        assert!(row.field_names.contains("quantity"));
    }
}
