//! The add-product dialog.
//!
//! Holds a fixed, ordered list of field descriptors and accumulates one
//! value per field as the user types. Each field carries a [`FieldKind`]
//! whose coercion is an exhaustive match, so adding a kind forces every
//! coercion site to handle it.

use super::{parse_int_base10, AddProductEvent, DialogState};
use crate::model::ProductDraft;

/// Semantic type of an input field, with its coercion rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Passed through untouched.
    Text,
    /// Base-10 integer-prefix parse. Non-numeric input coerces to `NaN`,
    /// which is stored as-is rather than rejected; the backend owns
    /// completeness validation. Known edge case, kept deliberately.
    Number,
    /// Boolean coercion of the input's checked state.
    Checkbox,
}

/// Raw input from the host UI: either a field's text value or a checkbox's
/// checked state.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    Value(String),
    Checked(bool),
}

/// A coerced field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Checkbox(bool),
}

impl FieldKind {
    /// Applies this kind's coercion rule to a raw edit event.
    pub fn coerce(self, input: &RawInput) -> FieldValue {
        match self {
            FieldKind::Text => FieldValue::Text(match input {
                RawInput::Value(value) => value.clone(),
                RawInput::Checked(checked) => checked.to_string(),
            }),
            FieldKind::Number => FieldValue::Number(match input {
                RawInput::Value(value) => parse_int_base10(value),
                RawInput::Checked(_) => f64::NAN,
            }),
            FieldKind::Checkbox => FieldValue::Checkbox(match input {
                RawInput::Value(value) => !value.is_empty(),
                RawInput::Checked(checked) => *checked,
            }),
        }
    }
}

/// One entry in the dialog's fixed field list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub label: &'static str,
    pub name: &'static str,
    pub kind: FieldKind,
}

/// The dialog's field list, in display order.
pub const FIELDS: [FieldDescriptor; 5] = [
    FieldDescriptor {
        label: "Name",
        name: "name",
        kind: FieldKind::Text,
    },
    FieldDescriptor {
        label: "Description",
        name: "description",
        kind: FieldKind::Text,
    },
    FieldDescriptor {
        label: "Price",
        name: "price",
        kind: FieldKind::Number,
    },
    FieldDescriptor {
        label: "Quantity",
        name: "quantity",
        kind: FieldKind::Number,
    },
    FieldDescriptor {
        label: "Available",
        name: "available",
        kind: FieldKind::Checkbox,
    },
];

#[derive(Debug, Default)]
pub struct AddProductDialog {
    draft: ProductDraft,
    state: DialogState,
}

impl AddProductDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The field descriptors, for the host UI to render.
    pub fn fields(&self) -> &'static [FieldDescriptor] {
        &FIELDS
    }

    /// The values accumulated so far.
    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn is_done(&self) -> bool {
        self.state == DialogState::Done
    }

    /// Coerces and stores one edit event. Unknown field names are ignored.
    pub fn update_field(&mut self, name: &str, input: RawInput) {
        let Some(descriptor) = FIELDS.iter().find(|f| f.name == name) else {
            return;
        };
        match (descriptor.name, descriptor.kind.coerce(&input)) {
            ("name", FieldValue::Text(value)) => self.draft.name = Some(value),
            ("description", FieldValue::Text(value)) => self.draft.description = Some(value),
            ("price", FieldValue::Number(value)) => self.draft.price = Some(value),
            ("quantity", FieldValue::Number(value)) => self.draft.quantity = Some(value),
            ("available", FieldValue::Checkbox(value)) => self.draft.available = Some(value),
            _ => {}
        }
    }

    /// Emits the accumulated field map and closes the dialog.
    pub fn save(&mut self) -> AddProductEvent {
        self.state = DialogState::Done;
        AddProductEvent::Save(self.draft.clone())
    }

    /// Closes the dialog without emitting.
    pub fn cancel(&mut self) {
        self.state = DialogState::Done;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_input_is_coerced_to_an_integer() {
        let mut dialog = AddProductDialog::new();
        dialog.update_field("quantity", RawInput::Value("7".to_string()));
        assert_eq!(dialog.draft().quantity, Some(7.0));
    }

    #[test]
    fn checkbox_input_is_coerced_to_bool() {
        let mut dialog = AddProductDialog::new();
        dialog.update_field("available", RawInput::Checked(true));
        assert_eq!(dialog.draft().available, Some(true));
    }

    #[test]
    fn non_numeric_price_stores_nan() {
        let mut dialog = AddProductDialog::new();
        dialog.update_field("price", RawInput::Value("abc".to_string()));
        assert!(dialog.draft().price.unwrap().is_nan());
    }

    #[test]
    fn number_parse_takes_the_integer_prefix() {
        assert_eq!(parse_int_base10("7.9"), 7.0);
        assert_eq!(parse_int_base10("  42nd"), 42.0);
        assert_eq!(parse_int_base10("-3"), -3.0);
        assert!(parse_int_base10("").is_nan());
        assert!(parse_int_base10(".5").is_nan());
    }

    #[test]
    fn text_fields_pass_through() {
        let mut dialog = AddProductDialog::new();
        dialog.update_field("name", RawInput::Value("Widget".to_string()));
        dialog.update_field("description", RawInput::Value("A widget".to_string()));
        assert_eq!(dialog.draft().name.as_deref(), Some("Widget"));
        assert_eq!(dialog.draft().description.as_deref(), Some("A widget"));
    }

    #[test]
    fn unknown_field_names_are_ignored() {
        let mut dialog = AddProductDialog::new();
        dialog.update_field("color", RawInput::Value("red".to_string()));
        assert_eq!(dialog.draft(), &ProductDraft::default());
    }

    #[test]
    fn save_emits_the_accumulated_field_map_and_closes() {
        let mut dialog = AddProductDialog::new();
        dialog.update_field("name", RawInput::Value("Widget".to_string()));
        dialog.update_field("quantity", RawInput::Value("7".to_string()));
        dialog.update_field("available", RawInput::Checked(true));

        let AddProductEvent::Save(draft) = dialog.save();
        assert_eq!(draft.name.as_deref(), Some("Widget"));
        assert_eq!(draft.quantity, Some(7.0));
        assert_eq!(draft.available, Some(true));
        // Untouched fields stay unset.
        assert_eq!(draft.description, None);
        assert!(dialog.is_done());
    }

    #[test]
    fn cancel_closes_without_a_draft() {
        let mut dialog = AddProductDialog::new();
        dialog.cancel();
        assert!(dialog.is_done());
    }
}
