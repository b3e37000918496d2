use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for a catalog product.
///
/// Unique and stable for the duration of a session; minted by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A catalog row as the backend returns it.
///
/// `quantity` is the stock *remaining in the catalog view*; units moved into
/// the cart are subtracted from it locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: u32,
    pub available: bool,
}

impl Product {
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: u32,
        available: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
            quantity,
            available,
        }
    }
}

/// The add-product dialog's accumulated field map.
///
/// All fields start untouched (`None`). `price` and `quantity` are `f64`
/// because the dialog's number coercion can yield `NaN` for non-numeric
/// input, which is stored as-is rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<f64>,
    pub available: Option<bool>,
}
