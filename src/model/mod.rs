//! Pure data structures shared by the catalog, the cart, and the dialogs.
//!
//! Everything here is plain data with serde derives matching the backend's
//! camelCase wire names. Behavior lives in the owning components
//! ([`crate::catalog`], [`crate::cart`], [`crate::dialog`]).

pub mod cart_item;
pub mod draft;
pub mod product;

pub use cart_item::*;
pub use draft::*;
pub use product::*;
