//! # catalog-cart
//!
//! > A typed view-state coordinator for a product catalog and an in-progress
//! > cart.
//!
//! This crate is the client-side core of a catalog/cart UI: it fetches
//! paginated product data, tracks per-product quantity reservations across
//! the catalog and the cart, and reconciles dialog edits back into the
//! catalog view. Persistence and business rules live in an external managed
//! backend reached through the [`remote::RemoteCatalog`] trait; rendering
//! and dialog chrome belong to the host UI, which only consumes the typed
//! state and events exposed here.
//!
//! ## Design Philosophy
//!
//! ### Snapshots in, events out
//! Shared mutable state (catalog, cart, quantity ledger) is owned
//! exclusively by the [`controller::CatalogController`]. Dialogs receive
//! immutable snapshots, collect and validate edits locally, and hand results
//! back as typed events ([`dialog::CartDialogEvent`],
//! [`dialog::AddProductEvent`]); the controller applies them. No component
//! ever mutates another's state directly.
//!
//! ### The ledger is a ceiling, not a balance
//! At load time the [`ledger::QuantityLedger`] records, per product, the
//! total that exists across catalog stock and cart reservations. It is only
//! ever incremented, never decremented: it is the invariant upper bound used
//! to reject cart edits that claim more units than ever existed.
//!
//! ### Errors stop at their boundary
//! Row-level validation errors stay inside the dialog that produced them.
//! An unsuccessful backend envelope or a transport failure is caught at the
//! async call that triggered it, surfaced through the
//! [`report::StatusReporter`] collaborator, and never propagates further.
//! Nothing retries automatically.
//!
//! ## Concurrency Model
//!
//! Single-threaded and event-driven: all work runs as discrete reactions to
//! UI events or completed remote calls. Remote calls are the only await
//! points, there is no background work, and no lock guards the view state;
//! exclusive ownership by the controller is the discipline.
//!
//! ## Module Tour
//!
//! - [`model`]: plain data, covering products, cart items, drafts, and wire
//!   names.
//! - [`ledger`]: the per-product quantity ceiling.
//! - [`catalog`] / [`cart`]: the two views being reconciled.
//! - [`dialog`]: the cart-edit and add-product dialogs as pure state
//!   machines, including row-level validation.
//! - [`remote`]: the backend seam, with the async trait, the uniform result
//!   envelope, and a scripted mock for tests.
//! - [`report`]: the notification seam for success toasts, controller
//!   errors, and fatal errors.
//! - [`controller`]: the orchestrator that owns the state and wires
//!   everything together.
//! - [`runtime`]: tracing setup.
//!
//! ## Testing
//!
//! Drive the controller against [`remote::mock::MockRemote`] (an
//! expectation-queue scripted backend) and assert notifications with
//! [`report::RecordingReporter`]; see `tests/` for full flows.

pub mod cart;
pub mod catalog;
pub mod controller;
pub mod dialog;
pub mod ledger;
pub mod model;
pub mod remote;
pub mod report;
pub mod runtime;
