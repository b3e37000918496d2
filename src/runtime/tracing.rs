//! # Observability & Tracing
//!
//! Structured logging for the whole coordinator, via the `tracing` crate.
//!
//! ## What gets traced
//!
//! - **Load**: page and cart fetches, ledger seeding, final counts
//! - **Row actions**: optimistic add-to-cart mutations, confirmed deletes
//! - **Dialogs**: edit batches applied or rejected (row counts only; the
//!   row-level validation detail stays in the dialog, never in the log)
//! - **Remote failures**: controller errors with the backend's detail
//!   message, transport errors with the raw error
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo test
//!
//! # Full payloads at remote-call entry points
//! RUST_LOG=debug cargo test
//!
//! # Filter to one module
//! RUST_LOG=catalog_cart::controller=debug cargo test
//! ```
//!
//! The compact format hides module paths (`with_target(false)`); the
//! structured fields (`%id`, `context`, counts) carry the useful context
//! instead.

/// Initializes the global tracing subscriber.
///
/// Reads the filter from `RUST_LOG`. Call once at startup; calling twice
/// panics, so tests should rely on their harness instead.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
