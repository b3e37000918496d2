//! Runtime infrastructure: observability setup.
//!
//! The coordinator itself is single-threaded and event-driven; the only
//! thing it needs wired up before use is structured logging.

pub mod tracing;

pub use tracing::*;
