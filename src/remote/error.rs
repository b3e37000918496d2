//! Error type for remote calls that never produced a result envelope.

use thiserror::Error;

/// A remote call that failed outright, before the backend could answer with
/// an [`Envelope`](super::Envelope).
///
/// These are the "fatal" branch of the error taxonomy: they surface to the
/// user as a generic message and are logged with full detail. An
/// *unsuccessful* envelope is not a `TransportError`; it is handled as a
/// controller error.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransportError {
    /// The call could not be delivered or the connection dropped mid-call.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The backend answered with something that was not a valid envelope.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
