//! Status reporting: the seam to the host's toast/notification surface.
//!
//! The coordinator never renders anything itself; success feedback and error
//! notifications go through the [`StatusReporter`] collaborator. Reporting is
//! fire-and-forget: implementations must not block and must not fail.
//!
//! Two error flavors flow through here, matching the crate-wide taxonomy:
//!
//! - **controller errors**: the backend answered with an unsuccessful
//!   [`Envelope`]; the user sees its `error_message`, the log gets its
//!   `full_error_message`.
//! - **fatal errors**: the call itself failed ([`TransportError`]); the user
//!   sees a fixed generic message, the log gets the raw error.
//!
//! Row-level validation errors never reach this module; they stay inside the
//! dialog that produced them.

use crate::remote::{Envelope, TransportError};
use std::sync::Mutex;
use tracing::{error, info};

/// What the user sees when an unexpected error occurs.
pub const FATAL_USER_MESSAGE: &str =
    "An error occurred in the system. Please contact system administrator.";

/// Fallback shown when an unsuccessful envelope carries no message.
const UNKNOWN_REMOTE_ERROR: &str = "The request failed for an unknown reason.";

/// The host's notification surface.
pub trait StatusReporter: Send + Sync {
    /// Shows a transient success notification.
    fn success(&self, message: &str);

    /// Shows `message` to the user and logs `detail`.
    fn controller_error(&self, message: &str, detail: &str, context: &str);

    /// Shows the generic fatal message and logs the raw error.
    fn fatal_error(&self, error: &TransportError, context: &str);
}

/// Surfaces an unsuccessful envelope: `error_message` for the user,
/// `full_error_message` for the log.
pub fn report_controller_error<T>(
    result: &Envelope<T>,
    reporter: &dyn StatusReporter,
    context: &str,
) {
    let message = result.error_message.as_deref().unwrap_or(UNKNOWN_REMOTE_ERROR);
    let detail = result.full_error_message.as_deref().unwrap_or(message);
    reporter.controller_error(message, detail, context);
}

/// Surfaces a transport failure as a fatal error.
pub fn report_fatal_error(error: &TransportError, reporter: &dyn StatusReporter, context: &str) {
    reporter.fatal_error(error, context);
}

/// Production reporter backed by `tracing`.
///
/// The host UI is expected to subscribe its toast surface to these events;
/// in headless runs they simply land in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl StatusReporter for TracingReporter {
    fn success(&self, message: &str) {
        info!(message, "success");
    }

    fn controller_error(&self, message: &str, detail: &str, context: &str) {
        error!(context, user_message = message, detail, "controller error");
    }

    fn fatal_error(&self, error: &TransportError, context: &str) {
        error!(context, user_message = FATAL_USER_MESSAGE, error = %error, "fatal error");
    }
}

/// Test double that records everything reported to it.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<Reported>>,
}

/// One recorded notification.
#[derive(Debug, Clone, PartialEq)]
pub enum Reported {
    Success(String),
    ControllerError {
        message: String,
        detail: String,
        context: String,
    },
    FatalError {
        context: String,
    },
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains and returns everything reported so far.
    pub fn take(&self) -> Vec<Reported> {
        std::mem::take(&mut self.events.lock().unwrap())
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl StatusReporter for RecordingReporter {
    fn success(&self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(Reported::Success(message.to_string()));
    }

    fn controller_error(&self, message: &str, detail: &str, context: &str) {
        self.events.lock().unwrap().push(Reported::ControllerError {
            message: message.to_string(),
            detail: detail.to_string(),
            context: context.to_string(),
        });
    }

    fn fatal_error(&self, _error: &TransportError, context: &str) {
        self.events.lock().unwrap().push(Reported::FatalError {
            context: context.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;

    #[test]
    fn controller_error_prefers_envelope_messages() {
        let reporter = RecordingReporter::new();
        let result: Envelope<Vec<Product>> = Envelope::failure("Query failed", "Query failed: row lock");
        report_controller_error(&result, &reporter, "load products");
        assert_eq!(
            reporter.take(),
            vec![Reported::ControllerError {
                message: "Query failed".to_string(),
                detail: "Query failed: row lock".to_string(),
                context: "load products".to_string(),
            }]
        );
    }

    #[test]
    fn controller_error_falls_back_when_envelope_is_bare() {
        let reporter = RecordingReporter::new();
        let result = Envelope::<()> {
            is_success: false,
            data: None,
            error_message: None,
            full_error_message: None,
        };
        report_controller_error(&result, &reporter, "save cart");
        match reporter.take().as_slice() {
            [Reported::ControllerError { message, detail, .. }] => {
                assert_eq!(message, UNKNOWN_REMOTE_ERROR);
                assert_eq!(detail, UNKNOWN_REMOTE_ERROR);
            }
            other => panic!("unexpected reports: {other:?}"),
        }
    }
}
