//! Diagnostic logging capability injected into the Gist client

use serde_json::Value;
use std::error::Error;

/// Receives diagnostics emitted by the client
///
/// `warn` is called with the decoded body of every response whose status is
/// 300 or above, before the response is classified into an error.
pub trait DiagnosticLogger: Send + Sync {
    fn warn(&self, body: &Value);

    fn exception(&self, error: &dyn Error);
}

/// Discards all diagnostics
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLogger;

impl DiagnosticLogger for NoopLogger {
    fn warn(&self, _body: &Value) {}

    fn exception(&self, _error: &dyn Error) {}
}

/// Forwards diagnostics to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl DiagnosticLogger for TracingLogger {
    fn warn(&self, body: &Value) {
        tracing::warn!(response = %body, "gist API returned a non-success status");
    }

    fn exception(&self, error: &dyn Error) {
        tracing::error!(error = %error_chain(error), "operation failed");
    }
}

/// `error` followed by each of its sources, separated by `: `
fn error_chain(error: &dyn Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
