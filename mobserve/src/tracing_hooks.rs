//! Tracing-based hooks for the session retry loop.
//!
//! ```rust
//! use mobserve::TracingSessionHooks;
//! use mtransport::SessionHooks;
//!
//! fn accepts_session_hooks(_hooks: &dyn SessionHooks) {}
//!
//! let hooks = TracingSessionHooks;
//! accepts_session_hooks(&hooks);
//! ```

use std::time::Duration;

use mtransport::{ApiError, SessionHooks};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSessionHooks;

impl SessionHooks for TracingSessionHooks {
    fn on_attempt_start(&self, operation: &str, attempt: u32) {
        tracing::debug!(
            phase = "session",
            event = "attempt_start",
            operation,
            attempt
        );
    }

    fn on_retry_scheduled(
        &self,
        operation: &str,
        attempt: u32,
        delay: Duration,
        error: &ApiError,
    ) {
        tracing::warn!(
            phase = "session",
            event = "retry_scheduled",
            operation,
            attempt,
            delay_ms = delay.as_millis() as u64,
            status = error.status,
            error_kind = ?error.kind,
            retryable = error.retryable,
            error = %error
        );
    }

    fn on_success(&self, operation: &str, attempts: u32) {
        tracing::info!(
            phase = "session",
            event = "success",
            operation,
            attempts
        );
    }

    fn on_failure(&self, operation: &str, attempts: u32, error: &ApiError) {
        tracing::error!(
            phase = "session",
            event = "failure",
            operation,
            attempts,
            status = error.status,
            error_kind = ?error.kind,
            retryable = error.retryable,
            error = %error
        );
    }
}
