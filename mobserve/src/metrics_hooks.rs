//! Metrics-based hooks for the session retry loop.
//!
//! ```rust
//! use mobserve::MetricsSessionHooks;
//! use mtransport::SessionHooks;
//!
//! fn accepts_session_hooks(_hooks: &dyn SessionHooks) {}
//!
//! let hooks = MetricsSessionHooks;
//! accepts_session_hooks(&hooks);
//! ```

use std::time::Duration;

use mtransport::{ApiError, SessionHooks};

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSessionHooks;

impl SessionHooks for MetricsSessionHooks {
    fn on_attempt_start(&self, operation: &str, _attempt: u32) {
        metrics::counter!(
            "memphora_session_attempt_start_total",
            "operation" => operation.to_string()
        )
        .increment(1);
    }

    fn on_retry_scheduled(
        &self,
        operation: &str,
        _attempt: u32,
        delay: Duration,
        error: &ApiError,
    ) {
        metrics::counter!(
            "memphora_session_retry_scheduled_total",
            "operation" => operation.to_string(),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
        metrics::histogram!(
            "memphora_session_retry_delay_seconds",
            "operation" => operation.to_string()
        )
        .record(delay.as_secs_f64());
    }

    fn on_success(&self, operation: &str, attempts: u32) {
        metrics::counter!(
            "memphora_session_success_total",
            "operation" => operation.to_string()
        )
        .increment(1);
        metrics::histogram!(
            "memphora_session_attempts_per_success",
            "operation" => operation.to_string()
        )
        .record(attempts as f64);
    }

    fn on_failure(&self, operation: &str, attempts: u32, error: &ApiError) {
        metrics::counter!(
            "memphora_session_failure_total",
            "operation" => operation.to_string(),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
        metrics::histogram!(
            "memphora_session_attempts_per_failure",
            "operation" => operation.to_string()
        )
        .record(attempts as f64);
    }
}
