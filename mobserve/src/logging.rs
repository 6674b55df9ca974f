//! Process-wide log subscriber setup.
//!
//! Installing a subscriber is optional: library code only emits `tracing`
//! events, and applications that already own a subscriber should skip this.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILTER: &str = "info";

/// Installs a formatting subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_LOG_FILTER`]. Returns `false` when a global subscriber already
/// exists; repeated calls are harmless.
pub fn init_logging() -> bool {
    init_logging_with(DEFAULT_LOG_FILTER)
}

/// Same as [`init_logging`] with a caller-chosen fallback directive.
pub fn init_logging_with(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
