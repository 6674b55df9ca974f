//! Production-friendly observability for memory service sessions.
//!
//! ```rust
//! use mobserve::{MetricsSessionHooks, SafeSessionHooks, TracingSessionHooks};
//!
//! let _session_hooks = SafeSessionHooks::new(TracingSessionHooks);
//! let _metrics = MetricsSessionHooks;
//! ```

mod fanout;
mod logging;
mod metrics_hooks;
mod safe_hooks;
mod tracing_hooks;

pub use fanout::FanoutSessionHooks;
pub use logging::{DEFAULT_LOG_FILTER, init_logging, init_logging_with};
pub use metrics_hooks::MetricsSessionHooks;
pub use safe_hooks::SafeSessionHooks;
pub use tracing_hooks::TracingSessionHooks;

pub mod prelude {
    pub use crate::{
        FanoutSessionHooks, MetricsSessionHooks, SafeSessionHooks, TracingSessionHooks,
        init_logging,
    };
}

#[cfg(test)]
mod tests;
