use std::sync::Arc;
use std::time::Duration;

use mtransport::{ApiError, SessionHooks};

/// Forwards every callback to each registered hook, in registration order.
#[derive(Clone, Default)]
pub struct FanoutSessionHooks {
    hooks: Vec<Arc<dyn SessionHooks>>,
}

impl FanoutSessionHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, hooks: Arc<dyn SessionHooks>) -> Self {
        self.hooks.push(hooks);
        self
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl std::fmt::Debug for FanoutSessionHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FanoutSessionHooks")
            .field("hooks", &self.hooks.len())
            .finish()
    }
}

impl SessionHooks for FanoutSessionHooks {
    fn on_attempt_start(&self, operation: &str, attempt: u32) {
        for hooks in &self.hooks {
            hooks.on_attempt_start(operation, attempt);
        }
    }

    fn on_retry_scheduled(
        &self,
        operation: &str,
        attempt: u32,
        delay: Duration,
        error: &ApiError,
    ) {
        for hooks in &self.hooks {
            hooks.on_retry_scheduled(operation, attempt, delay, error);
        }
    }

    fn on_success(&self, operation: &str, attempts: u32) {
        for hooks in &self.hooks {
            hooks.on_success(operation, attempts);
        }
    }

    fn on_failure(&self, operation: &str, attempts: u32, error: &ApiError) {
        for hooks in &self.hooks {
            hooks.on_failure(operation, attempts, error);
        }
    }
}
