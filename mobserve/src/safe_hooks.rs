use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use mtransport::{ApiError, SessionHooks};

/// Swallows panics raised by the wrapped hooks so an observer can never abort
/// a request in flight.
pub struct SafeSessionHooks<H> {
    inner: H,
}

impl<H> SafeSessionHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> H {
        self.inner
    }
}

impl<H> SessionHooks for SafeSessionHooks<H>
where
    H: SessionHooks,
{
    fn on_attempt_start(&self, operation: &str, attempt: u32) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_attempt_start(operation, attempt)
        }));
    }

    fn on_retry_scheduled(
        &self,
        operation: &str,
        attempt: u32,
        delay: Duration,
        error: &ApiError,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_retry_scheduled(operation, attempt, delay, error)
        }));
    }

    fn on_success(&self, operation: &str, attempts: u32) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_success(operation, attempts)
        }));
    }

    fn on_failure(&self, operation: &str, attempts: u32, error: &ApiError) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_failure(operation, attempts, error)
        }));
    }
}
