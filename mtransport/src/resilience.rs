//! Standard retry/backoff policy and operational hook contracts.

use std::future::Future;
use std::time::Duration;

use mcommon::BoxFuture;

use crate::ApiError;
use crate::error::TRANSIENT_STATUSES;

#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
    pub backoff_multiplier: f64,
    pub retry_statuses: Vec<u16>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff: Duration::from_secs(1),
            max_backoff: Duration::from_secs(120),
            backoff_multiplier: 2.0,
            retry_statuses: TRANSIENT_STATUSES.to_vec(),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Self::default()
        }
    }

    pub fn disabled() -> Self {
        Self::new(0)
    }

    pub fn with_initial_backoff(mut self, initial_backoff: Duration) -> Self {
        self.initial_backoff = initial_backoff;
        self
    }

    pub fn with_retry_statuses(mut self, statuses: impl IntoIterator<Item = u16>) -> Self {
        self.retry_statuses = statuses.into_iter().collect();
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Status failures are judged by the policy's status set; everything else
    /// by the error's own retryable flag.
    pub fn is_retryable(&self, error: &ApiError) -> bool {
        match error.status {
            Some(status) => self.retry_statuses.contains(&status),
            None => error.retryable,
        }
    }

    pub fn should_retry(&self, attempt: u32, error: &ApiError) -> bool {
        attempt < self.max_attempts() && self.is_retryable(error)
    }

    /// Never panics: negative or NaN growth yields zero or the cap.
    pub fn backoff_for_attempt(&self, attempt: u32) -> Duration {
        let exponent = (attempt.saturating_sub(1)) as i32;
        let unbounded = self.initial_backoff.as_secs_f64() * self.backoff_multiplier.powi(exponent);
        let seconds = unbounded.min(self.max_backoff.as_secs_f64()).max(0.0);
        Duration::try_from_secs_f64(seconds).unwrap_or(self.max_backoff)
    }

    pub fn delay_for(&self, attempt: u32, error: &ApiError) -> Duration {
        let backoff = self.backoff_for_attempt(attempt);
        match error.retry_after {
            Some(retry_after) => backoff.max(retry_after.min(self.max_backoff)),
            None => backoff,
        }
    }
}

pub trait SessionHooks: Send + Sync {
    fn on_attempt_start(&self, _operation: &str, _attempt: u32) {}

    fn on_retry_scheduled(
        &self,
        _operation: &str,
        _attempt: u32,
        _delay: Duration,
        _error: &ApiError,
    ) {
    }

    fn on_success(&self, _operation: &str, _attempts: u32) {}

    fn on_failure(&self, _operation: &str, _attempts: u32, _error: &ApiError) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSessionHooks;

impl SessionHooks for NoopSessionHooks {}

/// Suspends the calling task between attempts.
pub trait BackoffSleeper: Send + Sync {
    fn sleep(&self, delay: Duration) -> BoxFuture<'_, ()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TokioSleeper;

impl BackoffSleeper for TokioSleeper {
    fn sleep(&self, delay: Duration) -> BoxFuture<'_, ()> {
        Box::pin(tokio::time::sleep(delay))
    }
}

pub async fn execute_with_retry<T, Op, OpFuture, Sleep, SleepFuture>(
    operation: &str,
    policy: &RetryPolicy,
    hooks: &dyn SessionHooks,
    mut execute: Op,
    mut sleep: Sleep,
) -> Result<T, ApiError>
where
    Op: FnMut(u32) -> OpFuture,
    OpFuture: Future<Output = Result<T, ApiError>>,
    Sleep: FnMut(Duration) -> SleepFuture,
    SleepFuture: Future<Output = ()>,
{
    let mut attempt = 1;

    loop {
        hooks.on_attempt_start(operation, attempt);

        match execute(attempt).await {
            Ok(value) => {
                hooks.on_success(operation, attempt);
                return Ok(value);
            }
            Err(error) => {
                if policy.should_retry(attempt, &error) {
                    let delay = policy.delay_for(attempt, &error);
                    hooks.on_retry_scheduled(operation, attempt, delay, &error);
                    sleep(delay).await;
                    attempt += 1;
                    continue;
                }

                hooks.on_failure(operation, attempt, &error);
                return Err(error);
            }
        }
    }
}
