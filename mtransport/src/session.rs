//! Authenticated session that owns the retry loop.

use std::sync::Arc;

use serde_json::Value;

use crate::{
    ApiError, ApiRequest, AuthContext, BackoffSleeper, HttpTransport, NoopSessionHooks,
    RetryPolicy, SessionHooks, TokioSleeper, execute_with_retry,
};

/// Every API call goes through [`Session::send`]: one logical call, up to
/// `max_retries + 1` attempts, same bearer credential on each.
#[derive(Clone)]
pub struct Session {
    transport: Arc<dyn HttpTransport>,
    auth: AuthContext,
    policy: RetryPolicy,
    hooks: Arc<dyn SessionHooks>,
    sleeper: Arc<dyn BackoffSleeper>,
}

impl Session {
    pub fn new(transport: Arc<dyn HttpTransport>, auth: AuthContext) -> Self {
        Self {
            transport,
            auth,
            policy: RetryPolicy::default(),
            hooks: Arc::new(NoopSessionHooks),
            sleeper: Arc::new(TokioSleeper),
        }
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn SessionHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn BackoffSleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let request = &request;
        execute_with_retry(
            request.operation,
            &self.policy,
            self.hooks.as_ref(),
            |_| self.transport.execute(request, &self.auth),
            |delay| self.sleeper.sleep(delay),
        )
        .await
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("transport", &self.transport)
            .field("auth", &self.auth)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
