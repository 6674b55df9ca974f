//! Construction-time settings for [`Memphora`](crate::Memphora).
//!
//! ```rust
//! use std::time::Duration;
//!
//! use memphora::MemphoraConfig;
//!
//! let config = MemphoraConfig::new("user-1")
//!     .with_api_key("sk-test")
//!     .with_max_tokens(250)
//!     .with_timeout(Duration::from_secs(10));
//!
//! assert_eq!(config.api_url, memphora::DEFAULT_API_URL);
//! assert!(config.auto_compress);
//! assert_eq!(config.max_tokens, 250);
//! ```

use std::sync::Arc;
use std::time::Duration;

use mcommon::UserId;
use mtransport::{BackoffSleeper, DEFAULT_TIMEOUT, RetryPolicy, SessionHooks};

use crate::MemphoraError;

pub const DEFAULT_API_URL: &str = "https://api.memphora.ai/api/v1";
pub const DEFAULT_MAX_TOKENS: usize = 500;

pub const API_KEY_ENV: &str = "MEMPHORA_API_KEY";
pub const API_URL_ENV: &str = "MEMPHORA_API_URL";

#[derive(Clone)]
pub struct MemphoraConfig {
    pub user_id: UserId,
    pub api_key: Option<String>,
    pub api_url: String,
    pub auto_compress: bool,
    pub max_tokens: usize,
    /// Applied to each attempt, not to the whole retry sequence.
    pub timeout: Duration,
    pub retry_policy: RetryPolicy,
    pub hooks: Option<Arc<dyn SessionHooks>>,
    pub sleeper: Option<Arc<dyn BackoffSleeper>>,
}

impl std::fmt::Debug for MemphoraConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemphoraConfig")
            .field("user_id", &self.user_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .field("auto_compress", &self.auto_compress)
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .field("retry_policy", &self.retry_policy)
            .field("custom_hooks", &self.hooks.is_some())
            .finish()
    }
}

impl MemphoraConfig {
    pub fn new(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: user_id.into(),
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            auto_compress: true,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: DEFAULT_TIMEOUT,
            retry_policy: RetryPolicy::default(),
            hooks: None,
            sleeper: None,
        }
    }

    /// Reads the credential from `MEMPHORA_API_KEY` and the endpoint from
    /// `MEMPHORA_API_URL`; unset or blank variables keep the defaults.
    pub fn from_env(user_id: impl Into<UserId>) -> Self {
        let mut config = Self::new(user_id);
        if let Some(api_key) = non_blank_env(API_KEY_ENV) {
            config.api_key = Some(api_key);
        }
        if let Some(api_url) = non_blank_env(API_URL_ENV) {
            config.api_url = api_url;
        }
        config
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_auto_compress(mut self, auto_compress: bool) -> Self {
        self.auto_compress = auto_compress;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    /// Replaces the default tracing hooks on the session.
    pub fn with_hooks(mut self, hooks: Arc<dyn SessionHooks>) -> Self {
        self.hooks = Some(hooks);
        self
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn BackoffSleeper>) -> Self {
        self.sleeper = Some(sleeper);
        self
    }

    pub fn validate(&self) -> Result<(), MemphoraError> {
        if self.user_id.is_blank() {
            return Err(MemphoraError::configuration("user id must not be empty"));
        }
        if self.api_url.trim().is_empty() {
            return Err(MemphoraError::configuration("api url must not be empty"));
        }
        if self.timeout.is_zero() {
            return Err(MemphoraError::configuration("timeout must be positive"));
        }
        Ok(())
    }
}

fn non_blank_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemphoraErrorKind;

    #[test]
    fn defaults_match_hosted_service() {
        let config = MemphoraConfig::new("user-1");
        assert_eq!(config.api_url, "https://api.memphora.ai/api/v1");
        assert_eq!(config.api_key, None);
        assert!(config.auto_compress);
        assert_eq!(config.max_tokens, 500);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.retry_policy, RetryPolicy::default());
    }

    #[test]
    fn blank_user_id_is_rejected() {
        let error = MemphoraConfig::new("  ")
            .validate()
            .expect_err("blank user id");
        assert_eq!(error.kind, MemphoraErrorKind::Configuration);
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let config = MemphoraConfig::new("user-1").with_api_key("sk-secret");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
