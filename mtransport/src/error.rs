//! Shared API error kinds and error value helpers.
//!
//! ```rust
//! use mtransport::{ApiError, ApiErrorKind};
//!
//! let missing = ApiError::from_status(404, "memory not found");
//! assert_eq!(missing.kind, ApiErrorKind::NotFound);
//! assert!(!missing.retryable);
//!
//! let busy = ApiError::from_status(503, "try again");
//! assert!(busy.retryable);
//! ```

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    Transport,
    Timeout,
    RateLimited,
    Server,
    Authentication,
    NotFound,
    Client,
    Protocol,
    InvalidRequest,
}

/// Statuses the remote service treats as transient.
pub const TRANSIENT_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind:?}: {message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
    pub status: Option<u16>,
    pub retryable: bool,
    pub retry_after: Option<Duration>,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>, retryable: bool) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            retryable,
            retry_after: None,
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Transport, message, true)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Timeout, message, true)
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Protocol, message, false)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::InvalidRequest, message, false)
    }

    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let kind = match status {
            401 | 403 => ApiErrorKind::Authentication,
            404 => ApiErrorKind::NotFound,
            429 => ApiErrorKind::RateLimited,
            500..=599 => ApiErrorKind::Server,
            _ => ApiErrorKind::Client,
        };

        Self {
            kind,
            message: message.into(),
            status: Some(status),
            retryable: TRANSIENT_STATUSES.contains(&status),
            retry_after: None,
        }
    }

    pub fn with_retry_after(mut self, retry_after: Duration) -> Self {
        self.retry_after = Some(retry_after);
        self
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ApiErrorKind::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification_matches_taxonomy() {
        assert_eq!(ApiError::from_status(401, "x").kind, ApiErrorKind::Authentication);
        assert_eq!(ApiError::from_status(403, "x").kind, ApiErrorKind::Authentication);
        assert_eq!(ApiError::from_status(404, "x").kind, ApiErrorKind::NotFound);
        assert_eq!(ApiError::from_status(422, "x").kind, ApiErrorKind::Client);
        assert_eq!(ApiError::from_status(429, "x").kind, ApiErrorKind::RateLimited);
        assert_eq!(ApiError::from_status(501, "x").kind, ApiErrorKind::Server);
    }

    #[test]
    fn only_transient_statuses_are_retryable() {
        for status in TRANSIENT_STATUSES {
            assert!(ApiError::from_status(status, "x").retryable, "{status}");
        }

        for status in [400, 401, 404, 408, 422, 501, 505] {
            assert!(!ApiError::from_status(status, "x").retryable, "{status}");
        }
    }

    #[test]
    fn helper_builders_assign_expected_retryability() {
        assert!(ApiError::transport("refused").retryable);
        assert!(ApiError::timeout("slow").retryable);
        assert!(!ApiError::protocol("bad json").retryable);
        assert!(!ApiError::invalid_request("missing").retryable);
        assert_eq!(ApiError::transport("refused").status, None);
    }

    #[test]
    fn display_includes_kind_and_message() {
        let error = ApiError::from_status(404, "memory m1 not found");
        assert_eq!(error.to_string(), "NotFound: memory m1 not found");
    }
}
