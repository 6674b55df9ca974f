//! Errors raised by the high-level client.
//!
//! Convenience operations never return these; they appear at construction
//! time and on dynamically delegated calls.
//!
//! ```rust
//! use memphora::{MemphoraError, MemphoraErrorKind};
//!
//! let error = MemphoraError::unknown_operation("teleport");
//! assert_eq!(error.kind, MemphoraErrorKind::UnknownOperation);
//! assert_eq!(
//!     error.to_string(),
//!     "'Memphora' object has no attribute 'teleport'"
//! );
//! ```

use mtransport::{ApiError, ApiErrorKind};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemphoraErrorKind {
    Configuration,
    UnknownOperation,
    Api,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct MemphoraError {
    pub kind: MemphoraErrorKind,
    pub message: String,
    #[source]
    pub api: Option<ApiError>,
}

impl MemphoraError {
    pub fn new(kind: MemphoraErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            api: None,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(MemphoraErrorKind::Configuration, message)
    }

    pub fn unknown_operation(name: &str) -> Self {
        Self::new(
            MemphoraErrorKind::UnknownOperation,
            format!("'Memphora' object has no attribute '{name}'"),
        )
    }

    /// Kind of the wrapped service error, if any.
    pub fn api_kind(&self) -> Option<ApiErrorKind> {
        self.api.as_ref().map(|error| error.kind)
    }
}

impl From<ApiError> for MemphoraError {
    fn from(error: ApiError) -> Self {
        Self {
            kind: MemphoraErrorKind::Api,
            message: error.to_string(),
            api: Some(error),
        }
    }
}
