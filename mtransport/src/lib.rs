//! Authenticated, retrying HTTP session for the memphora memory service.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use mtransport::{AuthContext, ReqwestTransport, RetryPolicy, Session};
//!
//! let transport = ReqwestTransport::default().with_base_url("https://api.memphora.ai/api/v1");
//! let session = Session::new(Arc::new(transport), AuthContext::bearer("sk-test"))
//!     .with_retry_policy(RetryPolicy::default());
//!
//! assert!(session.auth().is_authenticated());
//! assert_eq!(session.retry_policy().max_attempts(), 4);
//! ```

mod auth;
mod error;
mod request;
mod resilience;
mod session;
mod transport;

pub mod prelude;

pub use auth::{AuthContext, SecretString};
pub use error::{ApiError, ApiErrorKind, TRANSIENT_STATUSES};
pub use request::{ApiRequest, FilePart, HttpMethod};
pub use resilience::{
    BackoffSleeper, NoopSessionHooks, RetryPolicy, SessionHooks, TokioSleeper, execute_with_retry,
};
pub use session::Session;
pub use transport::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT, HttpTransport, ReqwestTransport, extract_error_message,
    parse_body, parse_retry_after,
};
