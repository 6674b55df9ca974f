//! Common `mtransport` imports for downstream crates.

pub use crate::{
    ApiError, ApiErrorKind, ApiRequest, AuthContext, BackoffSleeper, FilePart, HttpMethod,
    HttpTransport, NoopSessionHooks, ReqwestTransport, RetryPolicy, Session, SessionHooks,
    TokioSleeper, execute_with_retry,
};
pub use mcommon::{BoxFuture, JsonObject};
