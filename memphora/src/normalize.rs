//! Best-effort adapter used by every convenience operation.

use std::future::Future;

use mtransport::ApiError;

/// Awaits `call` and collapses a failure into `T::default()` after logging it.
///
/// ```rust
/// use memphora::best_effort;
/// use mtransport::ApiError;
///
/// # async fn demo() {
/// let hits: Vec<serde_json::Value> =
///     best_effort("search", async { Err(ApiError::timeout("slow")) }).await;
/// assert!(hits.is_empty());
/// # }
/// ```
pub async fn best_effort<T, Fut>(operation: &str, call: Fut) -> T
where
    T: Default,
    Fut: Future<Output = Result<T, ApiError>>,
{
    match call.await {
        Ok(value) => value,
        Err(error) => {
            log_failure(operation, &error);
            T::default()
        }
    }
}

pub(crate) fn log_failure(operation: &str, error: &ApiError) {
    tracing::error!(
        phase = "convenience",
        operation,
        status = error.status,
        error_kind = ?error.kind,
        error = %error,
        "operation failed"
    );
}

#[cfg(test)]
mod tests {
    use mcommon::JsonObject;
    use serde_json::{Value, json};

    use super::*;

    #[tokio::test]
    async fn success_passes_through() {
        let value: Vec<Value> = best_effort("search", async { Ok(vec![json!(1)]) }).await;
        assert_eq!(value, vec![json!(1)]);
    }

    #[tokio::test]
    async fn failures_become_type_defaults() {
        let object: JsonObject =
            best_effort("get_memory", async { Err(ApiError::from_status(500, "boom")) }).await;
        let flag: bool =
            best_effort("delete_memory", async { Err(ApiError::transport("down")) }).await;
        let text: String =
            best_effort("context", async { Err(ApiError::protocol("bad body")) }).await;
        best_effort::<(), _>("store_conversation", async { Err(ApiError::timeout("slow")) })
            .await;

        assert!(object.is_empty());
        assert!(!flag);
        assert!(text.is_empty());
    }
}
