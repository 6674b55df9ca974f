//! HTTP transport trait and reqwest-based implementation.

use std::time::Duration;

use mcommon::BoxFuture;
use reqwest::header::RETRY_AFTER;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde_json::Value;

use crate::{ApiError, ApiRequest, AuthContext, HttpMethod};

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

/// Per-attempt deadline applied by [`ReqwestTransport::with_timeout`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Performs exactly one request attempt. Retrying is the session's job.
pub trait HttpTransport: Send + Sync + std::fmt::Debug {
    fn execute<'a>(
        &'a self,
        request: &'a ApiRequest,
        auth: &'a AuthContext,
    ) -> BoxFuture<'a, Result<Value, ApiError>>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ApiError::transport(err.to_string()))?;
        Ok(Self::new(client))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn build(&self, request: &ApiRequest, auth: &AuthContext) -> reqwest::RequestBuilder {
        let url = self.endpoint(&request.path);
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
            HttpMethod::Put => self.client.put(url),
            HttpMethod::Delete => self.client.delete(url),
        };

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(token) = auth.bearer_token() {
            builder = builder.bearer_auth(token);
        }

        // Multipart bodies are single-use, so the form is rebuilt per attempt.
        if let Some(file) = &request.file {
            let part = Part::bytes(file.bytes.clone()).file_name(file.filename.clone());
            builder = builder.multipart(Form::new().part(file.field.clone(), part));
        } else if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        builder
    }

    async fn parse_error(response: Response) -> ApiError {
        let status = response.status();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_retry_after);
        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body)
            .unwrap_or_else(|| format!("request failed with status {status}"));

        let error = ApiError::from_status(status.as_u16(), message);
        match retry_after {
            Some(delay) => error.with_retry_after(delay),
            None => error,
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new(Client::new())
    }
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        request: &'a ApiRequest,
        auth: &'a AuthContext,
    ) -> BoxFuture<'a, Result<Value, ApiError>> {
        Box::pin(async move {
            let response = self.build(request, auth).send().await.map_err(|err| {
                if err.is_timeout() {
                    ApiError::timeout(err.to_string())
                } else {
                    ApiError::transport(err.to_string())
                }
            })?;

            if !response.status().is_success() {
                return Err(Self::parse_error(response).await);
            }

            if !request.read_body {
                return Ok(Value::Null);
            }

            let body = response.text().await.map_err(|err| {
                if err.is_timeout() {
                    ApiError::timeout(err.to_string())
                } else {
                    ApiError::transport(err.to_string())
                }
            })?;

            parse_body(&body)
        })
    }
}

/// Empty success bodies decode to `null`.
pub fn parse_body(body: &str) -> Result<Value, ApiError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(body)
        .map_err(|err| ApiError::protocol(format!("response body is not valid JSON: {err}")))
}

pub fn extract_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["detail", "message", "error"]
        .iter()
        .find_map(|key| match value.get(*key)? {
            Value::String(text) => Some(text.clone()),
            Value::Object(inner) => inner
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
            Value::Null => None,
            other => Some(other.to_string()),
        })
}

/// Only the delta-seconds form is honored.
pub fn parse_retry_after(value: &str) -> Option<Duration> {
    value.trim().parse::<u64>().ok().map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::ApiErrorKind;

    #[test]
    fn endpoint_joins_without_double_slashes() {
        let transport = ReqwestTransport::default().with_base_url("https://api.example.com/v1/");
        assert_eq!(
            transport.endpoint("/memories/m1"),
            "https://api.example.com/v1/memories/m1"
        );
        assert_eq!(ReqwestTransport::default().base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn empty_body_is_null_and_garbage_is_protocol_error() {
        assert_eq!(parse_body("").expect("empty body"), Value::Null);
        assert_eq!(parse_body("  \n").expect("blank body"), Value::Null);
        assert_eq!(parse_body("{\"id\":\"m1\"}").expect("object"), json!({"id": "m1"}));

        let error = parse_body("<html>").expect_err("html is not json");
        assert_eq!(error.kind, ApiErrorKind::Protocol);
        assert!(!error.retryable);
    }

    #[test]
    fn error_message_prefers_detail_then_message() {
        assert_eq!(
            extract_error_message(r#"{"detail":"Memory not found"}"#).as_deref(),
            Some("Memory not found")
        );
        assert_eq!(
            extract_error_message(r#"{"error":{"message":"bad key"}}"#).as_deref(),
            Some("bad key")
        );
        assert_eq!(extract_error_message("not json"), None);
    }

    #[test]
    fn retry_after_parses_seconds() {
        assert_eq!(parse_retry_after(" 12 "), Some(Duration::from_secs(12)));
        assert_eq!(parse_retry_after("Wed, 21 Oct 2015 07:28:00 GMT"), None);
    }
}
