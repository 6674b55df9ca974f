//! Credential handling for authenticated service calls.

use std::sync::Arc;

#[derive(PartialEq, Eq)]
pub struct SecretString {
    value: String,
}

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn expose(&self) -> &str {
        self.value.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        // SAFETY: zero bytes are valid UTF-8 and the string is never read again.
        unsafe {
            self.value.as_mut_vec().fill(0);
        }
    }
}

/// Authentication state attached to every outgoing request.
///
/// An absent or empty API key produces no `Authorization` header.
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    credential: Option<Arc<SecretString>>,
}

impl AuthContext {
    pub fn new(api_key: Option<String>) -> Self {
        match api_key {
            Some(key) if !key.is_empty() => Self::bearer(key),
            _ => Self::anonymous(),
        }
    }

    pub fn anonymous() -> Self {
        Self { credential: None }
    }

    pub fn bearer(api_key: impl Into<String>) -> Self {
        let secret = SecretString::new(api_key);
        if secret.is_empty() {
            return Self::anonymous();
        }

        Self {
            credential: Some(Arc::new(secret)),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    pub fn bearer_token(&self) -> Option<&str> {
        self.credential.as_deref().map(SecretString::expose)
    }

    pub fn authorization_header(&self) -> Option<String> {
        self.bearer_token().map(|token| format!("Bearer {token}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_string_debug_is_redacted() {
        let secret = SecretString::new("sk-live-123");
        assert_eq!(format!("{secret:?}"), "[REDACTED]");
        assert_eq!(secret.expose(), "sk-live-123");
    }

    #[test]
    fn auth_context_debug_never_leaks_key() {
        let auth = AuthContext::bearer("sk-live-123");
        let rendered = format!("{auth:?}");
        assert!(!rendered.contains("sk-live-123"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn bearer_header_is_built_from_key() {
        let auth = AuthContext::new(Some("abc".to_string()));
        assert!(auth.is_authenticated());
        assert_eq!(auth.authorization_header().as_deref(), Some("Bearer abc"));
    }

    #[test]
    fn missing_or_empty_key_is_anonymous() {
        assert!(!AuthContext::new(None).is_authenticated());
        assert!(!AuthContext::new(Some(String::new())).is_authenticated());
        assert!(!AuthContext::bearer("").is_authenticated());
        assert_eq!(AuthContext::anonymous().authorization_header(), None);
    }
}
