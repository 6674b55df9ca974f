//! One-call entry points.

use crate::{Memphora, MemphoraConfig, MemphoraError, Remembered};

/// Builds a client from `config`.
pub fn init(config: MemphoraConfig) -> Result<Memphora, MemphoraError> {
    Memphora::new(config)
}

/// Builds a client and wraps `func` with automatic recall in one step.
///
/// ```rust
/// use memphora::{Invocation, MemphoraConfig, remember};
///
/// let chat = remember(MemphoraConfig::new("user-1"), |invocation: Invocation| async move {
///     invocation.kwarg_str("message").unwrap_or_default().to_uppercase()
/// })
/// .expect("valid config");
///
/// assert_eq!(chat.memory().user_id().as_str(), "user-1");
/// ```
pub fn remember<F>(config: MemphoraConfig, func: F) -> Result<Remembered<F>, MemphoraError> {
    Ok(Memphora::new(config)?.remember(func))
}
