use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::CoreError;

/// `user:password` secret for the node's RPC interface.
///
/// The value is opaque: it is never split or validated beyond being non-empty.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials(String);

impl Credentials {
    /// # Errors
    /// Returns [`CoreError::EmptyCredentials`] if `secret` is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, CoreError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(CoreError::EmptyCredentials);
        }
        Ok(Self(secret))
    }

    /// Value for the `Authorization` header: `Basic <base64(secret)>`.
    #[must_use]
    pub fn basic_auth_header(&self) -> String {
        format!("Basic {}", STANDARD.encode(self.0.as_bytes()))
    }
}

// Never print the secret.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credentials(<redacted>)")
    }
}
