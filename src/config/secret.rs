//! Redacting wrapper for credentials.
//!
//! The embedding service token travels through [`Config`](super::Config),
//! which is logged at startup; this wrapper keeps it out of every
//! `Debug`/`Display` rendering.

use std::fmt;

/// A credential whose formatted output is always `<REDACTED>`.
///
/// # Example
///
/// ```
/// use bias_lens::config::SecretString;
///
/// let token = SecretString::new("emb-token-123");
/// assert_eq!(format!("{token:?}"), "<REDACTED>");
/// assert_eq!(token.expose(), "emb-token-123");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    /// Wrap a credential.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw credential, for building request headers only.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Returns true if the credential is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<REDACTED>")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<REDACTED>")
    }
}
