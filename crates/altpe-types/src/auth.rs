//! Token and error payloads.

use crate::value::one_or_many;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of a successful token request.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Bearer token.
    pub token: String,
}

impl fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenResponse")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Body of a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// One or more error strings.
    #[serde(deserialize_with = "one_or_many")]
    pub errors: Vec<String>,
    /// Human-readable summary.
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// `message` if present, else the errors joined with `"; "`.
    #[must_use]
    pub fn summary(&self) -> String {
        match self.message.as_deref().map(str::trim) {
            Some(message) if !message.is_empty() => message.to_string(),
            _ => self.errors.join("; "),
        }
    }
}
