//! Error types for the Alternatives.PE client.

use altpe_types::ErrorResponse;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when using the Alternatives.PE API.
#[derive(Debug, Error)]
pub enum AltPeError {
    /// Client id or secret not supplied.
    #[error(
        "client_id and client_secret must be provided \
         (set ALTERNATIVES_PE_CLIENT_ID and ALTERNATIVES_PE_CLIENT_SECRET)"
    )]
    MissingCredentials,

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Credentials rejected, or a request was unauthorized.
    #[error("{message}")]
    Authentication {
        /// Description from the server.
        message: String,
        /// HTTP status, when one was received.
        status: Option<u16>,
    },

    /// Resource not found.
    #[error("Not found: {message}")]
    NotFound {
        /// Description from the server.
        message: String,
    },

    /// Request parameters rejected.
    #[error("Validation failed: {message}")]
    Validation {
        /// Description from the server.
        message: String,
        /// Individual errors reported by the server.
        errors: Vec<String>,
    },

    /// Rate limit exceeded and retries exhausted.
    #[error("Rate limit exceeded: {message}")]
    RateLimited {
        /// Description from the server.
        message: String,
        /// Server-requested wait, if any.
        retry_after: Option<Duration>,
    },

    /// Server-side failure and retries exhausted.
    #[error("Server error (HTTP {status}): {message}")]
    Server {
        /// Description from the server.
        message: String,
        /// HTTP status.
        status: u16,
    },

    /// Any other non-success status.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// Description from the server.
        message: String,
        /// HTTP status.
        status: u16,
    },

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body did not match the expected model.
    #[error("Failed to parse response from {context}: {source}")]
    Decode {
        /// Endpoint path the body came from.
        context: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AltPeError {
    /// HTTP status associated with this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication { status, .. } => *status,
            Self::NotFound { .. } => Some(404),
            Self::Validation { .. } => Some(422),
            Self::RateLimited { .. } => Some(429),
            Self::Server { status, .. } | Self::Api { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether repeating the same request may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimited { .. } => true,
            Self::Server { status, .. } => matches!(status, 500 | 502 | 503 | 504),
            Self::Request(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    /// Build the error for a non-success response.
    pub(crate) fn from_response(
        status: StatusCode,
        body: &str,
        retry_after: Option<Duration>,
    ) -> Self {
        let parsed = serde_json::from_str::<ErrorResponse>(body).ok();
        let message = parsed
            .as_ref()
            .map(ErrorResponse::summary)
            .filter(|m| !m.is_empty())
            .or_else(|| {
                let text = body.trim();
                (!text.is_empty()).then(|| text.to_string())
            })
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));

        match status.as_u16() {
            401 => Self::Authentication {
                message,
                status: Some(401),
            },
            404 => Self::NotFound { message },
            422 => Self::Validation {
                message,
                errors: parsed.map(|p| p.errors).unwrap_or_default(),
            },
            429 => Self::RateLimited {
                message,
                retry_after,
            },
            code if code >= 500 => Self::Server {
                message,
                status: code,
            },
            code => Self::Api {
                message,
                status: code,
            },
        }
    }
}
