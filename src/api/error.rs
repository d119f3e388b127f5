//! ShipStation API client error types.

use serde_json::Value;
use thiserror::Error;

/// Result type for ShipStation API calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by the ShipStation API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with a non-2xx status.
    ///
    /// The message carries the status and the response body serialized as JSON.
    #[error("ShipStation API Error ({status}): {body}")]
    Remote { status: u16, body: Value },

    /// The request never reached the API (DNS, connection, transport timeout).
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The configured base URL and path do not form a valid URL.
    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl ApiError {
    /// Create a remote error from a status code and decoded body.
    pub fn remote(status: u16, body: Value) -> Self {
        Self::Remote { status, body }
    }

    /// Create an invalid URL error.
    pub fn invalid_url(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// HTTP status of a remote error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}
