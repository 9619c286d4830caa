//! Error types for DigitalOcean operations.
//!
//! Errors fall into two families: transport failures reported by the HTTP stack, and
//! provider-reported failures synthesized from a response whose `status` is not `"OK"`.
//! Everything else is a local error raised before a request leaves the process.

use serde_json::Value;
use thiserror::Error;

/// Main error type for DigitalOcean operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The API host could not be reached
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The request timed out
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// The API answered with a non-`OK` status.
    ///
    /// The message is taken verbatim from the response's `description` or
    /// `error_message` field and may be empty.
    #[error("{message}")]
    Provider {
        /// Provider supplied message
        message: String,
        /// The decoded response body that carried the failure
        envelope: Value,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid endpoint
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid resource identifier
    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Specialized result type for DigitalOcean operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a provider-reported error from its message and the failing envelope.
    #[must_use]
    pub fn provider(message: impl Into<String>, envelope: Value) -> Self {
        Self::Provider {
            message: message.into(),
            envelope,
        }
    }

    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            Self::Timeout(_) => "TIMEOUT",
            Self::HttpError(_) => "HTTP_ERROR",
            Self::Provider { .. } => "PROVIDER_ERROR",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::InvalidId(_) => "INVALID_ID",
            Self::ValidationError(_) => "VALIDATION_ERROR",
        }
    }

    /// Returns true for failures raised by the HTTP transport.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::ServiceUnavailable(_) | Self::Timeout(_) | Self::HttpError(_)
        )
    }

    /// Returns true when the API itself reported the failure.
    #[must_use]
    pub const fn is_provider(&self) -> bool {
        matches!(self, Self::Provider { .. })
    }

    /// The response body attached to a provider-reported failure.
    #[must_use]
    pub const fn envelope(&self) -> Option<&Value> {
        match self {
            Self::Provider { envelope, .. } => Some(envelope),
            _ => None,
        }
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::ServiceUnavailable(err.to_string())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ValidationError(err.to_string())
    }
}
