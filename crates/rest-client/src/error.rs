//! Pipeline error types.

use thiserror::Error;

/// Failure to obtain any HTTP response at all.
///
/// DNS, connect, TLS, and timeout failures all land here. An HTTP response
/// with an error status is not a transport failure; it is passed onward
/// for interpretation with its status and body intact.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Request timed out.
    #[error("Request timeout")]
    Timeout,

    /// Connection error (network issue).
    #[error("Connection error: {0}")]
    Connection(String),

    /// Any other failure before a response was obtained.
    #[error("Transport error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connection(err.to_string())
        } else {
            TransportError::Other(err.to_string())
        }
    }
}

/// Errors surfaced by the request pipeline.
///
/// Every error crossing the pipeline boundary is a typed, inspectable
/// value preserving HTTP status and service error name where available.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was obtained.
    #[error("Transport failure: {0}")]
    Transport(#[from] TransportError),

    /// The service answered with a non-2xx status.
    #[error("Service error (status {status}): {message}")]
    Service {
        /// Human-readable message from the error body (or the raw body).
        message: String,
        /// HTTP status code.
        status: u16,
        /// Machine-readable error code, when the service provided one.
        error_name: Option<String>,
    },

    /// The service returned a success status with a body that is not a
    /// JSON object or array.
    #[error("Malformed response (status {status})")]
    Malformed {
        /// HTTP status code.
        status: u16,
        /// Raw body text.
        body: String,
    },

    /// Failed to build the underlying HTTP client.
    #[error("Client build error: {0}")]
    ClientBuild(String),
}

impl ApiError {
    /// Machine-readable error code, when the service provided one.
    ///
    /// Callers branch on this rather than string-matching messages.
    pub fn error_name(&self) -> Option<&str> {
        match self {
            ApiError::Service { error_name, .. } => error_name.as_deref(),
            _ => None,
        }
    }

    /// HTTP status code, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Service { status, .. } | ApiError::Malformed { status, .. } => Some(*status),
            _ => None,
        }
    }
}
