//! Response interpretation.
//!
//! Classifies the raw result of a dispatch into the one outcome type the
//! rest of the library consumes. All classification happens here, once;
//! callers never re-parse error bodies themselves.

use crate::error::{ApiError, TransportError};
use serde::Deserialize;
use serde_json::Value;

/// Raw HTTP response captured by the dispatcher.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers in wire order.
    pub headers: Vec<(String, String)>,
    /// Response body bytes.
    pub body: Vec<u8>,
}

/// Classified outcome of a single API call.
///
/// The single return channel of the pipeline; no variant drops information
/// available on its path.
#[derive(Debug)]
pub enum ApiOutcome {
    /// HTTP 2xx with a JSON object or array body.
    Success(Value),
    /// HTTP 204, no content.
    EmptySuccess,
    /// HTTP non-2xx, with whatever detail the error body carried.
    ServiceError {
        /// Human-readable message (or the raw body when unstructured).
        message: String,
        /// HTTP status code.
        status: u16,
        /// Machine-readable error code, when present.
        error_name: Option<String>,
    },
    /// No HTTP response was obtained at all.
    TransportFailure(TransportError),
    /// HTTP 2xx whose body is not a JSON object or array.
    MalformedResponse {
        /// HTTP status code.
        status: u16,
        /// Raw body text.
        body: String,
    },
}

/// Error payload shape documented by the service.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    #[serde(rename = "errorName")]
    error_name: Option<String>,
    errors: Option<Vec<String>>,
}

/// Classify the raw result of a dispatch.
pub fn interpret(raw: Result<RawResponse, TransportError>) -> ApiOutcome {
    let response = match raw {
        Ok(response) => response,
        Err(cause) => return ApiOutcome::TransportFailure(cause),
    };

    if response.status == 204 {
        return ApiOutcome::EmptySuccess;
    }

    if (200..300).contains(&response.status) {
        return match serde_json::from_slice::<Value>(&response.body) {
            Ok(value) if value.is_object() || value.is_array() => ApiOutcome::Success(value),
            _ => {
                let body = String::from_utf8_lossy(&response.body).into_owned();
                tracing::warn!(
                    status = response.status,
                    body = %body,
                    "Success status with a non-JSON body"
                );
                ApiOutcome::MalformedResponse {
                    status: response.status,
                    body,
                }
            }
        };
    }

    classify_error(response.status, &response.body)
}

/// Classify a non-2xx response body.
///
/// Richest shape first: an `errorName` code, then an `errors` list joined
/// onto the message, then a bare `message`, and finally the raw body text
/// when nothing recognizable parsed.
fn classify_error(status: u16, body: &[u8]) -> ApiOutcome {
    let parsed = serde_json::from_slice::<ErrorBody>(body).unwrap_or_default();

    if let Some(error_name) = parsed.error_name {
        let message = parsed
            .message
            .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned());
        return ApiOutcome::ServiceError {
            message,
            status,
            error_name: Some(error_name),
        };
    }

    if let Some(errors) = parsed.errors {
        let message = parsed.message.unwrap_or_default();
        let mut parts = Vec::with_capacity(errors.len() + 1);
        if !message.is_empty() {
            parts.push(message.clone());
        }
        for entry in errors {
            if entry != message {
                parts.push(entry);
            }
        }
        return ApiOutcome::ServiceError {
            message: parts.join(" "),
            status,
            error_name: None,
        };
    }

    if let Some(message) = parsed.message {
        return ApiOutcome::ServiceError {
            message,
            status,
            error_name: None,
        };
    }

    ApiOutcome::ServiceError {
        message: String::from_utf8_lossy(body).into_owned(),
        status,
        error_name: None,
    }
}

impl ApiOutcome {
    /// Convert into a `Result`, preserving every variant's detail.
    ///
    /// `Ok(Some(value))` for a JSON success, `Ok(None)` for a 204.
    pub fn into_result(self) -> Result<Option<Value>, ApiError> {
        match self {
            ApiOutcome::Success(value) => Ok(Some(value)),
            ApiOutcome::EmptySuccess => Ok(None),
            ApiOutcome::ServiceError {
                message,
                status,
                error_name,
            } => Err(ApiError::Service {
                message,
                status,
                error_name,
            }),
            ApiOutcome::TransportFailure(cause) => Err(ApiError::Transport(cause)),
            ApiOutcome::MalformedResponse { status, body } => {
                Err(ApiError::Malformed { status, body })
            }
        }
    }
}
