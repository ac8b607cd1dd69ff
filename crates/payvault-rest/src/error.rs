//! Payvault API error types.

use auth::AuthError;
use rest_client::ApiError;
use thiserror::Error;

/// Insufficient funds to cover the requested send plus network fees.
pub const ERR_INSUFFICIENT_FUNDS: &str = "ERR_INSUFFICIENT_FUNDS";
/// Unknown or unsupported asset code.
pub const ERR_INVALID_ASSET: &str = "ERR_INVALID_ASSET";
/// The referenced address does not exist or is archived.
pub const ERR_ADDRESS_NOT_FOUND: &str = "ERR_ADDRESS_NOT_FOUND";
/// The referenced account does not exist.
pub const ERR_ACCOUNT_NOT_FOUND: &str = "ERR_ACCOUNT_NOT_FOUND";
/// A submitted multisig signature failed verification.
pub const ERR_INVALID_SIGNATURE: &str = "ERR_INVALID_SIGNATURE";

/// Errors that can occur when interacting with the Payvault API.
#[derive(Debug, Error)]
pub enum PayvaultError {
    /// Pipeline error: transport failure, service error, or a malformed
    /// response. Service errors keep their HTTP status and error name.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Authentication error.
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// A success response did not decode into the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl PayvaultError {
    /// Machine-readable error code, when the service provided one.
    ///
    /// Callers branch on this (see the error-name constants) instead of
    /// string-matching messages.
    pub fn error_name(&self) -> Option<&str> {
        match self {
            PayvaultError::Api(err) => err.error_name(),
            _ => None,
        }
    }

    /// HTTP status code, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            PayvaultError::Api(err) => err.status(),
            _ => None,
        }
    }

    /// Whether this is the service's insufficient-funds error.
    pub fn is_insufficient_funds(&self) -> bool {
        self.error_name() == Some(ERR_INSUFFICIENT_FUNDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_name_passthrough() {
        let err = PayvaultError::Api(ApiError::Service {
            message: "insufficient funds".into(),
            status: 402,
            error_name: Some(ERR_INSUFFICIENT_FUNDS.into()),
        });

        assert_eq!(err.error_name(), Some(ERR_INSUFFICIENT_FUNDS));
        assert_eq!(err.status(), Some(402));
        assert!(err.is_insufficient_funds());
    }

    #[test]
    fn test_other_errors_have_no_name() {
        let err = PayvaultError::Decode("missing field".into());
        assert_eq!(err.error_name(), None);
        assert_eq!(err.status(), None);
        assert!(!err.is_insufficient_funds());
    }
}
