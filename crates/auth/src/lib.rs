//! Authentication and signing for the Payvault API.
//!
//! This crate provides secure credential management and request signing
//! for authenticated calls to the Payvault payment service.
//!
//! # Features
//!
//! - **Secure Credentials**: API secrets are wrapped in `SecretString` to prevent
//!   accidental logging and ensure memory is zeroed on drop.
//! - **HMAC-SHA256 Signing**: Computes the digest the server verifies, over the
//!   method, full URL, timestamp, and body of each request.
//! - **Environment Loading**: Credentials can be loaded from environment variables
//!   or a `.env` file.
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::{ApiCredentials, RequestSigner};
//!
//! // Load credentials from environment
//! let credentials = ApiCredentials::from_env()?;
//!
//! // Create a signer
//! let signer = RequestSigner::new(&credentials);
//!
//! // Sign a request
//! let headers = signer.signature_headers("GET", &url, b"", timestamp_ms);
//! ```

mod credentials;
mod error;
mod signer;

pub use credentials::ApiCredentials;
pub use error::AuthError;
pub use signer::{
    RequestSigner, SIGNATURE_HEADER, TIMESTAMP_HEADER, TOKEN_HEADER,
};
