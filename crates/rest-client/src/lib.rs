//! The Payvault request pipeline.
//!
//! Every API operation passes through this crate: request construction,
//! dispatch over HTTP, and response interpretation. The stages are:
//!
//! - **Request building**: `(method, path, data)` becomes a
//!   [`RequestDescriptor`], with query strings for reads and JSON bodies
//!   for mutations.
//! - **Dispatch**: [`RestClient`] performs exactly one HTTP attempt and
//!   reports either a raw response or a [`TransportError`].
//! - **Interpretation**: [`interpret`] classifies the raw result into an
//!   [`ApiOutcome`]: success payload, empty success, structured service
//!   error, malformed response, or transport failure, dropping nothing.
//!
//! Signing lives in the `auth` crate; the endpoint layer appends the
//! signature headers between building and dispatch.
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_client::{build_request, interpret, RequestData, RestClient};
//!
//! let client = RestClient::with_default_timeout("https://api.payvault.io")?;
//! let request = build_request(client.base_url(), Method::GET, "/accounts", &RequestData::new());
//! let outcome = interpret(client.dispatch(request).await);
//! ```

mod client;
mod error;
mod outcome;
mod request;

pub use client::RestClient;
pub use error::{ApiError, TransportError};
pub use outcome::{interpret, ApiOutcome, RawResponse};
pub use request::{build_request, encode_query, RequestData, RequestDescriptor, API_PREFIX};
