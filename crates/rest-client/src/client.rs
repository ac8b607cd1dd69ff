//! Transport dispatch over reqwest.

use crate::error::{ApiError, TransportError};
use crate::outcome::RawResponse;
use crate::request::RequestDescriptor;
use std::time::Duration;

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP dispatcher for built requests.
///
/// One attempt per call, no retries; the only blocking point of the
/// pipeline is the send below. Safe to share across tasks: the underlying
/// client is cheaply cloneable and nothing else is mutable.
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
}

impl RestClient {
    /// Create a new REST client with the given base URL.
    ///
    /// # Arguments
    /// * `base_url` - Base URL for all requests (e.g., "https://api.payvault.io")
    /// * `timeout` - Request timeout duration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a new REST client with the default timeout.
    pub fn with_default_timeout(base_url: &str) -> Result<Self, ApiError> {
        Self::new(base_url, DEFAULT_TIMEOUT)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform the single HTTP attempt for a fully built (and signed) request.
    ///
    /// An HTTP error status is not a failure at this layer; status, headers,
    /// and body pass onward for interpretation. `Err` means no response was
    /// obtained at all.
    pub async fn dispatch(&self, request: RequestDescriptor) -> Result<RawResponse, TransportError> {
        let RequestDescriptor {
            method,
            url,
            headers,
            body,
        } = request;

        tracing::debug!(method = %method, url = %url, "Dispatching request");

        let mut builder = self.client.request(method, url.as_str());

        for (key, value) in &headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(key, value)| {
                (
                    key.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.bytes().await?.to_vec();

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}
