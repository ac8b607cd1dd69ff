//! Request construction.
//!
//! Turns a `(method, path, data)` triple into a concrete request: target
//! URL, headers, and a body representation appropriate to the verb.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Method;
use serde_json::Value;

/// Ordered key-value mapping supplied with a request.
///
/// Insertion order is preserved through JSON serialization, so the body
/// bytes the signer sees are exactly the bytes that go on the wire.
pub type RequestData = serde_json::Map<String, Value>;

/// Version prefix prepended to every endpoint path.
pub const API_PREFIX: &str = "/api/v1";

/// Characters escaped in query components: everything outside the RFC 3986
/// unreserved set.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// A fully built request, ready for signing and dispatch.
///
/// Constructed fresh per call and consumed once by the dispatcher; nothing
/// is shared across calls.
#[derive(Debug)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    /// Headers in the order they will be sent.
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

/// Build a request for an endpoint path.
///
/// - `GET` with data: the mapping is serialized as an RFC 3986
///   percent-encoded query string; array values are comma-joined.
/// - `POST`/`PATCH` with data: the mapping becomes a JSON body with
///   `Content-Type: application/json`.
/// - Any other verb, or empty data on mutating verbs: no query, no body.
pub fn build_request(
    base_url: &str,
    method: Method,
    path: &str,
    data: &RequestData,
) -> RequestDescriptor {
    let mut url = format!("{}{}{}", base_url.trim_end_matches('/'), API_PREFIX, path);
    let mut headers = Vec::new();
    let mut body = None;

    if !data.is_empty() {
        if method == Method::GET {
            url.push('?');
            url.push_str(&encode_query(data));
        } else if method == Method::POST || method == Method::PATCH {
            headers.push((
                "Content-Type".to_string(),
                "application/json".to_string(),
            ));
            body = Some(
                serde_json::to_vec(data).expect("JSON object serialization cannot fail"),
            );
        }
    }

    RequestDescriptor {
        method,
        url,
        headers,
        body,
    }
}

/// Serialize a data mapping as a query string.
///
/// Pairs are `&`-joined in insertion order; keys and values are strictly
/// percent-encoded, so a comma used to join an array value is itself
/// escaped and decoding recovers the original pairs.
pub fn encode_query(data: &RequestData) -> String {
    data.iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                encode_component(key),
                encode_component(&query_text(value))
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn encode_component(component: &str) -> String {
    utf8_percent_encode(component, QUERY_COMPONENT).to_string()
}

/// Text form of a query value; arrays are comma-joined.
fn query_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(query_text)
            .collect::<Vec<_>>()
            .join(","),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
