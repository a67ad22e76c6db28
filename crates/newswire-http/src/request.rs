//! Request and response values carried through the pipeline.

use std::fmt;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::warn;

use newswire_core::error::TransportError;
use newswire_core::Result;

/// HTTP method of a request descriptor.
///
/// The API surface only uses GET and POST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// An outbound request descriptor.
///
/// The descriptor is an owned value: each pipeline stage receives it,
/// may rewrite its headers, and hands it on. The `retried` flag lives
/// for the duration of one logical request and caps token recovery at
/// a single retry.
pub struct Request {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) body: Option<serde_json::Value>,
    pub(crate) headers: HeaderMap,
    retried: bool,
}

impl Request {
    /// Create a GET request for an API-relative path.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    /// Create a POST request for an API-relative path.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            headers: HeaderMap::new(),
            retried: false,
        }
    }

    /// Attach a JSON body.
    pub fn with_json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Append a query parameter.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Returns the API-relative path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the HTTP method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Set the bearer Authorization header.
    ///
    /// Never fails: a token that cannot be encoded as a header value is
    /// logged and skipped, leaving the request without the header.
    pub(crate) fn set_bearer(&mut self, token: &str) {
        match HeaderValue::from_str(&format!("Bearer {}", token)) {
            Ok(value) => {
                self.headers.insert(AUTHORIZATION, value);
            }
            Err(_) => {
                warn!("stored access token is not a valid header value, sending without it");
            }
        }
    }

    pub(crate) fn retried(&self) -> bool {
        self.retried
    }

    pub(crate) fn mark_retried(&mut self) {
        self.retried = true;
    }
}

// Hide the Authorization header value in Debug output
impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<&str> = self.headers.keys().map(|k| k.as_str()).collect();
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("query", &self.query)
            .field("headers", &headers)
            .field("retried", &self.retried)
            .finish()
    }
}

/// A successful response from the API.
///
/// Non-2xx statuses never reach this type; they surface as
/// [`newswire_core::ApiError`] values instead.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    body: Vec<u8>,
}

impl Response {
    pub(crate) fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Returns the HTTP status code (always 2xx).
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns the raw response body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Deserialize the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|e| {
            TransportError::Decode {
                message: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_omits_header_values() {
        let mut request = Request::get("articles/");
        request.set_bearer("top-secret-token");
        let debug = format!("{:?}", request);
        assert!(!debug.contains("top-secret-token"));
        assert!(debug.contains("authorization"));
    }

    #[test]
    fn unencodable_token_is_skipped() {
        let mut request = Request::get("articles/");
        request.set_bearer("bad\ntoken");
        assert!(!request.headers.contains_key(AUTHORIZATION));
    }

    #[test]
    fn response_json_decodes_body() {
        let response = Response::new(200, br#"{"access": "tok"}"#.to_vec());
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["access"], "tok");
    }

    #[test]
    fn response_json_reports_decode_failure() {
        let response = Response::new(200, b"not json".to_vec());
        let result: Result<serde_json::Value> = response.json();
        assert!(result.is_err());
    }
}
