//! HTTP transport layer.

use serde::Deserialize;
use tracing::{debug, trace};

use newswire_core::error::{ApiError, Error, TransportError};
use newswire_core::{ApiUrl, Result};

use crate::request::{Method, Request, Response};

/// Thin reqwest wrapper that turns request descriptors into wire calls
/// and classifies the outcome.
///
/// Success responses pass through with their body; non-2xx responses
/// become [`ApiError`]s; failures with no response at all become
/// [`TransportError`]s.
#[derive(Debug, Clone)]
pub(crate) struct HttpClient {
    client: reqwest::Client,
    base: ApiUrl,
}

impl HttpClient {
    /// Create a new transport for the given API base URL.
    pub(crate) fn new(base: ApiUrl) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("newswire/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self { client, base }
    }

    /// Returns the API base URL this transport is configured for.
    pub(crate) fn base(&self) -> &ApiUrl {
        &self.base
    }

    /// Dispatch a request descriptor and classify the response.
    pub(crate) async fn execute(&self, request: &Request) -> Result<Response> {
        let url = self.base.endpoint_url(&request.path);
        debug!(method = ?request.method, path = %request.path, "dispatching request");

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let response = builder
            .headers(request.headers.clone())
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        trace!(status = %status, "response received");

        if status.is_success() {
            let body = response.bytes().await.map_err(Self::transport_error)?;
            Ok(Response::new(status.as_u16(), body.to_vec()))
        } else {
            Err(Error::Api(Self::parse_error_response(response).await))
        }
    }

    /// Map a reqwest failure onto the transport error taxonomy.
    fn transport_error(err: reqwest::Error) -> Error {
        let err = if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else if err.is_decode() {
            TransportError::Decode {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        };
        err.into()
    }

    /// Parse a non-success response body.
    ///
    /// The service is inconsistent about its error key ("message",
    /// "detail" or "error" depending on the view), so all three are
    /// accepted.
    async fn parse_error_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();

        match response.json::<ErrorBody>().await {
            Ok(body) => ApiError::new(status, body.code, body.message),
            Err(_) => ApiError::new(status, None, None),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default, alias = "detail", alias = "error")]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let base = ApiUrl::new("https://news.example.com/api").unwrap();
        let client = HttpClient::new(base.clone());
        assert_eq!(client.base().as_str(), base.as_str());
    }

    #[test]
    fn error_body_accepts_alternate_keys() {
        let detail: ErrorBody =
            serde_json::from_str(r#"{"detail": "nope", "code": "token_not_valid"}"#).unwrap();
        assert_eq!(detail.message.as_deref(), Some("nope"));
        assert_eq!(detail.code.as_deref(), Some("token_not_valid"));

        let error: ErrorBody = serde_json::from_str(r#"{"error": "gone"}"#).unwrap();
        assert_eq!(error.message.as_deref(), Some("gone"));

        let message: ErrorBody = serde_json::from_str(r#"{"message": "bad request"}"#).unwrap();
        assert_eq!(message.message.as_deref(), Some("bad request"));
    }
}
