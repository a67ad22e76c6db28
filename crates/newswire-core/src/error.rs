//! Error types for the newswire client.
//!
//! This module provides a unified error type with explicit variants for
//! transport, authentication, API, and input validation errors.

use std::fmt;
use thiserror::Error;

/// The unified error type for newswire operations.
///
/// This error type covers all possible failure modes in the client,
/// with explicit variants to allow callers to handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication errors (missing session, unusable refresh token).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// API errors (non-success HTTP responses).
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Input validation errors (invalid base URL or parameters).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
///
/// These indicate that no structured HTTP response was received. The
/// request pipeline passes them through untouched.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Response body could not be decoded.
    #[error("failed to decode response body: {message}")]
    Decode { message: String },

    /// Generic HTTP transport error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No session is available; the caller must log in first.
    #[error("not authenticated")]
    NotAuthenticated,

    /// No refresh token is stored, so an expired session cannot be
    /// recovered.
    #[error("refresh token missing")]
    RefreshTokenMissing,
}

/// A non-success HTTP response from the API.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Machine-readable error code (if the server provided one).
    pub code: Option<String>,
    /// Error message from the server.
    pub message: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref code) = self.code {
            write!(f, " [{}]", code)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, code: Option<String>, message: Option<String>) -> Self {
        Self {
            status,
            code,
            message,
        }
    }

    /// Check if this response signals an expired or invalid access token.
    ///
    /// Only a 401 counts; any other status passes through the pipeline
    /// without triggering a token refresh.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_status_code_and_message() {
        let err = ApiError::new(
            401,
            Some("token_not_valid".to_string()),
            Some("Token is invalid or expired".to_string()),
        );
        let text = err.to_string();
        assert!(text.contains("401"));
        assert!(text.contains("token_not_valid"));
        assert!(text.contains("Token is invalid or expired"));
    }

    #[test]
    fn only_401_is_an_auth_error() {
        assert!(ApiError::new(401, None, None).is_auth_error());
        assert!(!ApiError::new(403, None, None).is_auth_error());
        assert!(!ApiError::new(500, None, None).is_auth_error());
    }
}
