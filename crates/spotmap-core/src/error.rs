//! Error types for spotmap.
//!
//! Pipeline boundaries downgrade most of these to empty results; they surface
//! directly only from the record source and backend APIs.

use std::fmt;
use thiserror::Error;

/// The unified error type for spotmap operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The API answered with a non-success status or a `success: false` body.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Input validation errors (invalid database id, API URL).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// A response or file body did not have the expected shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Filesystem errors from file-backed sources.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Protocol-level errors from API responses.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// Error message from the server, if the body carried one.
    pub message: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }

    /// Check if the server reported that the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid database id.
    #[error("invalid database id '{value}': {reason}")]
    DatabaseId { value: String, reason: String },

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
    fn protocol_error_display() {
        let err = ProtocolError::new(500, Some("boom".to_string()));
        assert_eq!(err.to_string(), "HTTP 500: boom");
        assert!(!err.is_not_found());

        let err = ProtocolError::new(404, None);
        assert_eq!(err.to_string(), "HTTP 404");
        assert!(err.is_not_found());
    }

    #[test]
    fn wraps_into_unified_error() {
        let err: Error = InvalidInputError::Other {
            message: "nope".to_string(),
        }
        .into();
        assert!(err.to_string().starts_with("invalid input"));
    }
}
