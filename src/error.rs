//! Error types for pagewalk
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for pagewalk
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Max retries ({max_retries}) exceeded")]
    MaxRetriesExceeded { max_retries: u32 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("Failed to parse response body ({length} bytes): {message}")]
    BodyParse { length: usize, message: String },

    #[error("Malformed response body: {message}")]
    Malformed { message: String },

    #[error("Resource not found under key '{key}'")]
    NotFound { key: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a body parse error
    pub fn body_parse(length: usize, message: impl Into<String>) -> Self {
        Self::BodyParse {
            length,
            message: message.into(),
        }
    }

    /// Create a malformed body error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Create a not-found error for a wrapper key
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// Check if this error is the absence of a required singular key
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Check if this error is a shape mismatch
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::Malformed { .. } | Error::BodyParse { .. })
    }

    /// Check if this error originated in the transport layer
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Http(_)
                | Error::HttpStatus { .. }
                | Error::Timeout { .. }
                | Error::MaxRetriesExceeded { .. }
        )
    }
}

/// Result type alias for pagewalk
pub type Result<T> = std::result::Result<T, Error>;
