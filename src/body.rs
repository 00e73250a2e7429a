//! Body normalization
//!
//! Turns raw response bytes into a dynamically-typed JSON tree when the
//! content type declares structured data, and passes everything else
//! through untouched. Normalization happens exactly once per response.

use crate::error::{Error, Result};
use crate::types::JsonValue;
use bytes::Bytes;

/// Media type prefix that triggers structured parsing
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// A normalized response body
///
/// `Parsed` holds the JSON tree for structured responses. `Raw` holds the
/// untouched bytes for everything else; some endpoints intentionally return
/// opaque bodies, so a raw body is not an error by itself. Consumers that
/// need structure fail with a shape mismatch when they reach for it.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Structured body parsed from JSON
    Parsed(JsonValue),
    /// Opaque body kept as-is
    Raw(Bytes),
}

impl Body {
    /// Access the parsed JSON tree
    ///
    /// Returns [`Error::Malformed`] for raw bodies.
    pub fn json(&self) -> Result<&JsonValue> {
        match self {
            Body::Parsed(value) => Ok(value),
            Body::Raw(bytes) => Err(Error::malformed(format!(
                "expected a structured body, got {} opaque bytes",
                bytes.len()
            ))),
        }
    }

    /// Check whether the body was structurally parsed
    pub fn is_parsed(&self) -> bool {
        matches!(self, Body::Parsed(_))
    }
}

/// Normalize raw response bytes based on the declared content type
///
/// Parses as JSON when `content_type` begins with `application/json`;
/// a parse failure surfaces as [`Error::BodyParse`] carrying the original
/// byte length and the parser detail. Any other content type passes the
/// bytes through unparsed.
pub fn normalize(bytes: Bytes, content_type: Option<&str>) -> Result<Body> {
    let is_json = content_type.is_some_and(|ct| ct.starts_with(JSON_MEDIA_TYPE));

    if !is_json {
        return Ok(Body::Raw(bytes));
    }

    let value: JsonValue =
        serde_json::from_slice(&bytes).map_err(|e| Error::body_parse(bytes.len(), e.to_string()))?;

    Ok(Body::Parsed(value))
}
