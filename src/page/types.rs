//! Page types and the pagination strategy trait

use crate::body::{normalize, Body};
use crate::error::Result;
use crate::http::RawResponse;
use crate::types::JsonValue;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use url::Url;

/// One fetched page of a collection traversal
///
/// Holds the normalized body together with the URL that produced it and the
/// response headers. Constructed once per successful fetch and never
/// mutated afterwards; the body always reflects the server's response.
#[derive(Debug, Clone)]
pub struct PageResult {
    /// Normalized response body
    pub body: Body,
    /// URL the page was requested from
    pub url: Url,
    /// Response headers
    pub headers: HeaderMap,
}

impl PageResult {
    /// Create a page result from an already-normalized body
    pub fn new(body: Body, url: Url, headers: HeaderMap) -> Self {
        Self { body, url, headers }
    }

    /// Build a page result from a raw transport response
    ///
    /// Runs the body normalizer against the response's declared content
    /// type. A parse failure propagates as [`crate::Error::BodyParse`].
    pub fn from_response(response: RawResponse, url: Url) -> Result<Self> {
        let content_type = response
            .headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);

        let body = normalize(response.body, content_type.as_deref())?;

        Ok(Self {
            body,
            url,
            headers: response.headers,
        })
    }

    /// Access the structured body
    pub fn json(&self) -> Result<&JsonValue> {
        self.body.json()
    }
}

/// Contract implemented per pagination strategy
///
/// Emptiness and next-link discovery are deliberately separate questions:
/// a final non-empty page commonly has no next link, while an empty page in
/// the middle of a chain is a hard stop even if a stale next link is still
/// present. The pager checks emptiness first.
pub trait Page {
    /// True iff the page's designated collection key is absent or maps to
    /// a zero-length sequence
    ///
    /// A missing key means empty, never an error. A structurally wrong
    /// key (non-array) is [`crate::Error::Malformed`].
    fn is_empty(&self) -> Result<bool>;

    /// URL of the next page, if the strategy can find one
    ///
    /// `Ok(None)` means the traversal is complete; it is not an error.
    fn next_url(&self) -> Result<Option<Url>>;

    /// The underlying page result
    fn raw(&self) -> &PageResult;
}
