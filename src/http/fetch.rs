//! The transport boundary consumed by the pagination core

use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::Method;
use url::Url;

/// A raw transport response: status, headers, body bytes
///
/// The body stream has been consumed exactly once; normalization happens
/// downstream based on the declared content type.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body bytes
    pub body: Bytes,
}

/// Issues a single HTTP request and returns the raw response
///
/// The core only needs GET for pagination; result-producing operations use
/// other methods through the same boundary. A status outside `ok_codes` is
/// a transport failure ([`crate::Error::HttpStatus`]), never a decode
/// concern. Any deadline or retry policy belongs behind this trait.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Perform one request against `url`
    async fn fetch(
        &self,
        method: Method,
        url: &Url,
        headers: &HeaderMap,
        ok_codes: &[u16],
    ) -> Result<RawResponse>;
}
