//! Result wrappers for non-paginated operations
//!
//! A create/get/update call yields a [`DataResult`]: either a normalized
//! body to decode or the transport failure that prevented one. A delete
//! yields a [`VoidResult`]: failure-only, with no body to read. The failure
//! is trapped inside the envelope so callers decide when to surface it;
//! decoding a failed result propagates the stored failure unchanged.

use crate::body::{normalize, Body};
use crate::error::{Error, Result};
use crate::extract::{extract_one, Record, Resource};
use crate::http::{Fetch, RawResponse};
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::Method;
use url::Url;

// ============================================================================
// DataResult
// ============================================================================

/// Outcome of an operation expected to return a decodable resource
#[derive(Debug)]
pub struct DataResult {
    body: Option<Body>,
    headers: HeaderMap,
    err: Option<Error>,
}

impl DataResult {
    /// Build a result from a successful transport response
    ///
    /// A normalization failure is stored in the envelope, not returned.
    pub fn from_response(response: RawResponse) -> Self {
        let content_type = response
            .headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);

        match normalize(response.body, content_type.as_deref()) {
            Ok(body) => Self {
                body: Some(body),
                headers: response.headers,
                err: None,
            },
            Err(err) => Self {
                body: None,
                headers: response.headers,
                err: Some(err),
            },
        }
    }

    /// Build a result carrying a failure
    pub fn from_error(err: Error) -> Self {
        Self {
            body: None,
            headers: HeaderMap::new(),
            err: Some(err),
        }
    }

    /// Perform one request and trap its outcome in the envelope
    pub async fn fetch(
        fetcher: &dyn Fetch,
        method: Method,
        url: &Url,
        headers: &HeaderMap,
        ok_codes: &[u16],
    ) -> Self {
        match fetcher.fetch(method, url, headers, ok_codes).await {
            Ok(response) => Self::from_response(response),
            Err(err) => Self::from_error(err),
        }
    }

    /// The stored failure, if any
    pub fn err(&self) -> Option<&Error> {
        self.err.as_ref()
    }

    /// Response headers (empty when the fetch itself failed)
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The normalized body, if the operation produced one
    pub fn raw_body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    /// Decode the wrapped body into a record under `key`
    ///
    /// A stored failure propagates unchanged without touching the body.
    pub fn decode<R: Record>(self, key: &str) -> Result<R> {
        if let Some(err) = self.err {
            return Err(err);
        }

        let body = self
            .body
            .ok_or_else(|| Error::malformed("result has no body to decode"))?;

        extract_one(body.json()?, key)
    }

    /// Decode using the resource's declared singular key
    pub fn decode_resource<R: Resource>(self) -> Result<R> {
        self.decode(R::SINGULAR)
    }
}

// ============================================================================
// VoidResult
// ============================================================================

/// Outcome of an operation that returns nothing on success (deletion)
///
/// Exposes only the failure; there is deliberately no decode surface.
#[derive(Debug)]
pub struct VoidResult {
    err: Option<Error>,
}

impl VoidResult {
    /// A successful void outcome
    pub fn success() -> Self {
        Self { err: None }
    }

    /// A failed void outcome
    pub fn from_error(err: Error) -> Self {
        Self { err: Some(err) }
    }

    /// Perform one request, keeping only its failure
    pub async fn fetch(
        fetcher: &dyn Fetch,
        method: Method,
        url: &Url,
        headers: &HeaderMap,
        ok_codes: &[u16],
    ) -> Self {
        match fetcher.fetch(method, url, headers, ok_codes).await {
            Ok(_) => Self::success(),
            Err(err) => Self::from_error(err),
        }
    }

    /// The stored failure, if any
    pub fn err(&self) -> Option<&Error> {
        self.err.as_ref()
    }

    /// Consume the result, yielding `Ok(())` or the stored failure
    pub fn ok(self) -> Result<()> {
        match self.err {
            None => Ok(()),
            Some(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{FieldKind, FieldSpec, FieldValue};
    use bytes::Bytes;
    use pretty_assertions::assert_eq;
    use reqwest::header::HeaderValue;

    #[derive(Debug, Default)]
    struct Gadget {
        id: String,
    }

    impl Record for Gadget {
        const FIELDS: &'static [FieldSpec] = &[FieldSpec::new("id", FieldKind::Text)];

        fn apply(&mut self, wire_key: &str, value: FieldValue) -> Result<()> {
            if let ("id", FieldValue::Text(v)) = (wire_key, value) {
                self.id = v;
            }
            Ok(())
        }
    }

    impl Resource for Gadget {
        const SINGULAR: &'static str = "gadget";
        const PLURAL: &'static str = "gadgets";
        const LINKS: &'static str = "gadgets_links";
    }

    fn json_response(body: &'static [u8]) -> RawResponse {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        RawResponse {
            status: 200,
            headers,
            body: Bytes::from_static(body),
        }
    }

    #[test]
    fn test_data_result_decodes_resource() {
        let result = DataResult::from_response(json_response(br#"{"gadget": {"id": "g1"}}"#));

        let gadget: Gadget = result.decode_resource().unwrap();
        assert_eq!(gadget.id, "g1");
    }

    #[test]
    fn test_data_result_failure_short_circuits_decode() {
        let result = DataResult::from_error(Error::http_status(500, "boom"));

        assert!(result.err().is_some());
        let err = result.decode::<Gadget>("gadget").unwrap_err();
        assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
    }

    #[test]
    fn test_data_result_missing_singular_key_is_not_found() {
        let result = DataResult::from_response(json_response(br#"{"other": {}}"#));

        let err = result.decode::<Gadget>("gadget").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_data_result_traps_normalization_failure() {
        let result = DataResult::from_response(json_response(b"{broken"));

        assert!(result.raw_body().is_none());
        let err = result.decode::<Gadget>("gadget").unwrap_err();
        assert!(matches!(err, Error::BodyParse { .. }));
    }

    #[test]
    fn test_void_result_ok() {
        assert!(VoidResult::success().ok().is_ok());

        let err = VoidResult::from_error(Error::http_status(409, "in use"))
            .ok()
            .unwrap_err();
        assert!(matches!(err, Error::HttpStatus { status: 409, .. }));
    }

    #[tokio::test]
    async fn test_fetch_traps_transport_failure() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2.0/gadgets/g1"))
            .respond_with(ResponseTemplate::new(404).set_body_string("gone"))
            .mount(&server)
            .await;

        let client = crate::http::HttpClient::new();
        let url = Url::parse(&format!("{}/v2.0/gadgets/g1", server.uri())).unwrap();

        let result =
            DataResult::fetch(&client, Method::GET, &url, &HeaderMap::new(), &[200]).await;

        assert!(result.err().is_some());
        let err = result.decode::<Gadget>("gadget").unwrap_err();
        assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
    }
}
