//! Concrete pagination strategies

use super::types::{Page, PageResult};
use crate::body::Body;
use crate::error::{Error, Result};
use crate::extract::{extract_many, Record, Resource};
use serde::Deserialize;
use std::borrow::Cow;
use url::Url;

/// One entry of a pagination link array
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Link {
    /// Target URL
    pub href: String,
    /// Relation label, `"next"` or `"previous"`
    #[serde(default)]
    pub rel: String,
}

// ============================================================================
// Linked Pagination
// ============================================================================

/// Link-array pagination
///
/// The service embeds the next page's URL in the collection body itself,
/// under a reserved key next to the collection (`"<collection>_links"` by
/// default): `{"pools": [...], "pools_links": [{"href": "...", "rel": "next"}]}`.
#[derive(Debug, Clone)]
pub struct LinkedPage {
    raw: PageResult,
    collection_key: Cow<'static, str>,
    links_key: Cow<'static, str>,
}

impl LinkedPage {
    /// Create a linked page over the given collection key
    ///
    /// The links key defaults to `"<collection>_links"`.
    pub fn new(raw: PageResult, collection_key: impl Into<Cow<'static, str>>) -> Self {
        let collection_key = collection_key.into();
        let links_key = Cow::Owned(format!("{collection_key}_links"));
        Self {
            raw,
            collection_key,
            links_key,
        }
    }

    /// Override the links key
    ///
    /// Some collections deviate from the `"<collection>_links"` convention
    /// (the load-balancer collection uses `loadbalancer_links`).
    #[must_use]
    pub fn with_links_key(mut self, links_key: impl Into<Cow<'static, str>>) -> Self {
        self.links_key = links_key.into();
        self
    }

    /// Create a linked page using a resource's declared key names
    pub fn for_resource<R: Resource>(raw: PageResult) -> Self {
        Self {
            raw,
            collection_key: Cow::Borrowed(R::PLURAL),
            links_key: Cow::Borrowed(R::LINKS),
        }
    }

    /// The key the collection lives under
    pub fn collection_key(&self) -> &str {
        &self.collection_key
    }

    /// Decode this page's collection into records
    pub fn records<R: Record>(&self) -> Result<Vec<R>> {
        extract_many(self.raw.json()?, &self.collection_key)
    }
}

impl Page for LinkedPage {
    fn is_empty(&self) -> Result<bool> {
        collection_is_empty(&self.raw, &self.collection_key)
    }

    fn next_url(&self) -> Result<Option<Url>> {
        let body = self.raw.json()?;
        let obj = body
            .as_object()
            .ok_or_else(|| Error::malformed("expected an object body"))?;

        let Some(value) = obj.get(self.links_key.as_ref()) else {
            return Ok(None);
        };

        let entries = value.as_array().ok_or_else(|| {
            Error::malformed(format!("expected an array under key '{}'", self.links_key))
        })?;

        for entry in entries {
            let link: Link = serde_json::from_value(entry.clone()).map_err(|e| {
                Error::malformed(format!("bad link entry in '{}': {e}", self.links_key))
            })?;
            if link.rel == "next" {
                return Ok(Some(Url::parse(&link.href)?));
            }
        }

        Ok(None)
    }

    fn raw(&self) -> &PageResult {
        &self.raw
    }
}

// ============================================================================
// Single Page
// ============================================================================

/// One-shot pagination: the collection never spans more than one page
#[derive(Debug, Clone)]
pub struct SinglePage {
    raw: PageResult,
    collection_key: Cow<'static, str>,
}

impl SinglePage {
    /// Create a single page over the given collection key
    pub fn new(raw: PageResult, collection_key: impl Into<Cow<'static, str>>) -> Self {
        Self {
            raw,
            collection_key: collection_key.into(),
        }
    }

    /// Decode this page's collection into records
    pub fn records<R: Record>(&self) -> Result<Vec<R>> {
        extract_many(self.raw.json()?, &self.collection_key)
    }
}

impl Page for SinglePage {
    fn is_empty(&self) -> Result<bool> {
        collection_is_empty(&self.raw, &self.collection_key)
    }

    fn next_url(&self) -> Result<Option<Url>> {
        Ok(None)
    }

    fn raw(&self) -> &PageResult {
        &self.raw
    }
}

/// Shared emptiness rule: missing key means empty, wrong shape is an error
///
/// A bodyless response (204 No Content) also reads as empty; it never
/// carries a collection to inspect.
fn collection_is_empty(raw: &PageResult, key: &str) -> Result<bool> {
    if let Body::Raw(bytes) = &raw.body {
        if bytes.is_empty() {
            return Ok(true);
        }
    }

    let obj = raw
        .json()?
        .as_object()
        .ok_or_else(|| Error::malformed("expected an object body"))?;

    match obj.get(key) {
        None => Ok(true),
        Some(value) => {
            let items = value
                .as_array()
                .ok_or_else(|| Error::malformed(format!("expected an array under key '{key}'")))?;
            Ok(items.is_empty())
        }
    }
}
