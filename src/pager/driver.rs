//! The sequential page traversal loop

use crate::error::Result;
use crate::extract::Resource;
use crate::http::Fetch;
use crate::page::{LinkedPage, Page, PageResult};
use reqwest::header::HeaderMap;
use reqwest::Method;
use tracing::debug;
use url::Url;

/// Statuses a collection GET may legitimately return
const PAGE_OK_CODES: &[u16] = &[200, 204];

/// Drives a traversal over one chain of collection pages
///
/// Holds the transport fetcher, the first page's URL, and any extra request
/// headers. Each [`each_page`] run walks the chain from the start; the
/// pager itself keeps no traversal state between runs.
///
/// [`each_page`]: Pager::each_page
pub struct Pager<'f> {
    fetcher: &'f dyn Fetch,
    first_url: Url,
    headers: HeaderMap,
}

impl<'f> Pager<'f> {
    /// Create a pager over the collection starting at `first_url`
    pub fn new(fetcher: &'f dyn Fetch, first_url: Url) -> Self {
        Self {
            fetcher,
            first_url,
            headers: HeaderMap::new(),
        }
    }

    /// Attach extra headers to every page fetch
    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Walk the page chain, handing each non-empty page to `visit`
    ///
    /// `make_page` wraps a fetched [`PageResult`] in the caller's pagination
    /// strategy. `visit` returns `Ok(true)` to continue, `Ok(false)` to stop
    /// cleanly (the only cooperative cancellation signal), or an error to
    /// stop with that error.
    ///
    /// Stops successfully on an empty page (without invoking `visit` for
    /// it; emptiness wins over a stale next link) or when the strategy
    /// finds no next URL. A fetch or normalization failure stops the loop
    /// immediately with no callback for the failed page; pages already
    /// visited stay delivered.
    pub async fn each_page<P, M, V>(&self, make_page: M, mut visit: V) -> Result<()>
    where
        P: Page,
        M: Fn(PageResult) -> P,
        V: FnMut(&P) -> Result<bool>,
    {
        let mut url = self.first_url.clone();

        loop {
            debug!(url = %url, "fetching page");
            let response = self
                .fetcher
                .fetch(Method::GET, &url, &self.headers, PAGE_OK_CODES)
                .await?;

            let page = make_page(PageResult::from_response(response, url.clone())?);

            if page.is_empty()? {
                debug!(url = %url, "empty page, stopping traversal");
                return Ok(());
            }

            if !visit(&page)? {
                debug!(url = %url, "visitor stopped traversal");
                return Ok(());
            }

            match page.next_url()? {
                Some(next) => url = next,
                None => return Ok(()),
            }
        }
    }

    /// Drain the whole chain into a vector of records
    ///
    /// Convenience over [`each_page`] with the resource's linked-page
    /// strategy. Materializes every page; prefer `each_page` for large
    /// collections.
    ///
    /// [`each_page`]: Pager::each_page
    pub async fn collect<R: Resource>(&self) -> Result<Vec<R>> {
        let mut records = Vec::new();

        self.each_page(LinkedPage::for_resource::<R>, |page| {
            records.append(&mut page.records::<R>()?);
            Ok(true)
        })
        .await?;

        Ok(records)
    }
}

impl std::fmt::Debug for Pager<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("first_url", &self.first_url.as_str())
            .finish_non_exhaustive()
    }
}
