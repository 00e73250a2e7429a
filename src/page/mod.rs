//! Page abstraction module
//!
//! One page of a collection traversal plus the strategy for finding the
//! next one.
//!
//! # Overview
//!
//! [`PageResult`] wraps one fetched response: normalized body, request URL,
//! response headers. The [`Page`] trait exposes the two questions the pager
//! asks of a page: is it empty, and where is the next one. [`LinkedPage`]
//! implements the link-array strategy this service family uses;
//! [`SinglePage`] covers one-shot collections. The trait stays open to
//! marker- or offset-based strategies.

mod linked;
mod types;

pub use linked::{Link, LinkedPage, SinglePage};
pub use types::{Page, PageResult};
