//! Pager driver module
//!
//! Drives a lazy traversal over a chain of collection pages.
//!
//! # Overview
//!
//! The driver is a sequential suspend/resume loop: fetch a page, normalize
//! it, hand it to the caller's visitor, then follow the strategy's next-page
//! URL. Exactly one fetch is in flight at a time; the next URL is only
//! knowable after the current page's body has been inspected, so no
//! prefetching is possible or attempted. Independent pagers can run
//! concurrently; they share no mutable state.

mod driver;

pub use driver::Pager;

#[cfg(test)]
mod tests;
