//! Transport fetcher module
//!
//! Provides the [`Fetch`] boundary the pagination core consumes, plus a
//! reqwest-backed client with retry and backoff.
//!
//! # Features
//!
//! - **Explicit success codes**: every fetch declares its acceptable
//!   statuses; anything else is a transport error, not a decode concern
//! - **Automatic Retries**: configurable retry logic with backoff
//! - **Backoff Strategies**: constant, linear, and exponential backoff
//!
//! Retry policy lives here, in the collaborator; the pagination core never
//! retries on its own.

mod client;
mod fetch;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use fetch::{Fetch, RawResponse};
