//! # pagewalk
//!
//! A client-side pagination and extraction engine for resource-oriented
//! HTTP services.
//!
//! ## Features
//!
//! - **Lazy page traversal**: pages are fetched one at a time as a visitor
//!   consumes them, following the service's embedded next-page links
//! - **Typed extraction**: raw JSON collections decode into strongly-typed
//!   records through declared field tables
//! - **Result envelopes**: single-resource and void operations carry their
//!   outcome alongside the raw response for late, typed inspection
//! - **Resilient transport**: reqwest-backed fetcher with retries and
//!   constant/linear/exponential backoff
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagewalk::http::HttpClient;
//! use pagewalk::pager::Pager;
//! use pagewalk::resources::{extract_pools, Pool};
//! use url::Url;
//!
//! #[tokio::main]
//! async fn main() -> pagewalk::Result<()> {
//!     let client = HttpClient::new();
//!     let first = Url::parse("https://lb.example.com/v2.0/lbaas/pools")?;
//!
//!     let pools: Vec<Pool> = Pager::new(&client, first).collect().await?;
//!     for pool in pools {
//!         println!("{} uses {}", pool.name, pool.lb_method);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          Pager                               │
//! │   each_page(visitor)          collect() → Vec<Record>        │
//! └──────────────────────────────┬───────────────────────────────┘
//!                                │
//! ┌───────────┬──────────────────┴──────────┬────────────────────┐
//! │   Fetch   │            Page             │      Extract       │
//! ├───────────┼─────────────────────────────┼────────────────────┤
//! │ reqwest   │ LinkedPage (link arrays)    │ Record field table │
//! │ Retry     │ SinglePage (one-shot)       │ Resource keys      │
//! │ Backoff   │ is_empty / next_url         │ one / many / page  │
//! └───────────┴─────────────────────────────┴────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the engine
pub mod error;

/// Common types and type aliases
pub mod types;

/// Response body normalization
pub mod body;

/// Typed record extraction from JSON collections
pub mod extract;

/// Page abstraction and next-link strategies
pub mod page;

/// The lazy page traversal driver
pub mod pager;

/// Result envelopes for single-resource and void operations
pub mod results;

/// Transport fetcher with retry and backoff
pub mod http;

/// Record definitions for the load balancing service family
pub mod resources;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::{BackoffType, JsonObject, JsonValue};

// Re-export the types most callers touch
pub use body::Body;
pub use page::{LinkedPage, Page, PageResult, SinglePage};
pub use pager::Pager;
pub use results::{DataResult, VoidResult};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
