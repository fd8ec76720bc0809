// ABOUTME: Main library entry point for the siteinfo traffic-statistics parser.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, Options, Site, ParseOutcome, ParseError, ErrorCode.

//! siteinfo - a parser for a domain's website-info traffic-statistics page.
//!
//! This crate fetches the analytics provider's site-info page for a domain
//! and extracts rank, visitor demographics, search keywords, inbound links,
//! related sites, categories, and subdomains into a structured [`Site`]
//! record. Extraction is selector-driven and fail-fast: the first field that
//! no longer matches the markup halts the run, and the [`ParseOutcome`]
//! keeps everything extracted before it.
//!
//! # Example
//!
//! ```no_run
//! use siteinfo::Client;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Client::builder().build();
//!     let outcome = client.site_info("example.com").await;
//!     match outcome.error {
//!         None => println!("global rank: {}", outcome.site.global_rank),
//!         Some(err) => eprintln!("{} (extracted prefix kept)", err),
//!     }
//! }
//! ```

pub mod client;
pub mod error;
pub mod extractors;
pub mod options;
pub mod pipeline;
pub mod record;
pub mod resource;
pub mod selectors;

pub use crate::client::{Client, SITE_INFO_URL};
pub use crate::error::{ErrorCode, ParseError};
pub use crate::options::{ClientBuilder, Options};
pub use crate::pipeline::{parse_bytes, parse_html};
pub use crate::record::{Keyword, Link, ParseOutcome, Site, Subdomain, Upstream, Visitor};
