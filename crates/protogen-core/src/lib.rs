//! ProtoMusic proxy core library
//!
//! This crate provides the upstream side of the ProtoMusic proxy for
//! v2.protogen.fr.
//!
//! # Features
//! - HTTP client for the XHR API, media/asset files and HTML pages
//! - Kikiskothek listing extractor (seasons and episode cards to JSON)
//! - Calendar-view routing for the `season=kalandar` collection

pub mod client;
pub mod error;
pub mod parser;
pub mod scraper;
pub mod types;

// Re-export main types for convenience
pub use client::{ClientConfig, ProtogenClient, UPSTREAM_ORIGIN};
pub use error::{ProtogenError, Result};
pub use parser::extract;
pub use scraper::KikiskothekScraper;
pub use types::{EpisodeSummary, Listing, ListingResponse, SeasonSummary};
