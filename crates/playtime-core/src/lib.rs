//! # playtime-core
//!
//! Core types, duration codec, and aggregation logic for playtime.

pub mod aggregate;
pub mod catalog;
pub mod error;
pub mod extract;
pub mod iso8601;
pub mod types;

pub use aggregate::{Aggregator, DEFAULT_CONCURRENCY};
pub use catalog::{Catalog, PageCursor};
pub use error::{Error, FetchError, Result};
pub use extract::extract_playlist_id;
pub use iso8601::{format_duration, parse_duration};
pub use types::*;
