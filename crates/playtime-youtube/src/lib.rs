//! # playtime-youtube
//!
//! `YouTube` Data API v3 catalog client for playtime.
//!
//! Lists playlist membership through the `playlistItems` endpoint and
//! resolves video lengths through the `videos` endpoint. The client
//! implements [`playtime_core::Catalog`], so it plugs straight into
//! [`playtime_core::Aggregator`].

pub mod client;
pub mod config;
pub mod endpoints;
pub mod types;

pub use client::YouTubeClient;
pub use config::ClientConfig;
