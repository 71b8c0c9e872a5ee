//! Data API endpoint implementations.

pub mod playlist_items;
pub mod videos;
