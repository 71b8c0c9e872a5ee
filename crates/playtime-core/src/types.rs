//! Core domain types for playtime.

pub mod elapsed;
pub mod ids;
pub mod page;
pub mod stats;

pub use elapsed::{Breakdown, ElapsedTime};
pub use ids::{PlaylistId, VideoId};
pub use page::Page;
pub use stats::{PlaybackSpeed, PlaylistStats, Projection, DEFAULT_SPEEDS};
