//! Human-readable playlist report.

use std::fmt;

use playtime_core::{ElapsedTime, PlaybackSpeed, PlaylistStats, Projection, Result};

/// Everything printed at the end of a successful run.
#[derive(Debug, Clone)]
pub struct Report {
    pub stats: PlaylistStats,
    pub average: ElapsedTime,
    pub projections: Vec<Projection>,
}

impl Report {
    /// Fails with `DivisionByZero` for an empty playlist.
    pub fn new(stats: PlaylistStats, speeds: &[PlaybackSpeed]) -> Result<Self> {
        Ok(Self {
            stats,
            average: stats.average()?,
            projections: stats.project(speeds),
        })
    }
}

/// `HH hours, MM mins, SS secs`, with hours not wrapped at day boundaries.
fn clock_words(t: ElapsedTime) -> String {
    let b = t.breakdown();
    format!(
        "{:02} hours, {:02} mins, {:02} secs",
        t.total_hours(),
        b.minutes,
        b.seconds
    )
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Playlist Information:")?;
        writeln!(f, "No of videos: {}", self.stats.count)?;
        writeln!(f, "Average length of video: {}", clock_words(self.average))?;
        writeln!(f, "Total length of playlist: {}", self.stats.total.breakdown())?;

        writeln!(f, "Duration at Different Playback Speeds:")?;
        for p in &self.projections {
            writeln!(f, "At {}: {}", p.speed, p.duration.breakdown())?;
        }
        Ok(())
    }
}
