//! Aggregate playlist statistics and playback speed projections.

use serde::{Deserialize, Serialize};

use super::ElapsedTime;
use crate::{Error, Result};

/// Playback speeds shown in the report when none are configured.
pub const DEFAULT_SPEEDS: [f64; 4] = [1.25, 1.5, 1.75, 2.0];

/// A positive, finite playback speed multiplier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(try_from = "f64", into = "f64")]
pub struct PlaybackSpeed(f64);

impl PlaybackSpeed {
    pub fn new(speed: f64) -> Result<Self> {
        if speed.is_finite() && speed > 0.0 {
            Ok(Self(speed))
        } else {
            Err(Error::InvalidSpeed(speed))
        }
    }

    pub const fn as_f64(&self) -> f64 {
        self.0
    }

    /// The default set of report speeds.
    pub fn defaults() -> Vec<Self> {
        DEFAULT_SPEEDS.iter().map(|&s| Self(s)).collect()
    }
}

impl TryFrom<f64> for PlaybackSpeed {
    type Error = Error;

    fn try_from(speed: f64) -> Result<Self> {
        Self::new(speed)
    }
}

impl From<PlaybackSpeed> for f64 {
    fn from(speed: PlaybackSpeed) -> Self {
        speed.0
    }
}

impl std::fmt::Display for PlaybackSpeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}x", self.0)
    }
}

/// Total elapsed time when played back at a given speed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Projection {
    pub speed: PlaybackSpeed,
    pub duration: ElapsedTime,
}

/// Item count and total duration of a playlist.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaylistStats {
    /// Number of items enumerated across all pages.
    pub count: u64,
    /// Sum of every item's duration.
    pub total: ElapsedTime,
}

impl PlaylistStats {
    pub const fn new(count: u64, total: ElapsedTime) -> Self {
        Self { count, total }
    }

    /// Mean item length, truncated to whole seconds.
    pub fn average(&self) -> Result<ElapsedTime> {
        self.total
            .checked_div(self.count)
            .ok_or(Error::DivisionByZero)
    }

    /// Total duration at each of the given speeds, in the order given.
    pub fn project(&self, speeds: &[PlaybackSpeed]) -> Vec<Projection> {
        speeds
            .iter()
            .map(|&speed| Projection {
                speed,
                duration: self.total.at_speed(speed),
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_average() {
        let stats = PlaylistStats::new(53, ElapsedTime::from_seconds(10_900));
        assert_eq!(stats.average().unwrap().as_seconds(), 205);
    }

    #[test]
    fn test_average_empty_playlist() {
        let stats = PlaylistStats::default();
        assert!(matches!(stats.average(), Err(Error::DivisionByZero)));
    }

    #[test]
    fn test_project() {
        let stats = PlaylistStats::new(2, ElapsedTime::from_seconds(7200));
        let speeds = [PlaybackSpeed::new(2.0).unwrap(), PlaybackSpeed::new(1.25).unwrap()];
        let projections = stats.project(&speeds);

        assert_eq!(projections.len(), 2);
        assert_eq!(projections[0].duration.as_seconds(), 3600);
        assert_eq!(projections[1].duration.as_seconds(), 5760);
    }

    #[test]
    fn test_speed_validation() {
        assert!(PlaybackSpeed::new(0.0).is_err());
        assert!(PlaybackSpeed::new(-1.5).is_err());
        assert!(PlaybackSpeed::new(f64::NAN).is_err());
        assert!(PlaybackSpeed::new(f64::INFINITY).is_err());
        assert_eq!(PlaybackSpeed::new(1.75).unwrap().to_string(), "1.75x");
        assert_eq!(PlaybackSpeed::defaults().len(), DEFAULT_SPEEDS.len());
    }
}
