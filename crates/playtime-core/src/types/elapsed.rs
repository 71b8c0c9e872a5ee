//! Whole-second elapsed time arithmetic.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use super::PlaybackSpeed;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Elapsed time in whole seconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(transparent)]
pub struct ElapsedTime(pub u64);

impl ElapsedTime {
    pub const ZERO: Self = Self(0);

    pub const fn from_seconds(seconds: u64) -> Self {
        Self(seconds)
    }

    pub const fn as_seconds(&self) -> u64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Divide evenly across `count` parts, truncating to whole seconds.
    /// Returns `None` when `count` is zero.
    pub const fn checked_div(&self, count: u64) -> Option<Self> {
        match self.0.checked_div(count) {
            Some(secs) => Some(Self(secs)),
            None => None,
        }
    }

    /// Time taken when played back at `speed`, truncated to whole seconds.
    pub fn at_speed(&self, speed: PlaybackSpeed) -> Self {
        Self((self.0 as f64 / speed.as_f64()).floor() as u64)
    }

    /// Split into days, hours, minutes and seconds.
    pub const fn breakdown(&self) -> Breakdown {
        let secs = self.0;
        Breakdown {
            days: secs / SECS_PER_DAY,
            hours: (secs % SECS_PER_DAY) / SECS_PER_HOUR,
            minutes: (secs % SECS_PER_HOUR) / SECS_PER_MINUTE,
            seconds: secs % SECS_PER_MINUTE,
        }
    }

    /// Total whole hours, not wrapped at day boundaries.
    pub const fn total_hours(&self) -> u64 {
        self.0 / SECS_PER_HOUR
    }

    /// Format as MM:SS or HH:MM:SS.
    pub fn format(&self) -> String {
        let hours = self.total_hours();
        let minutes = (self.0 % SECS_PER_HOUR) / SECS_PER_MINUTE;
        let seconds = self.0 % SECS_PER_MINUTE;

        if hours > 0 {
            format!("{hours}:{minutes:02}:{seconds:02}")
        } else {
            format!("{minutes}:{seconds:02}")
        }
    }
}

impl std::fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format())
    }
}

impl Add for ElapsedTime {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for ElapsedTime {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for ElapsedTime {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<u64> for ElapsedTime {
    fn from(seconds: u64) -> Self {
        Self(seconds)
    }
}

impl From<ElapsedTime> for u64 {
    fn from(t: ElapsedTime) -> Self {
        t.0
    }
}

/// Elapsed time split into calendar-style units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Breakdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl std::fmt::Display for Breakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} days, {} hours, {} minutes, {} seconds",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_format() {
        assert_eq!(ElapsedTime::from_seconds(65).format(), "1:05");
        assert_eq!(ElapsedTime::from_seconds(3661).format(), "1:01:01");
        assert_eq!(ElapsedTime::from_seconds(0).format(), "0:00");
        assert_eq!(ElapsedTime::from_seconds(90_061).format(), "25:01:01");
    }

    #[test]
    fn test_breakdown() {
        let b = ElapsedTime::from_seconds(90_061).breakdown();
        assert_eq!(
            b,
            Breakdown {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1
            }
        );
        assert_eq!(b.to_string(), "1 days, 1 hours, 1 minutes, 1 seconds");
    }

    #[test]
    fn test_sum_and_div() {
        let total: ElapsedTime = [100, 200, 301].into_iter().map(ElapsedTime::from).sum();
        assert_eq!(total.as_seconds(), 601);
        assert_eq!(total.checked_div(2).unwrap().as_seconds(), 300);
        assert!(total.checked_div(0).is_none());
    }

    #[test]
    fn test_at_speed() {
        let total = ElapsedTime::from_seconds(7200);
        assert_eq!(total.at_speed(PlaybackSpeed::new(2.0).unwrap()).as_seconds(), 3600);
        assert_eq!(total.at_speed(PlaybackSpeed::new(1.25).unwrap()).as_seconds(), 5760);
        assert_eq!(
            ElapsedTime::from_seconds(10)
                .at_speed(PlaybackSpeed::new(3.0).unwrap())
                .as_seconds(),
            3
        );
    }
}
