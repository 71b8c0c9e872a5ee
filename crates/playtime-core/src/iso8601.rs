//! ISO 8601 duration tokens as returned by the catalog API.
//!
//! The API reports video lengths as `PT4M13S`, `PT1H2M`, `PT45S` and so on,
//! with an optional day field (`P1DT2H`, `P0D`) for very long videos and
//! live streams. Only the designators `D`, `H`, `M` and `S` are recognised,
//! each at most once and in that order. Fractional seconds are not used by
//! the API and are rejected.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{ElapsedTime, Error, Result};

#[allow(clippy::unwrap_used)] // Pattern is a compile-time constant
static DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^P(?:([0-9]+)D)?(?:T(?:([0-9]+)H)?(?:([0-9]+)M)?(?:([0-9]+)S)?)?$").unwrap()
});

/// The individual fields of a duration token. Missing fields are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DurationFields {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationFields {
    /// Total length, or `None` if it does not fit in a `u64` of seconds.
    pub fn to_elapsed(self) -> Option<ElapsedTime> {
        let secs = self
            .days
            .checked_mul(86_400)?
            .checked_add(self.hours.checked_mul(3600)?)?
            .checked_add(self.minutes.checked_mul(60)?)?
            .checked_add(self.seconds)?;
        Some(ElapsedTime::from_seconds(secs))
    }
}

/// Split a duration token into its fields.
///
/// An empty token yields all-zero fields. A non-empty token must begin with
/// the `P` designator.
pub fn parse_fields(token: &str) -> Result<DurationFields> {
    if token.is_empty() {
        return Ok(DurationFields::default());
    }

    let malformed = || Error::MalformedDuration(token.to_string());

    // A bare "P" carries no designator at all
    if token == "P" {
        return Err(malformed());
    }

    let caps = DURATION_RE.captures(token).ok_or_else(malformed)?;
    let field = |idx: usize| -> Result<u64> {
        caps.get(idx)
            .map_or(Ok(0), |m| m.as_str().parse().map_err(|_| malformed()))
    };

    Ok(DurationFields {
        days: field(1)?,
        hours: field(2)?,
        minutes: field(3)?,
        seconds: field(4)?,
    })
}

/// Decode a duration token into elapsed time.
pub fn parse_duration(token: &str) -> Result<ElapsedTime> {
    parse_fields(token)?
        .to_elapsed()
        .ok_or_else(|| Error::MalformedDuration(token.to_string()))
}

/// Encode elapsed time as a canonical token. Days are folded into hours and
/// zero fields are omitted; zero itself is `PT0S`.
pub fn format_duration(elapsed: ElapsedTime) -> String {
    if elapsed.is_zero() {
        return "PT0S".to_string();
    }

    let secs = elapsed.as_seconds();
    let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);

    let mut out = String::from("PT");
    if hours > 0 {
        out.push_str(&format!("{hours}H"));
    }
    if minutes > 0 {
        out.push_str(&format!("{minutes}M"));
    }
    if seconds > 0 {
        out.push_str(&format!("{seconds}S"));
    }
    out
}
