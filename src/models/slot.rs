//! Weekly time slot model.
//!
//! A slot is a recurring commitment: one weekday plus a `[start, end)`
//! time-of-day range.
//!
//! # Time Model
//! Times are `chrono::NaiveTime` values. The wire format is `"HH:MM"`
//! (minute precision), but parsing also accepts `"HH:MM:SS"` and
//! comparisons always use the full stored precision — seconds carried by
//! the underlying store are never silently truncated.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::Weekday;

/// Error parsing a time-of-day string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid time '{0}', expected HH:MM or HH:MM:SS")]
pub struct TimeParseError(pub String);

/// Parses a time-of-day from `"HH:MM"` or `"HH:MM:SS"`.
pub fn parse_time(s: &str) -> Result<NaiveTime, TimeParseError> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| TimeParseError(s.to_string()))
}

/// A weekly time slot: a half-open range `[start, end)` on one weekday.
///
/// Invariant: `start < end` strictly. The invariant is enforced when a
/// slot list is written (see [`crate::validation::validate_slots`]), not
/// by construction, so callers can stage raw input before validating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Day of the week. Named `day` on the wire.
    #[serde(rename = "day")]
    pub weekday: Weekday,
    /// Range start (inclusive).
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    /// Range end (exclusive).
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

impl TimeSlot {
    /// Creates a new slot.
    pub fn new(weekday: Weekday, start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            weekday,
            start,
            end,
        }
    }

    /// Creates a slot from `"HH:MM"`-style strings.
    pub fn from_hhmm(weekday: Weekday, start: &str, end: &str) -> Result<Self, TimeParseError> {
        Ok(Self::new(weekday, parse_time(start)?, parse_time(end)?))
    }

    /// Whether two slots overlap.
    ///
    /// Strict interval rule: touching boundaries (`self.end == other.start`)
    /// do not overlap. Slots on different weekdays never overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.weekday == other.weekday && self.end > other.start && other.end > self.start
    }

    /// Whether two slots cover the identical `(weekday, start, end)` triple.
    #[inline]
    pub fn same_range(&self, other: &Self) -> bool {
        self.weekday == other.weekday && self.start == other.start && self.end == other.end
    }
}

impl fmt::Display for TimeSlot {
    /// Renders as `"MON 08:00-10:00"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{}",
            self.weekday,
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

/// Serde adapter for the `"HH:MM"` wire format.
///
/// Output is always minute precision; input accepts an optional seconds
/// component, which is preserved for comparisons.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format("%H:%M"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_time(&s).map_err(de::Error::custom)
    }
}
