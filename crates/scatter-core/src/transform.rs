// File: crates/scatter-core/src/transform.rs
// Summary: Field transformer; derives plot-ready points from raw records.

use std::fmt;

use chrono::{NaiveDateTime, TimeDelta, Timelike};

use crate::error::TransformError;
use crate::record::Record;

/// Wall-clock value on epoch day zero (UTC) holding an elapsed `MM:SS`.
///
/// Minutes past 59 roll into the hour field, the same way a calendar clock
/// would; ordering always follows elapsed time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveDateTime);

impl TimeOfDay {
    /// Midnight of epoch day zero.
    pub const EPOCH: TimeOfDay = TimeOfDay(NaiveDateTime::UNIX_EPOCH);

    pub fn from_min_sec(minutes: u32, seconds: u32) -> Self {
        Self::from_millis(i64::from(minutes) * 60_000 + i64::from(seconds) * 1_000)
    }

    /// Value at `millis` milliseconds past epoch midnight.
    pub fn from_millis(millis: i64) -> Self {
        Self(NaiveDateTime::UNIX_EPOCH + TimeDelta::milliseconds(millis))
    }

    pub fn as_millis(&self) -> i64 {
        self.0.and_utc().timestamp_millis()
    }

    pub fn hours(&self) -> u32 { self.0.hour() }
    pub fn minutes(&self) -> u32 { self.0.minute() }
    pub fn seconds(&self) -> u32 { self.0.second() }
    pub fn millis(&self) -> u32 { self.0.nanosecond() / 1_000_000 }

    pub fn datetime(&self) -> NaiveDateTime { self.0 }

    /// `%M:%S`, seconds zero-padded.
    pub fn format(&self) -> String {
        self.0.format("%M:%S").to_string()
    }

    /// RFC 3339 timestamp, used for the `data-yvalue` attribute.
    pub fn to_rfc3339(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

/// Plot values for one record; index-aligned with its source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DerivedPoint {
    pub year: i32,
    pub time: TimeOfDay,
    pub is_doped: bool,
}

/// Split `MM:SS` on the literal colon into exactly two unsigned integers.
pub fn parse_time(raw: &str) -> Option<(u32, u32)> {
    let (m, s) = raw.split_once(':')?;
    let minutes = m.trim().parse::<u32>().ok()?;
    let seconds = s.trim().parse::<u32>().ok()?;
    Some((minutes, seconds))
}

pub fn derive_point(index: usize, record: &Record) -> Result<DerivedPoint, TransformError> {
    let (minutes, seconds) = parse_time(&record.time).ok_or_else(|| TransformError::MalformedTime {
        index,
        value: record.time.clone(),
    })?;
    Ok(DerivedPoint {
        year: record.year,
        time: TimeOfDay::from_min_sec(minutes, seconds),
        is_doped: record.has_allegation(),
    })
}

/// One point per record, same order. Stops at the first malformed time.
pub fn derive_points(records: &[Record]) -> Result<Vec<DerivedPoint>, TransformError> {
    records.iter().enumerate().map(|(i, r)| derive_point(i, r)).collect()
}

/// Records and their derived points, kept as parallel arrays.
/// Invariant: `records.len() == points.len()` and index `i` of one matches
/// index `i` of the other for the lifetime of the dataset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
    points: Vec<DerivedPoint>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Result<Self, TransformError> {
        let points = derive_points(&records)?;
        Ok(Self { records, points })
    }

    pub fn records(&self) -> &[Record] { &self.records }
    pub fn points(&self) -> &[DerivedPoint] { &self.points }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Resolve both arrays at `index`.
    pub fn get(&self, index: usize) -> Option<(&Record, &DerivedPoint)> {
        Some((self.records.get(index)?, self.points.get(index)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_time_requires_exactly_two_numeric_parts() {
        assert_eq!(parse_time("36:50"), Some((36, 50)));
        assert_eq!(parse_time("07:05"), Some((7, 5)));
        assert_eq!(parse_time("36"), None);
        assert_eq!(parse_time("1:2:3"), None);
        assert_eq!(parse_time("ab:cd"), None);
        assert_eq!(parse_time(""), None);
    }

    #[test]
    fn minutes_past_the_hour_roll_over() {
        let t = TimeOfDay::from_min_sec(75, 3);
        assert_eq!((t.hours(), t.minutes(), t.seconds()), (1, 15, 3));
        assert_eq!(t.format(), "15:03");
        assert!(t > TimeOfDay::from_min_sec(59, 59));
    }

    #[test]
    fn rfc3339_is_anchored_at_epoch() {
        assert_eq!(TimeOfDay::from_min_sec(36, 50).to_rfc3339(), "1970-01-01T00:36:50.000Z");
    }
}
