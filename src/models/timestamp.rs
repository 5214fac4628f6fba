//! Interchange timestamp type for the adjustment engine.
//!
//! Callers may supply a base time with an explicit UTC offset (RFC 3339,
//! including the `Z` suffix) or without one. The engine performs no timezone
//! conversion: an offset is preserved through adjustment, and a naive local
//! time passes through unchanged.

use std::fmt;

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, NaiveTime, TimeZone};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::error::{EngineError, EngineResult};

/// A point in time at second-or-finer resolution, with or without an offset.
///
/// # Example
///
/// ```
/// use policy_engine::models::Timestamp;
///
/// let zoned = Timestamp::parse("2025-06-15T10:00:00Z").unwrap();
/// assert_eq!(zoned.to_string(), "2025-06-15T10:00:00+00:00");
///
/// let naive = Timestamp::parse("2025-06-15T10:00:00").unwrap();
/// assert_eq!(naive.to_string(), "2025-06-15T10:00:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Timestamp {
    /// A timestamp carrying an explicit UTC offset.
    Offset(DateTime<FixedOffset>),
    /// A timestamp with no offset, treated as an opaque local time.
    Naive(NaiveDateTime),
}

impl Timestamp {
    /// Parses a timestamp from its interchange form.
    ///
    /// Accepts RFC 3339 (`2025-06-15T10:00:00+10:00`, `...Z`) and bare
    /// ISO 8601 local datetimes (`2025-06-15T10:00:00`), with optional
    /// fractional seconds. Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTimestamp` when the input parses under neither form.
    pub fn parse(input: &str) -> EngineResult<Self> {
        let trimmed = input.trim();

        if let Ok(zoned) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Timestamp::Offset(zoned));
        }

        trimmed
            .parse::<NaiveDateTime>()
            .map(Timestamp::Naive)
            .map_err(|e| EngineError::InvalidTimestamp {
                value: input.to_string(),
                message: e.to_string(),
            })
    }

    /// Returns this timestamp shifted into the past by exactly `days` * 24h.
    ///
    /// The shift is a fixed offset, not a calendar-aware adjustment, and is
    /// never clamped: results before any epoch boundary are accepted as-is.
    pub fn sub_days(self, days: i64) -> Self {
        match self {
            Timestamp::Offset(dt) => Timestamp::Offset(dt - Duration::days(days)),
            Timestamp::Naive(dt) => Timestamp::Naive(dt - Duration::days(days)),
        }
    }

    /// Replaces the time-of-day component, preserving date and offset.
    ///
    /// Sub-second precision of the original timestamp is discarded along
    /// with its time of day.
    pub fn with_time(self, time: NaiveTime) -> EngineResult<Self> {
        match self {
            Timestamp::Offset(dt) => dt
                .offset()
                .from_local_datetime(&dt.date_naive().and_time(time))
                .single()
                .map(Timestamp::Offset)
                .ok_or_else(|| EngineError::AdjustmentError {
                    message: format!("cannot place {} on {}", time, dt.date_naive()),
                }),
            Timestamp::Naive(dt) => Ok(Timestamp::Naive(dt.date().and_time(time))),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Offset(dt) => write!(f, "{}", dt.to_rfc3339()),
            Timestamp::Naive(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.f")),
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Timestamp::parse(&raw).map_err(de::Error::custom)
    }
}
