//! Fixed-start rule: replace the time-of-day with a configured constant.

use chrono::NaiveTime;

use crate::error::EngineResult;
use crate::models::{AppliedRule, Timestamp};

/// The result of applying the fixed-start rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStartResult {
    /// The timestamp with hour and minute replaced and seconds zeroed.
    pub adjusted_time: Timestamp,
    /// Always [`AppliedRule::FixedStart`].
    pub applied_rule: AppliedRule,
}

/// Replaces the hour and minute of a base timestamp with the configured
/// start time, zeroing seconds. The date component and any offset are
/// preserved.
///
/// `start` comes from the registry, which parses it from `HH:MM` — it never
/// carries seconds of its own.
///
/// # Example
///
/// ```
/// use chrono::NaiveTime;
/// use policy_engine::evaluation::apply_fixed_start;
/// use policy_engine::models::Timestamp;
///
/// let base = Timestamp::parse("2025-03-10T23:59:59Z").unwrap();
/// let start = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
/// let result = apply_fixed_start(base, start).unwrap();
/// assert_eq!(
///     result.adjusted_time,
///     Timestamp::parse("2025-03-10T09:00:00Z").unwrap()
/// );
/// ```
pub fn apply_fixed_start(base_time: Timestamp, start: NaiveTime) -> EngineResult<FixedStartResult> {
    Ok(FixedStartResult {
        adjusted_time: base_time.with_time(start)?,
        applied_rule: AppliedRule::FixedStart,
    })
}
