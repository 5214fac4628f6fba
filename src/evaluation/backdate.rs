//! Backdate rule: fixed 365-day shift into the past.

use crate::models::{AppliedRule, Timestamp};

/// The backdate offset in days. The shift is exactly this many 24-hour
/// periods, not a calendar-aware year.
pub const BACKDATE_OFFSET_DAYS: i64 = 365;

/// The result of applying the backdate rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdateResult {
    /// The shifted timestamp.
    pub adjusted_time: Timestamp,
    /// Always [`AppliedRule::Backdate`].
    pub applied_rule: AppliedRule,
}

/// Shifts a base timestamp back by [`BACKDATE_OFFSET_DAYS`].
///
/// The result is never clamped to a minimum date; timestamps before any
/// epoch boundary are accepted as-is.
///
/// # Example
///
/// ```
/// use policy_engine::evaluation::apply_backdate;
/// use policy_engine::models::Timestamp;
///
/// let base = Timestamp::parse("2025-06-15T10:00:00Z").unwrap();
/// let result = apply_backdate(base);
/// assert_eq!(
///     result.adjusted_time,
///     Timestamp::parse("2024-06-15T10:00:00Z").unwrap()
/// );
/// ```
pub fn apply_backdate(base_time: Timestamp) -> BackdateResult {
    BackdateResult {
        adjusted_time: base_time.sub_days(BACKDATE_OFFSET_DAYS),
        applied_rule: AppliedRule::Backdate,
    }
}
