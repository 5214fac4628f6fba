//! Flexible-hours rule: no time change, advisory tolerance flag only.

use crate::models::{AppliedRule, Timestamp};

/// The result of applying the flexible-hours rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlexibleHoursResult {
    /// The base timestamp, unchanged.
    pub adjusted_time: Timestamp,
    /// Always true: flexible-hours tolerance applies downstream.
    pub flexible_hours: bool,
    /// Always [`AppliedRule::Flexible`].
    pub applied_rule: AppliedRule,
}

/// Flags flexible-hours tolerance for a base timestamp.
///
/// The timestamp itself is not shifted; downstream consumers interpret the
/// flag when enforcing their own timing constraints.
pub fn apply_flexible_hours(base_time: Timestamp) -> FlexibleHoursResult {
    FlexibleHoursResult {
        adjusted_time: base_time,
        flexible_hours: true,
        applied_rule: AppliedRule::Flexible,
    }
}
