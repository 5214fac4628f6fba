//! Admin-override rule: no time change, unrestricted authority flag only.

use crate::models::{AppliedRule, Timestamp};

/// The result of applying the admin-override rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdminOverrideResult {
    /// The base timestamp, unchanged.
    pub adjusted_time: Timestamp,
    /// Always true: the caller-supplied time is authoritative regardless of
    /// normal constraints.
    pub admin_override: bool,
    /// Always [`AppliedRule::AdminOverride`].
    pub applied_rule: AppliedRule,
}

/// Accepts a base timestamp as authoritative without adjustment.
pub fn apply_admin_override(base_time: Timestamp) -> AdminOverrideResult {
    AdminOverrideResult {
        adjusted_time: base_time,
        admin_override: true,
        applied_rule: AppliedRule::AdminOverride,
    }
}
