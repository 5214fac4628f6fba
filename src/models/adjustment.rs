//! Adjustment request and result models.

use serde::{Deserialize, Serialize};

use crate::registry::{CapabilityClass, PolicyCode};

use super::Timestamp;

/// One timestamp adjustment evaluation, as seen by the evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentRequest {
    /// The presented policy code.
    pub code: String,
    /// The base timestamp in interchange form. When absent, the evaluator
    /// reads its injected clock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_time: Option<String>,
}

/// Identifies which adjustment branch fired, for observability and testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppliedRule {
    /// Fixed 365-day shift into the past.
    Backdate,
    /// No time change; flexible-hours tolerance flagged downstream.
    Flexible,
    /// Time-of-day replaced with the configured start time.
    FixedStart,
    /// No time change; caller-supplied time accepted as authoritative.
    AdminOverride,
}

impl std::fmt::Display for AppliedRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            AppliedRule::Backdate => "backdate",
            AppliedRule::Flexible => "flexible",
            AppliedRule::FixedStart => "fixed_start",
            AppliedRule::AdminOverride => "admin_override",
        };
        write!(f, "{}", tag)
    }
}

/// The outcome of a successful timestamp adjustment.
///
/// Results are always freshly computed and never persisted by the engine.
/// `adjusted_time` equals `original_time` unless the class specifically
/// shifts it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentResult {
    /// Whether the code was recognized. Always true on this path; rejections
    /// surface as classified errors instead.
    pub valid: bool,
    /// The matched code.
    pub code: String,
    /// The capability class the code grants.
    pub capability_class: CapabilityClass,
    /// Human-readable description of the code.
    pub description: String,
    /// The base timestamp the adjustment started from.
    pub original_time: Timestamp,
    /// The computed output timestamp.
    pub adjusted_time: Timestamp,
    /// The adjustment branch that fired.
    pub applied_rule: AppliedRule,
    /// True when flexible-hours tolerance applies downstream.
    #[serde(default)]
    pub flexible_hours: bool,
    /// True when the code grants unrestricted override authority.
    #[serde(default)]
    pub admin_override: bool,
}

impl AdjustmentResult {
    /// Builds a result with both advisory flags cleared.
    pub fn new(
        policy: &PolicyCode,
        original_time: Timestamp,
        adjusted_time: Timestamp,
        applied_rule: AppliedRule,
    ) -> Self {
        Self {
            valid: true,
            code: policy.code.clone(),
            capability_class: policy.class,
            description: policy.description.clone(),
            original_time,
            adjusted_time,
            applied_rule,
            flexible_hours: false,
            admin_override: false,
        }
    }

    /// Sets the flexible-hours advisory flag.
    pub fn with_flexible_hours(mut self) -> Self {
        self.flexible_hours = true;
        self
    }

    /// Sets the admin-override advisory flag.
    pub fn with_admin_override(mut self) -> Self {
        self.admin_override = true;
        self
    }
}
