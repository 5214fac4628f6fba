//! Policy code descriptor types.
//!
//! This module defines the [`CapabilityClass`] enumeration and the
//! [`PolicyCode`] descriptor held by the registry.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// The closed category of behavior a policy code grants.
///
/// The class determines which timestamp adjustment rule, if any, applies
/// when the code is presented to the adjustment endpoint.
///
/// # Example
///
/// ```
/// use policy_engine::registry::CapabilityClass;
///
/// assert!(CapabilityClass::Backdate.is_time_applicable());
/// assert!(!CapabilityClass::Casual.is_time_applicable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityClass {
    /// Relaxed dress code or break arrangements; no temporal rule.
    Casual,
    /// Health monitoring or attendance requirement waived; no temporal rule.
    HealthWaiver,
    /// Shifts the base timestamp into the past by a fixed offset.
    Backdate,
    /// Flags flexible-hours tolerance downstream; time is unchanged.
    FlexibleHours,
    /// Replaces the time-of-day with a configured constant start time.
    FixedStart,
    /// Accepts the caller-supplied timestamp as authoritative; time is unchanged.
    AdminOverride,
}

impl CapabilityClass {
    /// Returns true if a timestamp adjustment rule exists for this class.
    ///
    /// `Casual` and `HealthWaiver` are non-temporal capability grants;
    /// presenting them to the adjustment endpoint is a caller error.
    pub fn is_time_applicable(&self) -> bool {
        matches!(
            self,
            CapabilityClass::Backdate
                | CapabilityClass::FlexibleHours
                | CapabilityClass::FixedStart
                | CapabilityClass::AdminOverride
        )
    }
}

impl std::fmt::Display for CapabilityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            CapabilityClass::Casual => "casual",
            CapabilityClass::HealthWaiver => "health_waiver",
            CapabilityClass::Backdate => "backdate",
            CapabilityClass::FlexibleHours => "flexible_hours",
            CapabilityClass::FixedStart => "fixed_start",
            CapabilityClass::AdminOverride => "admin_override",
        };
        write!(f, "{}", token)
    }
}

/// An immutable policy code descriptor.
///
/// Descriptors are defined at process start and never created or destroyed
/// at runtime. Only `FixedStart` codes carry a parameter: the time-of-day
/// that replaces the hour and minute of the base timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyCode {
    /// The short opaque lookup key, unique within the registry.
    pub code: String,
    /// The capability class this code grants.
    pub class: CapabilityClass,
    /// Human-readable text; descriptive only, carries no behavior.
    pub description: String,
    /// The configured start time. Present iff `class` is `FixedStart`;
    /// validated as a legal time of day at registry construction.
    pub fixed_start: Option<NaiveTime>,
}
