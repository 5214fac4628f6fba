//! Timestamp adjustment orchestration.
//!
//! Validates the presented code, resolves the base time, and dispatches to
//! the rule for the matched capability class.

use crate::error::{EngineError, EngineResult};
use crate::models::{AdjustmentRequest, AdjustmentResult, Timestamp};
use crate::registry::{CapabilityClass, CodeRegistry};

use super::admin_override::apply_admin_override;
use super::backdate::apply_backdate;
use super::clock::Clock;
use super::fixed_start::apply_fixed_start;
use super::flexible_hours::apply_flexible_hours;

/// Evaluates one adjustment request against the registry.
///
/// The evaluation is pure apart from one clock read when `base_time` is
/// omitted; it holds no state and may run concurrently with any number of
/// other evaluations.
///
/// # Errors
///
/// - `CodeNotFound` — the code has no registry entry.
/// - `NotTimeApplicable` — the code's class has no temporal rule; checked
///   before the base time is parsed.
/// - `InvalidTimestamp` — `base_time` parses under no accepted form.
///
/// # Example
///
/// ```
/// use policy_engine::evaluation::{evaluate_adjustment, FixedClock};
/// use policy_engine::models::{AdjustmentRequest, Timestamp};
/// use policy_engine::registry::CodeRegistry;
///
/// let registry = CodeRegistry::builtin().unwrap();
/// let clock = FixedClock(Timestamp::parse("2025-06-15T10:00:00Z").unwrap());
///
/// let request = AdjustmentRequest {
///     code: "ts2024".to_string(),
///     base_time: Some("2025-06-15T10:00:00Z".to_string()),
/// };
/// let result = evaluate_adjustment(&registry, &request, &clock).unwrap();
/// assert_eq!(result.adjusted_time.to_string(), "2024-06-15T10:00:00+00:00");
/// ```
pub fn evaluate_adjustment(
    registry: &CodeRegistry,
    request: &AdjustmentRequest,
    clock: &dyn Clock,
) -> EngineResult<AdjustmentResult> {
    let policy = registry.lookup(&request.code)?;

    if !policy.class.is_time_applicable() {
        return Err(EngineError::NotTimeApplicable {
            code: policy.code.clone(),
            class: policy.class,
        });
    }

    let base_time = match request.base_time.as_deref() {
        Some(raw) => Timestamp::parse(raw)?,
        None => clock.now(),
    };

    let result = match policy.class {
        CapabilityClass::Backdate => {
            let rule = apply_backdate(base_time);
            AdjustmentResult::new(policy, base_time, rule.adjusted_time, rule.applied_rule)
        }
        CapabilityClass::FlexibleHours => {
            let rule = apply_flexible_hours(base_time);
            AdjustmentResult::new(policy, base_time, rule.adjusted_time, rule.applied_rule)
                .with_flexible_hours()
        }
        CapabilityClass::FixedStart => {
            let start = policy
                .fixed_start
                .ok_or_else(|| EngineError::AdjustmentError {
                    message: format!("fixed_start code '{}' has no configured time", policy.code),
                })?;
            let rule = apply_fixed_start(base_time, start)?;
            AdjustmentResult::new(policy, base_time, rule.adjusted_time, rule.applied_rule)
        }
        CapabilityClass::AdminOverride => {
            let rule = apply_admin_override(base_time);
            AdjustmentResult::new(policy, base_time, rule.adjusted_time, rule.applied_rule)
                .with_admin_override()
        }
        CapabilityClass::Casual | CapabilityClass::HealthWaiver => {
            return Err(EngineError::NotTimeApplicable {
                code: policy.code.clone(),
                class: policy.class,
            });
        }
    };

    Ok(result)
}
