//! Validation result model for the policy code engine.

use serde::{Deserialize, Serialize};

use crate::registry::{CapabilityClass, PolicyCode};

/// The outcome of validating a presented code against the registry.
///
/// An unrecognized code is a non-fatal validation failure, not an error:
/// the result carries `valid = false` and a human-readable message, and the
/// descriptor fields are absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeValidation {
    /// Whether the code was recognized.
    pub valid: bool,
    /// The matched code, echoed back after whitespace trimming.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// The capability class the code grants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capability_class: Option<CapabilityClass>,
    /// Human-readable description of the code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Class-specific parameters; only `fixed_start` codes contribute any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Value>,
    /// Failure message for unrecognized codes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CodeValidation {
    /// Builds the success outcome for a matched policy code.
    pub fn matched(policy: &PolicyCode) -> Self {
        let parameters = policy.fixed_start.map(|time| {
            serde_json::json!({
                "fixed_time": time.format("%H:%M").to_string(),
            })
        });

        Self {
            valid: true,
            code: Some(policy.code.clone()),
            capability_class: Some(policy.class),
            description: Some(policy.description.clone()),
            parameters,
            message: None,
        }
    }

    /// Builds the failure outcome for an unrecognized code.
    pub fn unrecognized() -> Self {
        Self {
            valid: false,
            code: None,
            capability_class: None,
            description: None,
            parameters: None,
            message: Some("Invalid policy code".to_string()),
        }
    }
}
