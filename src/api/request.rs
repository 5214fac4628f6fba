//! Request types for the policy engine API.
//!
//! This module defines the JSON request structures for the validate and
//! adjust endpoints.

use serde::{Deserialize, Serialize};

use crate::models::AdjustmentRequest;

/// Request body for the `/api/policy-codes/validate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateCodeRequest {
    /// The policy code to look up.
    pub code: String,
}

/// Request body for the `/api/timestamp/adjust` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustTimestampRequest {
    /// The policy code authorizing the adjustment.
    pub code: String,
    /// The base timestamp; the server's current time when omitted.
    #[serde(default)]
    pub base_time: Option<String>,
}

impl From<AdjustTimestampRequest> for AdjustmentRequest {
    fn from(req: AdjustTimestampRequest) -> Self {
        AdjustmentRequest {
            code: req.code,
            base_time: req.base_time,
        }
    }
}
