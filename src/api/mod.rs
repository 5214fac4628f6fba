//! HTTP API module for the policy engine.
//!
//! This module provides the REST endpoints for validating policy codes
//! and computing timestamp adjustments.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AdjustTimestampRequest, ValidateCodeRequest};
pub use response::ApiError;
pub use state::AppState;
