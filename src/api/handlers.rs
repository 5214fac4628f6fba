//! HTTP request handlers for the policy engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::evaluation::{evaluate_adjustment, validate_code};
use crate::models::AdjustmentRequest;

use super::request::{AdjustTimestampRequest, ValidateCodeRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/policy-codes/validate", post(validate_handler))
        .route("/api/timestamp/adjust", post(adjust_handler))
        .with_state(state)
}

/// Health check response body.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    timestamp: String,
}

/// Handler for GET /api/health.
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: state.clock().now().to_string(),
    })
}

/// Converts a JSON extraction rejection into a structured 400 response.
fn json_rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for POST /api/policy-codes/validate.
///
/// Resolves registry membership and class for a presented code. An
/// unrecognized code is a 200 with `valid = false`, not an error.
async fn validate_handler(
    State(state): State<AppState>,
    payload: Result<Json<ValidateCodeRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = json_rejection_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let validation = validate_code(state.registry(), &request.code);
    if validation.valid {
        info!(
            correlation_id = %correlation_id,
            code = %request.code.trim(),
            class = ?validation.capability_class,
            "Valid policy code presented"
        );
    } else {
        warn!(
            correlation_id = %correlation_id,
            code = %request.code.trim(),
            "Unrecognized policy code presented"
        );
    }

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(validation),
    )
        .into_response()
}

/// Handler for POST /api/timestamp/adjust.
///
/// Accepts a code and optional base time, and returns the adjusted
/// timestamp computed by the rule for the code's capability class.
async fn adjust_handler(
    State(state): State<AppState>,
    payload: Result<Json<AdjustTimestampRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = json_rejection_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let request: AdjustmentRequest = request.into();
    match evaluate_adjustment(state.registry(), &request, state.clock()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                code = %result.code,
                applied_rule = %result.applied_rule,
                original_time = %result.original_time,
                adjusted_time = %result.adjusted_time,
                "Timestamp adjustment applied"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                code = %request.code,
                error = %err,
                "Timestamp adjustment rejected"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}
