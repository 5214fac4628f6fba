//! Integration tests for the policy engine.
//!
//! This test suite covers the full HTTP surface and the engine properties:
//! - Code validation (known, unknown, case, whitespace)
//! - Backdate adjustment determinism
//! - Fixed-start date preservation
//! - Flexible-hours and admin-override pass-through
//! - Classified rejections (unknown code, wrong class, bad timestamp)
//! - Clock injection for omitted base times
//! - Concurrent evaluation independence

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use policy_engine::api::{AppState, create_router};
use policy_engine::evaluation::{FixedClock, evaluate_adjustment};
use policy_engine::models::{AdjustmentRequest, Timestamp};
use policy_engine::registry::CodeRegistry;

// =============================================================================
// Test Helpers
// =============================================================================

const CLOCK_TIME: &str = "2025-06-15T10:00:00Z";

fn create_test_state() -> AppState {
    let registry = CodeRegistry::builtin().expect("Failed to build registry");
    let clock = FixedClock(Timestamp::parse(CLOCK_TIME).unwrap());
    AppState::with_clock(registry, Arc::new(clock))
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn validate(router: Router, code: &str) -> (StatusCode, Value) {
    post_json(router, "/api/policy-codes/validate", json!({ "code": code })).await
}

async fn adjust(router: Router, code: &str, base_time: &str) -> (StatusCode, Value) {
    post_json(
        router,
        "/api/timestamp/adjust",
        json!({ "code": code, "base_time": base_time }),
    )
    .await
}

// =============================================================================
// Code validation
// =============================================================================

#[tokio::test]
async fn test_validate_backdate_code() {
    let (status, body) = validate(create_router_for_test(), "ts2024").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], true);
    assert_eq!(body["code"], "ts2024");
    assert_eq!(body["capability_class"], "backdate");
    assert_eq!(body["description"], "Backdated entry for 2024");
}

#[tokio::test]
async fn test_validate_fixed_start_code_exposes_parameters() {
    let (status, body) = validate(create_router_for_test(), "early9").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], true);
    assert_eq!(body["capability_class"], "fixed_start");
    assert_eq!(body["parameters"]["fixed_time"], "09:00");
}

#[tokio::test]
async fn test_validate_non_temporal_codes() {
    for (code, class) in [
        ("bm0123", "casual"),
        ("bm0789", "casual"),
        ("bm0111", "health_waiver"),
        ("bm0456", "health_waiver"),
    ] {
        let (status, body) = validate(create_router_for_test(), code).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid"], true, "code {} should be valid", code);
        assert_eq!(body["capability_class"], class);
        assert!(body.get("parameters").is_none());
    }
}

#[tokio::test]
async fn test_validate_unknown_code_is_invalid_with_200() {
    let (status, body) = validate(create_router_for_test(), "zz9999").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], false);
    assert!(body.get("capability_class").is_none());
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_validate_empty_code_is_invalid() {
    let (status, body) = validate(create_router_for_test(), "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], false);
}

#[tokio::test]
async fn test_validate_is_case_sensitive() {
    let (_, body) = validate(create_router_for_test(), "TS2024").await;
    assert_eq!(body["valid"], false);
}

#[tokio::test]
async fn test_validate_trims_whitespace() {
    let (_, padded) = validate(create_router_for_test(), " ts2024 ").await;
    let (_, exact) = validate(create_router_for_test(), "ts2024").await;

    assert_eq!(padded, exact);
}

#[tokio::test]
async fn test_validate_malformed_json_returns_400() {
    let router = create_router_for_test();
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/policy-codes/validate")
                .header("Content-Type", "application/json")
                .body(Body::from("{invalid json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "MALFORMED_JSON");
}

// =============================================================================
// Timestamp adjustment
// =============================================================================

#[tokio::test]
async fn test_adjust_backdate_is_exactly_365_days() {
    let (status, body) = adjust(create_router_for_test(), "ts2024", "2025-06-15T10:00:00Z").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], true);
    assert_eq!(body["original_time"], "2025-06-15T10:00:00+00:00");
    assert_eq!(body["adjusted_time"], "2024-06-15T10:00:00+00:00");
    assert_eq!(body["applied_rule"], "backdate");
    assert_eq!(body["capability_class"], "backdate");
}

#[tokio::test]
async fn test_adjust_fixed_start_preserves_date() {
    let (status, body) = adjust(create_router_for_test(), "early9", "2025-03-10T23:59:59Z").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["adjusted_time"], "2025-03-10T09:00:00+00:00");
    assert_eq!(body["applied_rule"], "fixed_start");
}

#[tokio::test]
async fn test_adjust_night_shift_code() {
    let (status, body) = adjust(create_router_for_test(), "night8", "2025-03-10T07:45:12Z").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["adjusted_time"], "2025-03-10T20:00:00+00:00");
}

#[tokio::test]
async fn test_adjust_fixed_start_on_leap_day() {
    let (status, body) = adjust(create_router_for_test(), "early9", "2024-02-29T22:10:05Z").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["adjusted_time"], "2024-02-29T09:00:00+00:00");
}

#[tokio::test]
async fn test_adjust_flexible_hours_leaves_time_unchanged() {
    let (status, body) = adjust(create_router_for_test(), "flex01", "2025-06-15T10:00:00Z").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["adjusted_time"], body["original_time"]);
    assert_eq!(body["applied_rule"], "flexible");
    assert_eq!(body["flexible_hours"], true);
    assert_eq!(body["admin_override"], false);
}

#[tokio::test]
async fn test_adjust_admin_override_leaves_time_unchanged() {
    let (status, body) = adjust(create_router_for_test(), "admin0", "2025-06-15T10:00:00Z").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["adjusted_time"], body["original_time"]);
    assert_eq!(body["applied_rule"], "admin_override");
    assert_eq!(body["admin_override"], true);
    assert_eq!(body["flexible_hours"], false);
}

#[tokio::test]
async fn test_adjust_preserves_nonzero_offset() {
    let (status, body) = adjust(create_router_for_test(), "ts2024", "2025-06-15T10:00:00+10:00").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["adjusted_time"], "2024-06-15T10:00:00+10:00");
}

#[tokio::test]
async fn test_adjust_naive_base_time_passes_through() {
    let (status, body) = adjust(create_router_for_test(), "early9", "2025-03-10T23:59:59").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["adjusted_time"], "2025-03-10T09:00:00");
}

#[tokio::test]
async fn test_adjust_backdate_does_not_clamp_before_epoch() {
    let (status, body) = adjust(create_router_for_test(), "ts2024", "1970-01-01T00:00:00Z").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["adjusted_time"], "1969-01-01T00:00:00+00:00");
}

#[tokio::test]
async fn test_adjust_omitted_base_time_uses_injected_clock() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/api/timestamp/adjust",
        json!({ "code": "ts2024" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["original_time"], "2025-06-15T10:00:00+00:00");
    assert_eq!(body["adjusted_time"], "2024-06-15T10:00:00+00:00");
}

// =============================================================================
// Classified rejections
// =============================================================================

#[tokio::test]
async fn test_adjust_unknown_code_rejected() {
    let (status, body) = adjust(create_router_for_test(), "zz9999", "2025-06-15T10:00:00Z").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "CODE_NOT_FOUND");
    assert!(body["message"].as_str().unwrap().contains("zz9999"));
}

#[tokio::test]
async fn test_adjust_non_temporal_codes_rejected() {
    for code in ["bm0123", "bm0789", "bm0111", "bm0456"] {
        let (status, body) = adjust(create_router_for_test(), code, "2025-06-15T10:00:00Z").await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "code {} should be rejected", code);
        assert_eq!(body["code"], "NOT_TIME_APPLICABLE");
    }
}

#[tokio::test]
async fn test_adjust_malformed_base_time_rejected_for_temporal_codes() {
    for code in ["ts2024", "flex01", "early9", "night8", "admin0"] {
        let (status, body) = adjust(create_router_for_test(), code, "not-a-date").await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "code {} should be rejected", code);
        assert_eq!(body["code"], "INVALID_TIMESTAMP");
    }
}

#[tokio::test]
async fn test_adjust_missing_code_field_returns_400() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/api/timestamp/adjust",
        json!({ "base_time": "2025-06-15T10:00:00Z" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["message"].as_str().unwrap().contains("missing field")
            || body["message"].as_str().unwrap().to_lowercase().contains("code")
    );
}

// =============================================================================
// Concurrency
// =============================================================================

#[tokio::test]
async fn test_1000_concurrent_adjustments_produce_identical_results() {
    let registry = Arc::new(CodeRegistry::builtin().unwrap());
    let clock = Arc::new(FixedClock(Timestamp::parse(CLOCK_TIME).unwrap()));
    let request = Arc::new(AdjustmentRequest {
        code: "early9".to_string(),
        base_time: Some("2025-03-10T23:59:59Z".to_string()),
    });

    let expected = evaluate_adjustment(&registry, &request, clock.as_ref()).unwrap();

    let handles: Vec<_> = (0..1000)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let clock = Arc::clone(&clock);
            let request = Arc::clone(&request);
            tokio::spawn(async move {
                evaluate_adjustment(&registry, &request, clock.as_ref()).unwrap()
            })
        })
        .collect();

    for handle in handles {
        let result = handle.await.unwrap();
        assert_eq!(result, expected);
    }
}

#[tokio::test]
async fn test_concurrent_mixed_codes_do_not_interfere() {
    let registry = Arc::new(CodeRegistry::builtin().unwrap());
    let clock = Arc::new(FixedClock(Timestamp::parse(CLOCK_TIME).unwrap()));

    let codes = ["ts2024", "flex01", "early9", "night8", "admin0"];
    let handles: Vec<_> = (0..500)
        .map(|i| {
            let registry = Arc::clone(&registry);
            let clock = Arc::clone(&clock);
            let code = codes[i % codes.len()].to_string();
            tokio::spawn(async move {
                let request = AdjustmentRequest {
                    code,
                    base_time: Some("2025-06-15T10:00:00Z".to_string()),
                };
                evaluate_adjustment(&registry, &request, clock.as_ref()).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.await.unwrap();
        assert_eq!(result.code, codes[i % codes.len()]);
        assert_eq!(
            result.original_time,
            Timestamp::parse("2025-06-15T10:00:00Z").unwrap()
        );
    }
}
