//! Answer evaluation API tests.

mod common;

use answer_core::MatchPolicy;
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use common::fixtures;
use common::TestContext;

#[tokio::test]
async fn test_health_check() {
    let server = TestContext::new().server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "OK");
}

#[tokio::test]
async fn test_evaluate_exact_alias() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/answers/evaluate")
        .json(&fixtures::answer_request("javascript", "JS/JavaScript"))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["accepted"], true);
    assert_eq!(body["match_type"], "exact");
    assert_eq!(body["matched_answer"], "javascript");
    assert_eq!(body["criteria_label"], "exact match");
    assert_eq!(body["used_tolerance"], false);
    assert_eq!(body["threshold"], 1.0);
}

#[tokio::test]
async fn test_evaluate_compact_match_uses_tolerance() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/answers/evaluate")
        .json(&fixtures::answer_request("spring boot", "Spring-Boot"))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["accepted"], true);
    assert_eq!(body["match_type"], "compact");
    assert_eq!(body["used_tolerance"], true);
    assert_eq!(body["user_answer"], "spring boot");
    assert_eq!(body["normalized_user_answer"], "spring boot");
}

#[tokio::test]
async fn test_evaluate_empty_answer() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/answers/evaluate")
        .json(&fixtures::answer_request("   ", "42"))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["accepted"], false);
    assert_eq!(body["match_type"], "none");
    assert_eq!(body["criteria_label"], "no answer submitted");
    assert!(body["threshold"].is_null());
}

#[tokio::test]
async fn test_evaluate_missing_user_answer_defaults_to_empty() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/answers/evaluate")
        .json(&json!({ "reference": "42" }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["criteria_label"], "no answer submitted");
}

#[tokio::test]
async fn test_evaluate_missing_reference_is_rejected() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/answers/evaluate")
        .json(&json!({ "user_answer": "42" }))
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_check_numeric_tolerance() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/answers/check")
        .json(&fixtures::answer_request("3.15", "3.14"))
        .await;
    response.assert_status_ok();
    response.assert_json(&json!({ "accepted": true }));

    let response = server
        .post("/api/answers/check")
        .json(&fixtures::answer_request("3.16", "3.14"))
        .await;
    response.assert_status_ok();
    response.assert_json(&json!({ "accepted": false }));
}

#[tokio::test]
async fn test_check_uses_configured_policy() {
    let server = TestContext::with_policy(MatchPolicy {
        numeric_tolerance: 0.5,
        ..MatchPolicy::default()
    })
    .server();

    let response = server
        .post("/api/answers/check")
        .json(&fixtures::answer_request("9.6", "10"))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "accepted": true }));
}
