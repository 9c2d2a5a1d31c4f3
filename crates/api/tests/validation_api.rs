//! Body validation through the real router: every case here must produce a
//! 400 before any storage access (the test pool cannot connect, so a path
//! that touched storage would fail with 503 instead -- the assertions below
//! double as no-write proofs).

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{bearer_for, build_test_app, send_json};

// ---------------------------------------------------------------------------
// Missing / empty mandatory fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_case_type_with_missing_name_returns_400() {
    let app = build_test_app();
    let (status, body) = send_json(
        app,
        "POST",
        "/api/v1/case-types",
        Some(&bearer_for(1, "admin")),
        Some(json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION");
}

#[tokio::test]
async fn create_case_type_with_empty_name_returns_400() {
    let app = build_test_app();
    let (status, body) = send_json(
        app,
        "POST",
        "/api/v1/case-types",
        Some(&bearer_for(1, "admin")),
        Some(json!({"name": "   "})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "name is required");
}

#[tokio::test]
async fn create_case_without_reference_returns_400() {
    let app = build_test_app();
    let (status, _) = send_json(
        app,
        "POST",
        "/api/v1/cases",
        Some(&bearer_for(3, "lawyer")),
        Some(json!({"title": "Estate of Doe", "client_id": 1, "case_type_id": 1, "reference": ""})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn send_message_with_empty_body_returns_400() {
    let app = build_test_app();
    let (status, body) = send_json(
        app,
        "POST",
        "/api/v1/messages",
        Some(&bearer_for(9, "client")),
        Some(json!({"recipient_id": 3, "body": ""})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "body is required");
}

#[tokio::test]
async fn malformed_json_body_returns_400() {
    // A body that fails to decode is a validation error (400), not a 422.
    let app = build_test_app();
    let (status, body) = send_json(
        app,
        "POST",
        "/api/v1/case-types",
        Some(&bearer_for(1, "admin")),
        Some(json!({"name": 17})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION");
}

// ---------------------------------------------------------------------------
// Field-format validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_client_with_bad_email_returns_400() {
    let app = build_test_app();
    let (status, body) = send_json(
        app,
        "POST",
        "/api/v1/clients",
        Some(&bearer_for(2, "partner")),
        Some(json!({"name": "Acme LLC", "email": "bad-email"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("not a valid email address"));
}

#[tokio::test]
async fn update_client_with_bad_email_returns_400() {
    // The generic client update validates email format exactly like the
    // profile path.
    let app = build_test_app();
    let (status, _) = send_json(
        app,
        "PUT",
        "/api/v1/clients/5",
        Some(&bearer_for(2, "partner")),
        Some(json!({"name": "A", "email": "bad-email"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_profile_with_bad_email_returns_400() {
    let app = build_test_app();
    let (status, _) = send_json(
        app,
        "PUT",
        "/api/v1/profile",
        Some(&bearer_for(9, "client")),
        Some(json!({"email": "no-at-sign"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_case_with_unknown_status_returns_400() {
    let app = build_test_app();
    let (status, body) = send_json(
        app,
        "POST",
        "/api/v1/cases",
        Some(&bearer_for(3, "lawyer")),
        Some(json!({
            "reference": "C-2026-001",
            "title": "Estate of Doe",
            "client_id": 1,
            "case_type_id": 1,
            "status": "archived"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("status"));
}

#[tokio::test]
async fn create_invoice_with_negative_amount_returns_400() {
    let app = build_test_app();
    let (status, body) = send_json(
        app,
        "POST",
        "/api/v1/invoices",
        Some(&bearer_for(2, "partner")),
        Some(json!({"case_id": 1, "reference": "INV-9", "amount_cents": -500})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("amount_cents"));
}

#[tokio::test]
async fn create_schedule_with_inverted_range_returns_400() {
    let app = build_test_app();
    let (status, body) = send_json(
        app,
        "POST",
        "/api/v1/schedules",
        Some(&bearer_for(3, "lawyer")),
        Some(json!({
            "title": "Hearing",
            "starts_at": "2026-03-02T10:00:00Z",
            "ends_at": "2026-03-02T09:00:00Z"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "ends_at must be after starts_at");
}

#[tokio::test]
async fn schedule_window_with_bogus_bound_returns_400() {
    let app = build_test_app();
    let (status, body) = send_json(
        app,
        "GET",
        "/api/v1/schedules?start=not-a-date&end=2026-03-31",
        Some(&bearer_for(3, "lawyer")),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("not a valid date or timestamp"));
}

#[tokio::test]
async fn create_user_with_weak_password_returns_400() {
    let app = build_test_app();
    let (status, body) = send_json(
        app,
        "POST",
        "/api/v1/users",
        Some(&bearer_for(1, "admin")),
        Some(json!({
            "username": "jdoe",
            "email": "jdoe@firm.example",
            "password": "short",
            "full_name": "Jane Doe",
            "role": "lawyer"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("at least"));
}

#[tokio::test]
async fn create_user_with_unknown_role_returns_400() {
    let app = build_test_app();
    let (status, body) = send_json(
        app,
        "POST",
        "/api/v1/users",
        Some(&bearer_for(1, "admin")),
        Some(json!({
            "username": "jdoe",
            "email": "jdoe@firm.example",
            "password": "a-long-enough-password",
            "full_name": "Jane Doe",
            "role": "janitor"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("role"));
}
