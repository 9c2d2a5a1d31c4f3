//! Token and role enforcement through the real router.
//!
//! Every request here must be rejected before the (lazily-connecting,
//! unreachable) pool is touched: a failure would surface as a 503, so these
//! assertions also prove no storage access happens on the rejection paths.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{bearer_for, build_test_app, send_json, TEST_JWT_SECRET};

use lexcase_api::auth::jwt::{generate_access_token, JwtConfig};

// ---------------------------------------------------------------------------
// Token validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_authorization_header_returns_401() {
    let app = build_test_app();
    let (status, body) = send_json(app, "GET", "/api/v1/cases", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "UNAUTHORIZED");
    assert_eq!(body["message"], "Missing Authorization header");
}

#[tokio::test]
async fn non_bearer_scheme_returns_401() {
    let app = build_test_app();
    let (status, body) =
        send_json(app, "GET", "/api/v1/cases", Some("Basic dXNlcjpwdw=="), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn garbage_token_returns_401() {
    let app = build_test_app();
    let (status, body) =
        send_json(app, "GET", "/api/v1/cases", Some("Bearer not-a-jwt"), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid or expired token");
}

#[tokio::test]
async fn expired_token_returns_401() {
    // Negative expiry puts `exp` in the past (well beyond the 60 s leeway).
    let expired_config = JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        access_token_expiry_mins: -10,
    };
    let token = generate_access_token(1, "admin", &expired_config).unwrap();

    let app = build_test_app();
    let (status, body) = send_json(
        app,
        "GET",
        "/api/v1/cases",
        Some(&format!("Bearer {token}")),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid or expired token");
}

#[tokio::test]
async fn token_signed_with_other_secret_returns_401() {
    let other = JwtConfig {
        secret: "some-other-deployment-secret".to_string(),
        access_token_expiry_mins: 60,
    };
    let token = generate_access_token(1, "admin", &other).unwrap();

    let app = build_test_app();
    let (status, _) = send_json(
        app,
        "GET",
        "/api/v1/cases",
        Some(&format!("Bearer {token}")),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Role enforcement (403 before any body validation or storage access)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn client_cannot_create_case_type() {
    let app = build_test_app();
    let (status, body) = send_json(
        app,
        "POST",
        "/api/v1/case-types",
        Some(&bearer_for(9, "client")),
        Some(json!({"name": "Tax"})),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "FORBIDDEN");
    assert_eq!(body["message"], "Admin role required");
}

#[tokio::test]
async fn lawyer_cannot_create_case_type() {
    // Case types are admin-managed; even staff below admin are rejected.
    let app = build_test_app();
    let (status, _) = send_json(
        app,
        "POST",
        "/api/v1/case-types",
        Some(&bearer_for(3, "lawyer")),
        Some(json!({"name": "Tax"})),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn client_cannot_create_client_record() {
    let app = build_test_app();
    let (status, body) = send_json(
        app,
        "POST",
        "/api/v1/clients",
        Some(&bearer_for(9, "client")),
        Some(json!({"name": "Acme", "email": "acme@example.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Staff role required");
}

#[tokio::test]
async fn lawyer_cannot_issue_invoice() {
    let app = build_test_app();
    let (status, body) = send_json(
        app,
        "POST",
        "/api/v1/invoices",
        Some(&bearer_for(3, "lawyer")),
        Some(json!({"case_id": 1, "reference": "INV-1", "amount_cents": 100})),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Partner or Admin role required");
}

#[tokio::test]
async fn client_cannot_list_users() {
    let app = build_test_app();
    let (status, _) = send_json(
        app,
        "GET",
        "/api/v1/users",
        Some(&bearer_for(9, "client")),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn partner_cannot_read_activity_log() {
    let app = build_test_app();
    let (status, _) = send_json(
        app,
        "GET",
        "/api/v1/activity",
        Some(&bearer_for(2, "partner")),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn unknown_role_is_not_staff() {
    // A token with a role outside the known set gets no staff access.
    let app = build_test_app();
    let (status, _) = send_json(
        app,
        "POST",
        "/api/v1/clients",
        Some(&bearer_for(5, "paralegal")),
        Some(json!({"name": "Acme", "email": "acme@example.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Misc routing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = build_test_app();
    let (status, _) = send_json(
        app,
        "GET",
        "/api/v1/retainers",
        Some(&bearer_for(1, "admin")),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn login_is_reachable_without_a_token() {
    // Missing credentials are a validation failure, not an auth failure:
    // the public login route is reachable with no bearer token.
    let app = build_test_app();
    let (status, body) = send_json(
        app,
        "POST",
        "/api/v1/auth/login",
        None,
        Some(json!({"username": "", "password": ""})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION");
}
