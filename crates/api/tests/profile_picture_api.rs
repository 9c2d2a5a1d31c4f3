//! Upload policy through the real router: disallowed extensions and
//! oversized payloads are rejected with 400 before any filesystem write or
//! storage access.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use common::{bearer_for, build_test_app};

const BOUNDARY: &str = "lexcase-test-boundary-7MA4YWxkTrZu0gW";

/// Build a single-part multipart body carrying a `file` part.
fn multipart_file_body(filename: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

async fn upload_picture(
    auth: Option<&str>,
    filename: &str,
    data: &[u8],
) -> (StatusCode, serde_json::Value) {
    let app = build_test_app();

    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/v1/profile/picture")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
    if let Some(auth) = auth {
        builder = builder.header("authorization", auth);
    }
    let request = builder
        .body(Body::from(multipart_file_body(filename, data)))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn upload_without_token_returns_401() {
    let (status, body) = upload_picture(None, "me.png", b"png-bytes").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn disallowed_extension_is_rejected_before_any_write() {
    let owner_id = 424_242;
    let (status, body) =
        upload_picture(Some(&bearer_for(owner_id, "lawyer")), "payload.exe", b"MZ").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION");
    assert!(body["message"].as_str().unwrap().contains(".exe"));

    // Nothing was written for this owner.
    let dir = common::test_config().uploads.profile_pictures_dir();
    for ext in ["exe", "jpg", "jpeg", "png", "webp"] {
        assert!(!dir.join(format!("{owner_id}.{ext}")).exists());
    }
}

#[tokio::test]
async fn oversized_picture_is_rejected_before_any_write() {
    let owner_id = 424_243;
    let oversized = vec![0u8; lexcase_core::uploads::MAX_UPLOAD_BYTES + 1];
    let (status, body) =
        upload_picture(Some(&bearer_for(owner_id, "client")), "me.png", &oversized).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("maximum upload size"));

    let dir = common::test_config().uploads.profile_pictures_dir();
    assert!(!dir.join(format!("{owner_id}.png")).exists());
}

#[tokio::test]
async fn filename_without_extension_is_rejected() {
    let (status, body) = upload_picture(Some(&bearer_for(7, "partner")), "avatar", b"data").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION");
}

#[tokio::test]
async fn missing_file_part_is_rejected() {
    let app = build_test_app();

    // A multipart body with only an unrelated part.
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(b"Content-Disposition: form-data; name=\"comment\"\r\n\r\nhello\r\n");
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/profile/picture")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .header("authorization", bearer_for(7, "partner"))
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
