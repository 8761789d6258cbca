//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct HTTP
//! status code, error code, and message. They do NOT need an HTTP server --
//! they call `IntoResponse` directly on `AppError` values.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use roster_api::error::AppError;
use roster_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Employee",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Employee with id 42 not found");
}

#[tokio::test]
async fn conflict_error_returns_500_with_conflict_code() {
    let err = AppError::Core(CoreError::Conflict(
        "Employee already exists with email: anuj@gmail.com".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(
        json["error"],
        "Employee already exists with email: anuj@gmail.com"
    );
}

#[tokio::test]
async fn invalid_operation_returns_500_with_its_own_code() {
    let err = AppError::Core(CoreError::InvalidOperation(
        "The email of the employee cannot be updated".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INVALID_OPERATION");
    assert_eq!(json["error"], "The email of the employee cannot be updated");
}

#[tokio::test]
async fn storage_error_returns_500_and_sanitizes_message() {
    let err = AppError::Core(CoreError::Storage(
        "connection to 10.0.0.5:5432 refused".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid field value");
}

#[test]
fn core_error_converts_via_from() {
    let err: AppError = CoreError::Conflict("dup".into()).into();
    assert!(matches!(err, AppError::Core(CoreError::Conflict(_))));
}
