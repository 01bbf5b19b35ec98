//! User API integration tests
//!
//! Registration, login and profile routes without a database: validation
//! and authentication run, anything that needs storage answers 503.

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::{default_app, send, TestUser};
use crate::{assert_error, assert_status};

#[tokio::test]
async fn test_register_rejects_invalid_email() {
    let response = send(
        default_app(),
        Method::POST,
        "/api/users/register",
        None,
        Some(json!({ "name": "Ada", "email": "not-an-email", "password": "password123" })),
    )
    .await;

    assert_error!(response, StatusCode::BAD_REQUEST, "Invalid email format");
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    let response = send(
        default_app(),
        Method::POST,
        "/api/users/register",
        None,
        Some(json!({ "name": "Ada", "email": "ada@example.com", "password": "short" })),
    )
    .await;

    assert_status!(response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_without_database() {
    let response = send(
        default_app(),
        Method::POST,
        "/api/users/register",
        None,
        Some(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "password": "password123",
            "industry": "Technology"
        })),
    )
    .await;

    assert_error!(response, StatusCode::SERVICE_UNAVAILABLE, "Database not configured");
}

#[tokio::test]
async fn test_login_without_database() {
    let response = send(
        default_app(),
        Method::POST,
        "/api/users/login",
        None,
        Some(json!({ "email": "ada@example.com", "password": "password123" })),
    )
    .await;

    assert_status!(response, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_me_requires_token() {
    let response = send(default_app(), Method::GET, "/api/users/me", None, None).await;
    assert_status!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_rejects_invalid_token() {
    let response = send(
        default_app(),
        Method::GET,
        "/api/users/me",
        Some("Bearer not.a.token"),
        None,
    )
    .await;

    assert_status!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_rejects_non_bearer_scheme() {
    let user = TestUser::new();
    let response = send(
        default_app(),
        Method::GET,
        "/api/users/me",
        Some(&format!("Token {}", user.token)),
        None,
    )
    .await;

    assert_status!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_valid_token_reaches_handler() {
    let user = TestUser::new();
    let response = send(
        default_app(),
        Method::GET,
        "/api/users/me",
        Some(&user.bearer()),
        None,
    )
    .await;

    assert_status!(response, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_update_me_with_valid_token_reaches_handler() {
    let user = TestUser::new();
    let response = send(
        default_app(),
        Method::PUT,
        "/api/users/me",
        Some(&user.bearer()),
        Some(json!({ "headline": "Staff Engineer", "skills": ["Rust", "SQL"] })),
    )
    .await;

    assert_status!(response, StatusCode::SERVICE_UNAVAILABLE);
}
