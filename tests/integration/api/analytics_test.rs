//! Analytics API integration tests

use axum::http::{Method, StatusCode};
use serde_json::json;
use uuid::Uuid;

use crate::common::{default_app, send, TestUser};
use crate::{assert_error, assert_status};

#[tokio::test]
async fn test_dashboard_requires_token() {
    let response = send(default_app(), Method::GET, "/api/analytics/dashboard", None, None).await;
    assert_status!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_dashboard_without_database() {
    let user = TestUser::new();
    let response = send(
        default_app(),
        Method::GET,
        "/api/analytics/dashboard",
        Some(&user.bearer()),
        None,
    )
    .await;

    assert_error!(response, StatusCode::SERVICE_UNAVAILABLE, "Database not configured");
}

#[tokio::test]
async fn test_trends_reject_non_positive_days() {
    let user = TestUser::new();
    let response = send(
        default_app(),
        Method::GET,
        "/api/analytics/performance-trends?days=-3",
        Some(&user.bearer()),
        None,
    )
    .await;

    assert_error!(response, StatusCode::BAD_REQUEST, "days must be positive");
}

#[tokio::test]
async fn test_update_without_database() {
    let user = TestUser::new();
    let uri = format!("/api/analytics/update/{}", Uuid::new_v4());
    let response = send(
        default_app(),
        Method::POST,
        &uri,
        Some(&user.bearer()),
        Some(json!({ "likes_count": 10, "impressions": 400 })),
    )
    .await;

    assert_status!(response, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_trends_reject_out_of_range_days() {
    let user = TestUser::new();
    let response = send(
        default_app(),
        Method::GET,
        "/api/analytics/performance-trends?days=100000000",
        Some(&user.bearer()),
        None,
    )
    .await;

    assert_error!(response, StatusCode::BAD_REQUEST, "days is out of range");
}
