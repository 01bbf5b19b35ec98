//! LinkedIn API integration tests

use axum::http::{Method, StatusCode};
use postpilot::shared::config::AppConfig;
use serde_json::json;
use std::sync::Arc;

use crate::common::{default_app, send, test_app, CannedGenerator, TestUser};
use crate::{assert_contains, assert_error, assert_status};

fn configured_app() -> axum::Router {
    let config = AppConfig::builder()
        .linkedin_client_id("client-abc".to_string())
        .linkedin_client_secret("secret".to_string())
        .build()
        .unwrap();
    test_app(config, Arc::new(CannedGenerator::new(Vec::new())))
}

#[tokio::test]
async fn test_connect_returns_authorization_url() {
    let user = TestUser::new();
    let response = send(
        configured_app(),
        Method::GET,
        "/api/linkedin/connect",
        Some(&user.bearer()),
        None,
    )
    .await;

    assert_status!(response, StatusCode::OK);
    let url = response.body["authorization_url"].as_str().unwrap();
    assert_contains!(url, "https://www.linkedin.com/oauth/v2/authorization?");
    assert_contains!(url, "client_id=client-abc");
    assert_contains!(url, "w_member_social");
}

#[tokio::test]
async fn test_connect_without_client_id() {
    let user = TestUser::new();
    let response = send(
        default_app(),
        Method::GET,
        "/api/linkedin/connect",
        Some(&user.bearer()),
        None,
    )
    .await;

    assert_error!(
        response,
        StatusCode::INTERNAL_SERVER_ERROR,
        "LinkedIn Client ID not configured"
    );
}

#[tokio::test]
async fn test_publish_requires_token() {
    let response = send(
        configured_app(),
        Method::POST,
        "/api/linkedin/publish",
        None,
        Some(json!({ "content": "Hello LinkedIn" })),
    )
    .await;

    assert_status!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_status_without_database() {
    let user = TestUser::new();
    let response = send(
        configured_app(),
        Method::GET,
        "/api/linkedin/status",
        Some(&user.bearer()),
        None,
    )
    .await;

    assert_status!(response, StatusCode::SERVICE_UNAVAILABLE);
}
