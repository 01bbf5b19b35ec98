//! Content API integration tests

use axum::http::{Method, StatusCode};
use postpilot::shared::config::AppConfig;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

use crate::common::{default_app, send, test_app, CannedGenerator, TestUser};
use crate::{assert_error, assert_status};

#[tokio::test]
async fn test_suggestions_are_public() {
    let generator = Arc::new(CannedGenerator::new(vec![Some(
        "Platform engineering wins\n- a bullet to drop\nObservability budgets\n\nOpen source funding",
    )]));
    let app = test_app(AppConfig::default(), generator.clone());

    let response = send(app, Method::GET, "/api/content/suggestions/Technology", None, None).await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["industry"], "Technology");
    assert_eq!(
        response.body["suggestions"],
        json!(["Platform engineering wins", "Observability budgets", "Open source funding"])
    );
    assert_eq!(generator.calls(), 1);
    crate::assert_contains!(generator.prompt(0), "Technology");
}

#[tokio::test]
async fn test_suggestions_fall_back_when_model_fails() {
    let response = send(
        default_app(),
        Method::GET,
        "/api/content/suggestions/Marketing",
        None,
        None,
    )
    .await;

    assert_status!(response, StatusCode::OK);
    let suggestions = response.body["suggestions"].as_array().unwrap();
    assert_eq!(suggestions.len(), 5);
    assert_eq!(suggestions[0], "Social media marketing trends");
}

#[tokio::test]
async fn test_generate_requires_token() {
    let response = send(
        default_app(),
        Method::POST,
        "/api/content/generate",
        None,
        Some(json!({ "topic": "Rust in production" })),
    )
    .await;

    assert_status!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_generate_rejects_zero_budget() {
    let user = TestUser::new();
    let response = send(
        default_app(),
        Method::POST,
        "/api/content/generate",
        Some(&user.bearer()),
        Some(json!({ "topic": "Rust in production", "max_characters": 0 })),
    )
    .await;

    assert_error!(response, StatusCode::BAD_REQUEST, "Invalid character budget: 0");
}

#[tokio::test]
async fn test_generate_without_database() {
    let user = TestUser::new();
    let response = send(
        default_app(),
        Method::POST,
        "/api/content/generate",
        Some(&user.bearer()),
        Some(json!({ "topic": "Rust in production", "max_characters": null })),
    )
    .await;

    assert_status!(response, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_improve_rejects_unknown_suggestion_type() {
    let user = TestUser::new();
    let response = send(
        default_app(),
        Method::POST,
        "/api/content/improve",
        Some(&user.bearer()),
        Some(json!({ "content": "A post.", "suggestion_type": "translate" })),
    )
    .await;

    assert_status!(response, StatusCode::BAD_REQUEST);
    crate::assert_contains!(response.body["error"].as_str().unwrap(), "translate");
}

#[tokio::test]
async fn test_improve_rejects_negative_budget() {
    let user = TestUser::new();
    let response = send(
        default_app(),
        Method::POST,
        "/api/content/improve",
        Some(&user.bearer()),
        Some(json!({ "content": "A post.", "suggestion_type": "shorten", "max_characters": -1 })),
    )
    .await;

    assert_error!(response, StatusCode::BAD_REQUEST, "Invalid character budget: -1");
}

#[tokio::test]
async fn test_drafts_require_database() {
    let user = TestUser::new();
    let response = send(
        default_app(),
        Method::GET,
        "/api/content/drafts",
        Some(&user.bearer()),
        None,
    )
    .await;

    assert_error!(response, StatusCode::SERVICE_UNAVAILABLE, "Database not configured");
}
