//! LinkedIn client tests
//!
//! The client is pointed at a wiremock server through
//! `AppConfigBuilder::linkedin_base_url`.

use postpilot::backend::linkedin::{person_urn, LinkedInClient, LinkedInError};
use postpilot::shared::config::AppConfig;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> LinkedInClient {
    let config = AppConfig::builder()
        .linkedin_client_id("client-abc".to_string())
        .linkedin_client_secret("secret-xyz".to_string())
        .linkedin_base_url(&server.uri())
        .build()
        .unwrap();
    LinkedInClient::new(config.linkedin)
}

#[tokio::test]
async fn test_exchange_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/v2/accessToken"))
        .and(body_string_contains("grant_type=authorization_code"))
        .and(body_string_contains("code=auth-code-1"))
        .and(body_string_contains("client_secret=secret-xyz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "token-123",
            "expires_in": 5184000
        })))
        .expect(1)
        .mount(&server)
        .await;

    let token = client_for(&server).exchange_code("auth-code-1").await.unwrap();
    assert_eq!(token.access_token, "token-123");
    assert_eq!(token.expires_in, Some(5184000));
}

#[tokio::test]
async fn test_exchange_code_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/v2/accessToken"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).exchange_code("stale").await.unwrap_err();
    assert!(matches!(err, LinkedInError::TokenExchange(_)));
}

#[tokio::test]
async fn test_fetch_profile() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/userinfo"))
        .and(header("authorization", "Bearer token-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sub": "member-42",
            "email": "ada@example.com",
            "name": "Ada Lovelace"
        })))
        .mount(&server)
        .await;

    let profile = client_for(&server).fetch_profile("token-123").await.unwrap();
    assert_eq!(profile.sub, "member-42");
    assert_eq!(profile.email.as_deref(), Some("ada@example.com"));
    assert_eq!(profile.headline, None);
}

#[tokio::test]
async fn test_publish_reads_id_from_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/ugcPosts"))
        .and(header("X-Restli-Protocol-Version", "2.0.0"))
        .and(body_partial_json(json!({
            "author": "urn:li:person:member-42",
            "lifecycleState": "PUBLISHED"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "urn:li:share:7000"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let published = client_for(&server)
        .publish("token-123", &person_urn("member-42"), "Hello LinkedIn")
        .await
        .unwrap();

    assert_eq!(published.post_id, "urn:li:share:7000");
    assert_eq!(
        published.linkedin_url,
        "https://www.linkedin.com/feed/update/urn:li:share:7000"
    );
}

#[tokio::test]
async fn test_publish_falls_back_to_restli_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/ugcPosts"))
        .respond_with(
            ResponseTemplate::new(201).insert_header("x-restli-id", "urn:li:share:8000"),
        )
        .mount(&server)
        .await;

    let published = client_for(&server)
        .publish("token-123", &person_urn("member-42"), "Hello again")
        .await
        .unwrap();

    assert_eq!(published.post_id, "urn:li:share:8000");
}

#[tokio::test]
async fn test_publish_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/ugcPosts"))
        .respond_with(ResponseTemplate::new(422).set_body_string("duplicate content"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .publish("token-123", &person_urn("member-42"), "Hello")
        .await
        .unwrap_err();

    match err {
        LinkedInError::Publish(message) => assert!(message.contains("duplicate content")),
        other => panic!("Expected Publish error, got {:?}", other),
    }
}
