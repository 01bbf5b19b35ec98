//! LinkedIn Integration
//!
//! OAuth connection flow and post publishing against the LinkedIn REST API.
//!
//! # Module Structure
//!
//! ```text
//! linkedin/
//! ├── mod.rs        - LinkedInClient and LinkedInError
//! ├── oauth.rs      - Authorization URL, code exchange, userinfo profile
//! ├── publisher.rs  - UGC post publishing
//! └── handlers.rs   - /api/linkedin/* handlers
//! ```
//!
//! All endpoints are taken from `LinkedInConfig`, so tests can point the
//! client at a mock server.

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::config::LinkedInConfig;

/// OAuth flow
pub mod oauth;

/// Post publishing
pub mod publisher;

/// HTTP handlers
pub mod handlers;

pub use oauth::{LinkedInProfile, TokenResponse};
pub use publisher::PublishedPost;

/// Errors reported by the LinkedIn integration
#[derive(Debug, Error)]
pub enum LinkedInError {
    /// `LINKEDIN_CLIENT_ID` or `LINKEDIN_CLIENT_SECRET` is missing
    #[error("LinkedIn Client ID not configured")]
    NotConfigured,

    /// The user has no LinkedIn access token
    #[error("LinkedIn not connected. Please connect your LinkedIn account first.")]
    NotConnected,

    #[error("Token exchange failed: {0}")]
    TokenExchange(String),

    #[error("Failed to fetch profile: {0}")]
    Profile(String),

    #[error("LinkedIn publishing failed: {0}")]
    Publish(String),

    /// A configured endpoint is not a valid URL
    #[error("Invalid LinkedIn URL: {0}")]
    InvalidUrl(String),
}

impl LinkedInError {
    /// HTTP status used when this error reaches a client
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotConfigured | Self::InvalidUrl(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotConnected | Self::TokenExchange(_) | Self::Profile(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Publish(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

/// HTTP client for the LinkedIn API
#[derive(Debug, Clone)]
pub struct LinkedInClient {
    http: reqwest::Client,
    config: LinkedInConfig,
}

impl LinkedInClient {
    pub fn new(config: LinkedInConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &LinkedInConfig {
        &self.config
    }

    fn client_id(&self) -> Result<&str, LinkedInError> {
        self.config
            .client_id
            .as_deref()
            .ok_or(LinkedInError::NotConfigured)
    }

    fn client_secret(&self) -> Result<&str, LinkedInError> {
        self.config
            .client_secret
            .as_deref()
            .ok_or(LinkedInError::NotConfigured)
    }
}

/// Member URN used as the author of published posts
pub fn person_urn(linkedin_id: &str) -> String {
    format!("urn:li:person:{}", linkedin_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_urn() {
        assert_eq!(person_urn("abc123"), "urn:li:person:abc123");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(LinkedInError::NotConfigured.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(LinkedInError::NotConnected.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            LinkedInError::Publish("boom".to_string()).status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_missing_credentials() {
        let client = LinkedInClient::new(LinkedInConfig::default());
        assert!(matches!(client.client_id(), Err(LinkedInError::NotConfigured)));
        assert!(matches!(client.client_secret(), Err(LinkedInError::NotConfigured)));
    }
}
