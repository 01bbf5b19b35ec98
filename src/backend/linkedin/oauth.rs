/**
 * LinkedIn OAuth
 *
 * Authorization-code flow with the OpenID Connect scopes:
 *
 * 1. `authorization_url` builds the consent URL with a random `state`
 * 2. `exchange_code` trades the returned code for an access token
 * 3. `fetch_profile` reads the member profile from `/userinfo`
 */

use chrono::{DateTime, Duration, Utc};
use rand::distr::Alphanumeric;
use rand::Rng;
use reqwest::Url;
use serde::Deserialize;

use super::{LinkedInClient, LinkedInError};

/// Scopes requested during authorization
pub const SCOPES: &str = "openid email profile w_member_social";

/// LinkedIn member tokens are valid for 60 days
pub const TOKEN_LIFETIME_DAYS: i64 = 60;

const STATE_LEN: usize = 43;

/// Access token returned by the token endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
}

/// Profile returned by the `/userinfo` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct LinkedInProfile {
    /// Member id
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Random URL-safe value for the OAuth `state` parameter
pub fn random_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(STATE_LEN)
        .map(char::from)
        .collect()
}

/// Expiry stored for a freshly exchanged token
pub fn token_expiry(now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::days(TOKEN_LIFETIME_DAYS)
}

impl LinkedInClient {
    /// Consent URL the user is sent to
    pub fn authorization_url(&self, state: &str) -> Result<String, LinkedInError> {
        let client_id = self.client_id()?;
        let url = Url::parse_with_params(
            &self.config.auth_url,
            &[
                ("response_type", "code"),
                ("client_id", client_id),
                ("redirect_uri", self.config.redirect_uri.as_str()),
                ("state", state),
                ("scope", SCOPES),
            ],
        )
        .map_err(|e| LinkedInError::InvalidUrl(e.to_string()))?;

        Ok(url.into())
    }

    /// Exchange an authorization code for an access token
    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse, LinkedInError> {
        let client_id = self.client_id()?;
        let client_secret = self.client_secret()?;

        let response = self
            .http
            .post(&self.config.token_url)
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.config.redirect_uri.as_str()),
                ("client_id", client_id),
                ("client_secret", client_secret),
            ])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                tracing::warn!("LinkedIn token exchange failed: {}", e);
                LinkedInError::TokenExchange(e.to_string())
            })?;

        response
            .json::<TokenResponse>()
            .await
            .map_err(|e| LinkedInError::TokenExchange(e.to_string()))
    }

    /// Fetch the member profile for `access_token`
    pub async fn fetch_profile(&self, access_token: &str) -> Result<LinkedInProfile, LinkedInError> {
        let url = format!("{}/userinfo", self.config.api_base);

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                tracing::warn!("LinkedIn profile request failed: {}", e);
                LinkedInError::Profile(e.to_string())
            })?;

        response
            .json::<LinkedInProfile>()
            .await
            .map_err(|e| LinkedInError::Profile(e.to_string()))
    }
}
