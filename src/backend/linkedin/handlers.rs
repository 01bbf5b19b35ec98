/**
 * LinkedIn Handlers
 *
 * HTTP handlers for the `/api/linkedin` routes. All of them require authentication.
 *
 * # Connection Flow
 *
 * 1. `GET /connect` returns the authorization URL
 * 2. The frontend sends the user there and receives `code` on the redirect
 * 3. `POST /exchange-token` trades the code for a token and syncs the profile
 *
 * # Publishing
 *
 * `POST /publish` posts the given content as the connected member. When a
 * `post_id` of the user's is supplied, that post is marked published and
 * gets an empty analytics row.
 */

use axum::{extract::State, response::Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::backend::analytics::db::ensure_analytics;
use crate::backend::auth::handlers::{load_current_user, UserResponse};
use crate::backend::auth::users::{
    connect_linkedin, disconnect_linkedin, has_linkedin_access, LinkedInConnection,
};
use crate::backend::content::db::{get_user_post, mark_published};
use crate::backend::error::BackendError;
use crate::backend::linkedin::oauth::{random_state, token_expiry};
use crate::backend::linkedin::{person_urn, LinkedInClient, LinkedInError};
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::require_pool;

#[derive(Debug, Serialize)]
pub struct ConnectResponse {
    pub authorization_url: String,
    pub state: String,
    pub message: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct ExchangeTokenRequest {
    pub code: String,
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExchangeTokenResponse {
    pub success: bool,
    pub message: &'static str,
    pub user: UserResponse,
}

#[derive(Debug, Deserialize)]
pub struct PublishRequest {
    pub content: String,
    #[serde(default)]
    pub post_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct PublishResponse {
    pub success: bool,
    pub message: &'static str,
    pub linkedin_post_id: String,
    pub linkedin_url: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub connected: bool,
    pub linkedin_id: Option<String>,
    pub token_expiry: Option<DateTime<Utc>>,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DisconnectResponse {
    pub success: bool,
    pub message: &'static str,
}

/// Authorization URL for the LinkedIn consent screen
///
/// # Errors
///
/// * `500 Internal Server Error` - `LINKEDIN_CLIENT_ID` is not configured
pub async fn connect(
    State(linkedin): State<Arc<LinkedInClient>>,
    AuthUser(auth): AuthUser,
) -> Result<Json<ConnectResponse>, BackendError> {
    let state = random_state();
    let authorization_url = linkedin.authorization_url(&state)?;

    tracing::info!("LinkedIn authorization started for user {}", auth.user_id);

    Ok(Json(ConnectResponse {
        authorization_url,
        state,
        message: "Redirect user to this URL to authorize LinkedIn access",
    }))
}

/// Exchange the OAuth code and store the connection on the user
pub async fn exchange_token(
    State(pool): State<Option<PgPool>>,
    State(linkedin): State<Arc<LinkedInClient>>,
    AuthUser(auth): AuthUser,
    Json(request): Json<ExchangeTokenRequest>,
) -> Result<Json<ExchangeTokenResponse>, BackendError> {
    let pool = require_pool(pool)?;

    if request.code.trim().is_empty() {
        return Err(BackendError::bad_request("Authorization code is required"));
    }

    let token = linkedin.exchange_code(&request.code).await?;
    let profile = linkedin.fetch_profile(&token.access_token).await?;

    let connection = LinkedInConnection {
        linkedin_id: profile.sub,
        access_token: token.access_token,
        token_expiry: token_expiry(Utc::now()),
        email: profile.email,
        name: profile.name,
        headline: profile.headline,
        industry: profile.industry,
        location: profile.location,
    };
    let user = connect_linkedin(&pool, auth.user_id, &connection).await?;

    tracing::info!("LinkedIn connected for user {} as {}", user.id, connection.linkedin_id);

    Ok(Json(ExchangeTokenResponse {
        success: true,
        message: "LinkedIn account connected successfully",
        user: user.into(),
    }))
}

/// Publish content to LinkedIn as the current user
///
/// # Errors
///
/// * `400 Bad Request` - LinkedIn is not connected
/// * `502 Bad Gateway` - LinkedIn rejected the post
pub async fn publish(
    State(pool): State<Option<PgPool>>,
    State(linkedin): State<Arc<LinkedInClient>>,
    AuthUser(auth): AuthUser,
    Json(request): Json<PublishRequest>,
) -> Result<Json<PublishResponse>, BackendError> {
    let pool = require_pool(pool)?;
    let user = load_current_user(&pool, auth.user_id).await?;

    let (Some(access_token), Some(linkedin_id)) = (
        user.access_token.as_deref().filter(|_| has_linkedin_access(&user)),
        user.linkedin_id.as_deref(),
    ) else {
        return Err(LinkedInError::NotConnected.into());
    };

    if request.content.trim().is_empty() {
        return Err(BackendError::bad_request("Content cannot be empty"));
    }

    let published = linkedin
        .publish(access_token, &person_urn(linkedin_id), &request.content)
        .await?;

    if let Some(post_id) = request.post_id {
        match get_user_post(&pool, post_id, user.id).await? {
            Some(post) => {
                mark_published(&pool, post.id, &published.post_id, &published.linkedin_url)
                    .await?;
                ensure_analytics(&pool, user.id, post.id).await?;
            }
            None => {
                tracing::warn!("Published content references unknown post {}", post_id);
            }
        }
    }

    Ok(Json(PublishResponse {
        success: true,
        message: "Post published successfully to LinkedIn",
        linkedin_post_id: published.post_id,
        linkedin_url: published.linkedin_url,
    }))
}

/// Whether the current user has a usable LinkedIn connection
pub async fn status(
    State(pool): State<Option<PgPool>>,
    AuthUser(auth): AuthUser,
) -> Result<Json<StatusResponse>, BackendError> {
    let pool = require_pool(pool)?;
    let user = load_current_user(&pool, auth.user_id).await?;

    let expired = user.token_expiry.is_some_and(|expiry| expiry <= Utc::now());
    let connected = has_linkedin_access(&user) && !expired;

    let message = match (connected, expired) {
        (true, _) => "LinkedIn connected",
        (false, true) => "LinkedIn token expired. Please reconnect.",
        (false, false) => "LinkedIn not connected",
    };

    Ok(Json(StatusResponse {
        connected,
        linkedin_id: user.linkedin_id,
        token_expiry: user.token_expiry,
        message,
    }))
}

/// Forget the user's LinkedIn token
pub async fn disconnect(
    State(pool): State<Option<PgPool>>,
    AuthUser(auth): AuthUser,
) -> Result<Json<DisconnectResponse>, BackendError> {
    let pool = require_pool(pool)?;
    disconnect_linkedin(&pool, auth.user_id).await?;

    tracing::info!("LinkedIn disconnected for user {}", auth.user_id);

    Ok(Json(DisconnectResponse {
        success: true,
        message: "LinkedIn account disconnected",
    }))
}
