/**
 * Current User Handlers
 *
 * GET /api/users/me returns the profile of the authenticated user and
 * PUT /api/users/me applies a partial profile update.
 *
 * # Authentication
 *
 * Both routes sit behind the auth middleware, which has already verified the
 * JWT and attached the user ID to the request.
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::users::{get_user_by_id, update_profile, UpdateProfileRequest, User};
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::require_pool;

/// Load the authenticated user's row, or 404
pub async fn load_current_user(pool: &PgPool, user_id: Uuid) -> Result<User, BackendError> {
    get_user_by_id(pool, user_id).await?.ok_or_else(|| {
        tracing::warn!("User not found: {}", user_id);
        BackendError::not_found("User not found")
    })
}

/// Get current user handler
///
/// # Errors
///
/// * `404 Not Found` - If user is not found in database
/// * `503 Service Unavailable` - If database is not configured
pub async fn get_me(
    State(pool): State<Option<PgPool>>,
    AuthUser(auth): AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    let pool = require_pool(pool)?;
    let user = load_current_user(&pool, auth.user_id).await?;

    Ok(Json(user.into()))
}

/// Update current user handler
///
/// Only the fields present in the body are changed.
pub async fn update_me(
    State(pool): State<Option<PgPool>>,
    AuthUser(auth): AuthUser,
    Json(update): Json<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, BackendError> {
    let pool = require_pool(pool)?;

    if update.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(BackendError::bad_request("Name cannot be empty"));
    }

    // The row must exist before an UPDATE ... RETURNING can succeed
    load_current_user(&pool, auth.user_id).await?;
    let user = update_profile(&pool, auth.user_id, &update).await?;
    tracing::info!("Profile updated for user {}", user.id);

    Ok(Json(user.into()))
}
