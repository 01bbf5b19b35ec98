/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /api/users/register.
 *
 * # Registration Process
 *
 * 1. Validate email format and password length
 * 2. Check if user already exists
 * 3. Hash password using bcrypt
 * 4. Create user in database
 * 5. Generate JWT token
 * 6. Return token and user info
 *
 * # Validation
 *
 * - Email must contain '@' character (basic validation)
 * - Password must be at least 8 characters long
 * - Email must be unique (no existing user with same email)
 */

use axum::{extract::State, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;

use crate::backend::auth::handlers::types::{AuthResponse, RegisterRequest};
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::{create_user, get_user_by_email, NewUser};
use crate::backend::error::BackendError;
use crate::backend::server::state::require_pool;

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 8;

/// Check the request fields that need no database access
pub fn validate_registration(request: &RegisterRequest) -> Result<(), BackendError> {
    if request.name.trim().is_empty() {
        tracing::warn!("Registration without a name");
        return Err(BackendError::bad_request("Name is required"));
    }

    if !request.email.contains('@') {
        tracing::warn!("Invalid email format: {}", request.email);
        return Err(BackendError::bad_request("Invalid email format"));
    }

    if request.password.chars().count() < MIN_PASSWORD_LEN {
        tracing::warn!("Password too short");
        return Err(BackendError::bad_request(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }

    Ok(())
}

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - Invalid input, or the email is already registered
/// * `503 Service Unavailable` - If database is not configured
/// * `500 Internal Server Error` - If hashing, user creation or token generation fails
///
/// # Example Request
///
/// ```http
/// POST /api/users/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "name": "Ada Lovelace",
///   "email": "ada@example.com",
///   "password": "securepassword123",
///   "industry": "Technology"
/// }
/// ```
pub async fn register(
    State(pool): State<Option<PgPool>>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    validate_registration(&request)?;
    let pool = require_pool(pool)?;
    tracing::info!("Registration request for: {}", request.email);

    if get_user_by_email(&pool, &request.email).await?.is_some() {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(BackendError::bad_request("Email already registered"));
    }

    let password_hash = hash(&request.password, DEFAULT_COST).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        BackendError::handler(
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            "Server error",
        )
    })?;

    let new_user = NewUser {
        email: request.email,
        name: request.name,
        password_hash,
        headline: request.headline,
        industry: request.industry,
        current_role: request.current_role,
        company: request.company,
    };
    let user = create_user(&pool, &new_user).await?;

    let token = create_token(user.id, user.email.clone()).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        BackendError::handler(
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            "Server error",
        )
    })?;

    tracing::info!("User created successfully: {}", user.email);

    Ok(Json(AuthResponse::bearer(token, user)))
}
