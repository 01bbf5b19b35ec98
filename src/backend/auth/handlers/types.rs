/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by authentication handlers.
 * These types are shared across the register, login and profile handlers.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;

/// Registration request
///
/// Email and password plus the profile fields used to tailor generated posts.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct RegisterRequest {
    pub name: String,
    /// User's email address
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub current_role: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    /// User's password (will be verified against stored hash)
    pub password: String,
}

/// Auth response
///
/// Returned by register and login handlers. Contains the JWT token
/// and user information for immediate authentication.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// JWT token for authentication (30-day expiration)
    pub access_token: String,
    /// Always `"bearer"`
    pub token_type: String,
    /// User information (without sensitive data)
    pub user: UserResponse,
}

impl AuthResponse {
    pub fn bearer(access_token: String, user: User) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            user: user.into(),
        }
    }
}

/// User response (without sensitive data)
///
/// Never includes the password hash or the LinkedIn access token.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    pub id: uuid::Uuid,
    pub name: String,
    pub email: String,
    pub headline: Option<String>,
    pub industry: Option<String>,
    pub current_role: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub brand_voice: String,
    pub skills: Vec<String>,
    pub linkedin_connected: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            headline: user.headline,
            industry: user.industry,
            current_role: user.current_role,
            company: user.company,
            location: user.location,
            brand_voice: user.brand_voice,
            skills: user.skills.0,
            linkedin_connected: user.linkedin_connected,
            last_login: user.last_login,
            created_at: user.created_at,
        }
    }
}
