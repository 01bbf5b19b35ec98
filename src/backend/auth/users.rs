/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations.
 *
 * `current_role` is a reserved word in PostgreSQL, so the column is quoted
 * in every statement.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::PgPool;

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: uuid::Uuid,
    /// User email address (unique)
    pub email: String,
    /// Display name
    pub name: String,
    /// Hashed password (bcrypt)
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub headline: Option<String>,
    pub industry: Option<String>,
    pub current_role: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    /// Voice used when generating posts (e.g. "professional")
    pub brand_voice: String,
    pub skills: Json<Vec<String>>,
    /// LinkedIn member id (`sub` from the userinfo endpoint)
    pub linkedin_id: Option<String>,
    pub linkedin_connected: bool,
    /// LinkedIn OAuth access token
    #[serde(skip_serializing)]
    pub access_token: Option<String>,
    pub token_expiry: Option<DateTime<Utc>>,
    pub last_login: Option<DateTime<Utc>>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Profile fields supplied at registration
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub headline: Option<String>,
    pub industry: Option<String>,
    pub current_role: Option<String>,
    pub company: Option<String>,
}

/// Partial profile update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub headline: Option<String>,
    pub industry: Option<String>,
    pub current_role: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub skills: Option<Vec<String>>,
    pub brand_voice: Option<String>,
}

/// Profile data received from LinkedIn when an account is connected
#[derive(Debug, Clone)]
pub struct LinkedInConnection {
    pub linkedin_id: String,
    pub access_token: String,
    pub token_expiry: DateTime<Utc>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub headline: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `new_user` - Email, password hash and initial profile
///
/// # Returns
/// Created user or error
pub async fn create_user(pool: &PgPool, new_user: &NewUser) -> Result<User, sqlx::Error> {
    let id = uuid::Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, email, name, password_hash, headline, industry, "current_role",
                           company, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING id, email, name, password_hash, headline, industry, "current_role", company,
                  location, brand_voice, skills, linkedin_id, linkedin_connected, access_token,
                  token_expiry, last_login, created_at, updated_at
        "#
    )
    .bind(id)
    .bind(&new_user.email)
    .bind(&new_user.name)
    .bind(&new_user.password_hash)
    .bind(&new_user.headline)
    .bind(&new_user.industry)
    .bind(&new_user.current_role)
    .bind(&new_user.company)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - User email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, name, password_hash, headline, industry, "current_role", company,
               location, brand_voice, skills, linkedin_id, linkedin_connected, access_token,
               token_expiry, last_login, created_at, updated_at
        FROM users
        WHERE email = $1
        "#
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `id` - User ID
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(
    pool: &PgPool,
    id: uuid::Uuid,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, name, password_hash, headline, industry, "current_role", company,
               location, brand_voice, skills, linkedin_id, linkedin_connected, access_token,
               token_expiry, last_login, created_at, updated_at
        FROM users
        WHERE id = $1
        "#
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Apply a partial profile update
pub async fn update_profile(
    pool: &PgPool,
    user_id: uuid::Uuid,
    update: &UpdateProfileRequest,
) -> Result<User, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET name = COALESCE($1, name),
            headline = COALESCE($2, headline),
            industry = COALESCE($3, industry),
            "current_role" = COALESCE($4, "current_role"),
            company = COALESCE($5, company),
            location = COALESCE($6, location),
            skills = COALESCE($7, skills),
            brand_voice = COALESCE($8, brand_voice),
            updated_at = $9
        WHERE id = $10
        RETURNING id, email, name, password_hash, headline, industry, "current_role", company,
                  location, brand_voice, skills, linkedin_id, linkedin_connected, access_token,
                  token_expiry, last_login, created_at, updated_at
        "#
    )
    .bind(&update.name)
    .bind(&update.headline)
    .bind(&update.industry)
    .bind(&update.current_role)
    .bind(&update.company)
    .bind(&update.location)
    .bind(update.skills.as_ref().map(Json))
    .bind(&update.brand_voice)
    .bind(Utc::now())
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Record a successful login
pub async fn update_last_login(pool: &PgPool, user_id: uuid::Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET last_login = $1 WHERE id = $2")
        .bind(Utc::now())
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Store a LinkedIn connection and sync the profile fields LinkedIn sent
///
/// Headline and industry are only overwritten with non-blank values.
pub async fn connect_linkedin(
    pool: &PgPool,
    user_id: uuid::Uuid,
    connection: &LinkedInConnection,
) -> Result<User, sqlx::Error> {
    let non_blank = |value: &Option<String>| {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(String::from)
    };

    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET linkedin_id = $1,
            access_token = $2,
            token_expiry = $3,
            linkedin_connected = TRUE,
            email = COALESCE($4, email),
            name = COALESCE($5, name),
            headline = COALESCE($6, headline),
            industry = COALESCE($7, industry),
            location = COALESCE($8, location),
            updated_at = $9
        WHERE id = $10
        RETURNING id, email, name, password_hash, headline, industry, "current_role", company,
                  location, brand_voice, skills, linkedin_id, linkedin_connected, access_token,
                  token_expiry, last_login, created_at, updated_at
        "#
    )
    .bind(&connection.linkedin_id)
    .bind(&connection.access_token)
    .bind(connection.token_expiry)
    .bind(&connection.email)
    .bind(&connection.name)
    .bind(non_blank(&connection.headline))
    .bind(non_blank(&connection.industry))
    .bind(&connection.location)
    .bind(Utc::now())
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Forget the LinkedIn token and member id
pub async fn disconnect_linkedin(pool: &PgPool, user_id: uuid::Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE users
        SET linkedin_connected = FALSE, access_token = NULL, token_expiry = NULL,
            linkedin_id = NULL, updated_at = $1
        WHERE id = $2
        "#
    )
    .bind(Utc::now())
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Whether the user can publish to LinkedIn
pub fn has_linkedin_access(user: &User) -> bool {
    user.linkedin_connected && user.access_token.is_some()
}
