/**
 * Sessions
 *
 * PostPilot sessions are stateless HS256 JWTs. The token carries the user id
 * and email, is issued by `postpilot` and lives for 30 days. Nothing is
 * stored server-side, so disconnecting LinkedIn or editing the profile does
 * not invalidate a token.
 */

use chrono::{Duration, Utc};
use jsonwebtoken::errors::Error as JwtError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const ISSUER: &str = "postpilot";

const DEV_SECRET: &str = "postpilot-dev-secret-change-in-production";

/// How long an issued token stays valid
pub const TOKEN_LIFETIME: Duration = Duration::days(30);

/// Claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    fn issue(user_id: Uuid, email: String) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id,
            email,
            iss: ISSUER.to_string(),
            iat: now.timestamp(),
            exp: (now + TOKEN_LIFETIME).timestamp(),
        }
    }
}

fn signing_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET not set, using the development secret");
        DEV_SECRET.to_string()
    })
}

/// Sign a session token for `user_id`
pub fn create_token(user_id: Uuid, email: String) -> Result<String, JwtError> {
    let claims = Claims::issue(user_id, email);
    let key = EncodingKey::from_secret(signing_secret().as_bytes());
    encode(&Header::default(), &claims, &key)
}

/// Check signature, issuer and expiry, returning the claims
pub fn verify_token(token: &str) -> Result<Claims, JwtError> {
    let key = DecodingKey::from_secret(signing_secret().as_bytes());
    let mut validation = Validation::default();
    validation.set_issuer(&[ISSUER]);
    validation.set_required_spec_claims(&["exp", "iss", "sub"]);

    Ok(decode::<Claims>(token, &key, &validation)?.claims)
}

/// Token part of an `Authorization: Bearer <token>` header value
pub fn bearer_token(header_value: &str) -> Option<&str> {
    header_value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
