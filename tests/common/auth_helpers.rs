//! Authentication test helpers
//!
//! Tokens for a user that only exists in the token itself. Without a
//! database the auth middleware accepts any valid token, so protected
//! routes run up to the point where they need the database.

use postpilot::backend::auth::sessions::create_token;
use uuid::Uuid;

/// Test user credentials
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub token: String,
}

impl TestUser {
    pub fn new() -> Self {
        let id = Uuid::new_v4();
        let email = format!("test_{}@example.com", id);
        let token = create_token(id, email.clone()).expect("Failed to create test token");
        Self { id, email, token }
    }

    /// `Authorization` header value for this user
    pub fn bearer(&self) -> String {
        auth_header(&self.token)
    }
}

impl Default for TestUser {
    fn default() -> Self {
        Self::new()
    }
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
