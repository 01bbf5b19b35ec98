//! Authentication Module
//!
//! This module handles user registration, login, profiles and JWT sessions.
//!
//! # Architecture
//!
//! - **`users`** - User data model and database operations
//! - **`sessions`** - JWT token generation and validation
//! - **`handlers`** - HTTP handlers for the user endpoints
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email and password → User created → JWT token returned
//! 2. **Login**: email and password → Credentials verified → JWT token returned
//! 3. **Me**: JWT token → verified by the auth middleware → profile returned or updated
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - JWT tokens are used for stateless authentication
//! - Tokens expire after 30 days
//! - Invalid credentials return 401 (no information leakage)

/// User data model and database operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for the user endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
pub use handlers::{get_me, login, register, update_me};
