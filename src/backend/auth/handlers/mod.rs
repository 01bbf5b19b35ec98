//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for the user endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request and response types
//! ├── register.rs  - User registration handler
//! ├── login.rs     - User authentication handler
//! └── me.rs        - Current user profile handlers
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/users/register - User registration
//! - **`login`** - POST /api/users/login - User authentication
//! - **`get_me`** - GET /api/users/me - Current user profile
//! - **`update_me`** - PUT /api/users/me - Partial profile update

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Current user handlers
pub mod me;

// Re-export commonly used types
pub use types::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};

// Re-export handlers
pub use login::login;
pub use me::{get_me, load_current_user, update_me};
pub use register::register;
