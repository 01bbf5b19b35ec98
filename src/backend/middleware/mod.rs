//! Middleware Module
//!
//! This module contains all HTTP middleware for the backend server.
//!
//! # Architecture
//!
//! - **`auth`** - JWT authentication middleware and the `AuthUser` extractor
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware;
//! use postpilot::backend::middleware::auth_middleware;
//!
//! let protected = protected_routes.route_layer(
//!     middleware::from_fn_with_state(app_state.clone(), auth_middleware),
//! );
//! ```

pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
