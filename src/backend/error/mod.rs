//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and can be converted to HTTP responses.
//!
//! # Architecture
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - Error conversion implementations (IntoResponse, etc.)
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Types
//!
//! - `HandlerError` - Request-level failures with an explicit status code
//! - `StateError` - Missing or unusable application state (503)
//! - `NotFound` - A user-owned resource that does not exist
//! - `DatabaseError` - Failures reported by sqlx
//! - `GenerationError` - The text model failed where no fallback exists
//! - `LinkedInError` - The LinkedIn API rejected a call
//! - `SharedError` - Errors from the shared module
//! - `SerializationError` - JSON serialization errors
//!
//! # HTTP Response Conversion
//!
//! All backend errors implement `IntoResponse` from Axum, so handlers return
//! `Result<_, BackendError>` and use `?`. The body is always
//! `{"error": message, "status": code}`.
//!
//! # Example
//!
//! ```rust,no_run
//! use postpilot::backend::error::BackendError;
//! use axum::{http::StatusCode, Json};
//!
//! async fn handler() -> Result<Json<&'static str>, BackendError> {
//!     Err(BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request"))
//! }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
