/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and can be converted to HTTP responses.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Handler errors occur when processing HTTP requests:
 * - Invalid request data
 * - Authentication failures
 * - Conflicts with existing records
 *
 * ## State Errors
 *
 * State errors occur when a service the handler needs is not available,
 * such as the database pool when `DATABASE_URL` is unset.
 *
 * ## Upstream Errors
 *
 * Database, text generation and LinkedIn failures wrap the error reported
 * by the corresponding client.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::backend::content::generator::GenerationError;
use crate::backend::linkedin::LinkedInError;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use postpilot::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request");
/// let err = BackendError::state("Database not configured");
/// let err = BackendError::not_found("Post not found");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., invalid request, bad credentials)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// A required service is not available
    #[error("State error: {message}")]
    StateError {
        /// Human-readable error message
        message: String,
    },

    /// A resource owned by the caller does not exist
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    /// The text model failed on a path that has no fallback
    #[error("AI content generation failed: {0}")]
    GenerationError(#[from] GenerationError),

    /// The LinkedIn API rejected a request
    #[error(transparent)]
    LinkedInError(#[from] LinkedInError),

    /// Shared error (from shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new state error
    pub fn state(message: impl Into<String>) -> Self {
        Self::StateError {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Shorthand for 401 responses
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::UNAUTHORIZED, message)
    }

    /// Shorthand for 400 responses
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::BAD_REQUEST, message)
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `StateError` - 503 Service Unavailable
    /// - `NotFound` - 404 Not Found
    /// - `DatabaseError` - 500 Internal Server Error
    /// - `GenerationError` - 502 Bad Gateway
    /// - `LinkedInError` - Depends on the LinkedIn error
    /// - `SharedError` - Depends on the shared error type
    /// - `SerializationError` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::StateError { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::GenerationError(_) => StatusCode::BAD_GATEWAY,
            Self::LinkedInError(err) => err.status_code(),
            Self::SharedError(err) => match err {
                SharedError::SerializationError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
                SharedError::BudgetError { .. } => StatusCode::BAD_REQUEST,
            },
            Self::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message returned to clients
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::StateError { message } => message.clone(),
            Self::NotFound { message } => message.clone(),
            Self::DatabaseError(_) => "Database error".to_string(),
            Self::GenerationError(err) => format!("AI content generation failed: {}", err),
            Self::LinkedInError(err) => err.to_string(),
            Self::SharedError(err) => err.to_string(),
            Self::SerializationError(_) => "Serialization error".to_string(),
        }
    }
}
