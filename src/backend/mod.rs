//! Backend Module
//!
//! All server-side code: an Axum HTTP server backed by PostgreSQL, a
//! generative text model and the LinkedIn API.
//!
//! # Architecture
//!
//! - **`server`** - Application state, database loading, app creation
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Users table, JWT sessions, register/login/profile handlers
//! - **`content`** - Generation, budget enforcement, posts persistence
//! - **`linkedin`** - OAuth flow and post publishing
//! - **`analytics`** - Per-post metrics storage and dashboards
//! - **`middleware`** - JWT authentication middleware
//! - **`error`** - Backend error type rendered as JSON responses
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── content/        - Content generation and enforcement
//! ├── linkedin/       - LinkedIn integration
//! ├── analytics/      - Post analytics
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds an optional database pool plus `Arc`-wrapped services.
//! Nothing in it is mutable, so no locks are involved. When the database
//! is unavailable every handler that needs it answers 503.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. `BackendError` implements
//! `IntoResponse` and renders `{"error": ..., "status": ...}`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Content generation and the budget enforcer
pub mod content;

/// LinkedIn OAuth and publishing
pub mod linkedin;

/// Post analytics
pub mod analytics;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::create_app;
