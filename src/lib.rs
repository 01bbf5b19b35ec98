//! PostPilot - Main Library
//!
//! PostPilot is a backend for drafting, improving and publishing LinkedIn
//! posts with a generative text model. Users register, keep a professional
//! profile, generate posts tailored to that profile, store drafts, publish
//! through the LinkedIn API and record engagement numbers afterwards.
//!
//! # Module Structure
//!
//! - **`shared`** - Pure types and logic
//!   - Character budget classifier and trimmer
//!   - Draft and post types, typed JSON payloads
//!   - Configuration and shared errors
//!
//! - **`backend`** - Axum HTTP server
//!   - Authentication (bcrypt + JWT) and user profiles
//!   - Content generation with the budget enforcer
//!   - LinkedIn OAuth and publishing
//!   - Analytics storage
//!
//! # Character Budget
//!
//! Every generated or improved post passes through the budget enforcer
//! before it is stored. A draft that fits is accepted untouched. A draft
//! that exceeds the budget gets exactly one model rewrite, and if that does
//! not fit either the original draft is trimmed at a sentence or word
//! boundary, dropping hashtags from the end as a last resort.
//!
//! # Usage
//!
//! ```rust,no_run
//! use postpilot::backend::server::init::create_app;
//! use postpilot::shared::config::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await;
//! // Serve `app` with axum
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::error::SharedError` for validation and serialization failures
//! - `backend::error::BackendError` for everything that becomes an HTTP response

/// Shared types and pure logic
pub mod shared;

/// Backend server-side code
pub mod backend;
