//! Shared Module
//!
//! Platform-agnostic types and pure logic used by the backend. Nothing in
//! here performs I/O: the budget classifier and trimmer are plain functions
//! of their inputs, and the content types are plain serializable data.
//!
//! # Overview
//!
//! - **`budget`** - Character budget classifier and boundary-aware trimmer
//! - **`content`** - Drafts, enforcement results, post enums, typed JSON payloads
//! - **`config`** - Application configuration loaded from the environment
//! - **`error`** - Errors shared with the backend

/// Character budget measuring and trimming
pub mod budget;

/// Content data structures
pub mod content;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use budget::{classify, render_hashtags, rendered_length, trim_to_limit};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use content::{
    BudgetClassification, BudgetStatus, Draft, EnforcementResult, DEFAULT_MAX_CHARACTERS,
};
pub use error::SharedError;
