//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - A scripted text generator
//! - Test app construction without a database
//! - Authentication test helpers
//! - Custom assertion macros

pub mod assertions;
pub mod auth_helpers;
pub mod test_app;

// Re-export commonly used utilities
pub use auth_helpers::*;
pub use test_app::*;
