//! API integration tests
//!
//! Integration tests for the HTTP endpoints

mod analytics_test;
mod content_test;
mod linkedin_test;
mod users_test;
