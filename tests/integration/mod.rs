//! Integration tests
//!
//! - **`api`** - Router tests without a database
//! - **`linkedin`** - LinkedIn client against a mock server
//! - **`enforcer`** - Budget enforcer driven by a canned generator

pub mod api;
pub mod enforcer_test;
pub mod linkedin;
