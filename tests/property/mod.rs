//! Property-based tests

mod budget_proptest;
mod engagement_proptest;
