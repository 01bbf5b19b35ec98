//! Test suite for PostPilot
//!
//! This module organizes all tests

pub mod common;
pub mod integration;
pub mod property;
