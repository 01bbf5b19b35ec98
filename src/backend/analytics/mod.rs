//! Analytics Module
//!
//! Storage for the engagement numbers of published posts and the small
//! aggregates shown on the dashboard. Nothing here fetches metrics from
//! LinkedIn; clients report them through `POST /api/analytics/update/{post_id}`.
//!
//! - **`db`** - `post_analytics` table and aggregate queries
//! - **`handlers`** - `/api/analytics/*` handlers

/// Analytics persistence
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use db::{AnalyticsUpdate, PostAnalytics};
