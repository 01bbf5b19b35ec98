//! Content Module
//!
//! Post generation, improvement and storage.
//!
//! # Module Structure
//!
//! ```text
//! content/
//! ├── mod.rs          - Module exports and documentation
//! ├── generator.rs    - TextGenerator trait and the Gemini implementation
//! ├── retry.rs        - Retry with exponential backoff
//! ├── prompts.rs      - Prompt building and static fallbacks
//! ├── engagement.rs   - Hashtag/mention extraction, engagement forecast
//! ├── enforcer.rs     - Character budget enforcement ladder
//! ├── service.rs      - ContentService tying the above together
//! ├── db.rs           - posts table
//! └── handlers.rs     - /api/content/* handlers
//! ```
//!
//! # Pipeline
//!
//! ```text
//! profile + request -> prompt -> generator (retried) -> split hashtags
//!     -> engagement forecast -> BudgetEnforcer -> posts table
//! ```

/// Text generator abstraction
pub mod generator;

/// Retry with backoff
pub mod retry;

/// Prompt building
pub mod prompts;

/// Engagement heuristics
pub mod engagement;

/// Budget enforcement
pub mod enforcer;

/// Content orchestration
pub mod service;

/// Posts persistence
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use enforcer::BudgetEnforcer;
pub use generator::{GeminiGenerator, GenerationError, TextGenerator};
pub use service::ContentService;
