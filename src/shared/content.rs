//! Content Data Structures
//!
//! Transient values passed through the budget pipeline, plus the typed JSON
//! payloads that the backend stores next to posts and analytics rows.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::error::SharedError;

/// Platform default budget for a LinkedIn post
pub const DEFAULT_MAX_CHARACTERS: usize = 3000;

/// Candidate post body plus its ordered hashtag list
///
/// Hashtags are stored without the leading `#` and are ordered
/// most-important-first: trimming removes from the end.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Draft {
    pub text: String,
    pub hashtags: Vec<String>,
}

impl Draft {
    pub fn new(text: impl Into<String>, hashtags: Vec<String>) -> Self {
        Self {
            text: text.into(),
            hashtags,
        }
    }
}

/// Three-way outcome of measuring a draft against its budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    WithinLimit,
    NearLimit,
    ExceedsLimit,
}

impl BudgetStatus {
    /// Whether a draft with this status can be accepted as-is
    pub fn fits(self) -> bool {
        !matches!(self, BudgetStatus::ExceedsLimit)
    }
}

/// Result of classifying a draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetClassification {
    pub status: BudgetStatus,
    pub soft_limit: usize,
    pub total_length: usize,
}

/// Final output of the enforcement ladder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnforcementResult {
    pub final_text: String,
    pub final_hashtags: Vec<String>,
    pub total_length: usize,
    pub warnings: Vec<String>,
}

/// Resolve a caller-supplied budget
///
/// Absent or null means the platform default. Zero and negative budgets are
/// caller errors and never reach the enforcer.
pub fn resolve_max_characters(requested: Option<i64>) -> Result<usize, SharedError> {
    match requested {
        None => Ok(DEFAULT_MAX_CHARACTERS),
        Some(value) if value <= 0 => Err(SharedError::budget(value)),
        Some(value) => usize::try_from(value).map_err(|_| SharedError::budget(value)),
    }
}

/// Lifecycle status of a stored post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    Draft,
    Generated,
    Improved,
    Scheduled,
    Published,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Generated => "generated",
            PostStatus::Improved => "improved",
            PostStatus::Scheduled => "scheduled",
            PostStatus::Published => "published",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Writing style requested for a generated post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostType {
    #[default]
    Professional,
    Casual,
    ThoughtLeadership,
}

impl PostType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostType::Professional => "professional",
            PostType::Casual => "casual",
            PostType::ThoughtLeadership => "thought_leadership",
        }
    }
}

/// Requested post length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostLength {
    Short,
    #[default]
    Medium,
    Long,
}

/// Kind of rewrite requested from `/api/content/improve`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionType {
    Improve,
    Shorten,
    Expand,
    ToneChange,
    Custom,
}

impl SuggestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionType::Improve => "improve",
            SuggestionType::Shorten => "shorten",
            SuggestionType::Expand => "expand",
            SuggestionType::ToneChange => "tone_change",
            SuggestionType::Custom => "custom",
        }
    }
}

impl FromStr for SuggestionType {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "improve" => Ok(SuggestionType::Improve),
            "shorten" => Ok(SuggestionType::Shorten),
            "expand" => Ok(SuggestionType::Expand),
            "tone_change" => Ok(SuggestionType::ToneChange),
            "custom" => Ok(SuggestionType::Custom),
            other => Err(SharedError::validation(
                "suggestion_type",
                format!("Invalid suggestion type: {}", other),
            )),
        }
    }
}

/// Heuristic engagement forecast stored with each generated post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngagementPrediction {
    pub predicted_likes: u32,
    pub predicted_comments: u32,
    pub predicted_shares: u32,
    pub engagement_score: u32,
}

/// Audience breakdown reported for a published post
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AudienceData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seniority: Option<Vec<AudienceShare>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industries: Option<Vec<AudienceShare>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_functions: Option<Vec<AudienceShare>>,
}

/// One labelled slice of an audience breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudienceShare {
    pub label: String,
    pub percentage: f64,
}

/// Point-in-time copy of a post's counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub recorded_at: chrono::DateTime<chrono::Utc>,
    pub likes_count: i32,
    pub comments_count: i32,
    pub shares_count: i32,
    pub impressions: i32,
}
