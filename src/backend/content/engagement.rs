//! Hashtag and mention extraction plus the heuristic engagement forecast.

use regex::Regex;
use std::sync::LazyLock;

use crate::shared::content::{Draft, EngagementPrediction};

static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\w[\w-]*").expect("valid hashtag regex"));

static HASHTAG_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#\w[\w-]*$").expect("valid hashtag token regex"));

static MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@[A-Za-z0-9_.-]+").expect("valid mention regex"));

const CTA_PHRASES: &[&str] = &[
    "what do you think",
    "share your",
    "let me know",
    "comment below",
    "thoughts?",
    "agree?",
    "disagree?",
    "experience?",
    "what's your",
];

const STORY_PHRASES: &[&str] = &[
    "recently",
    "yesterday",
    "last week",
    "remember when",
    "story",
    "experience",
];

const DATA_KEYWORDS: &[&str] = &["%", "$", "study", "research", "data", "report"];

const MAX_SCORE: u32 = 95;

/// Hashtags in order of appearance, lower-cased, without the `#`
pub fn extract_hashtags(content: &str) -> Vec<String> {
    HASHTAG_RE
        .find_iter(content)
        .map(|m| m.as_str()[1..].to_lowercase())
        .collect()
}

/// Split model output into a draft
///
/// The trailing run of `#tag` tokens is removed from the body. The hashtag
/// list holds every distinct tag in the output, first occurrence first.
pub fn split_draft(content: &str) -> Draft {
    let mut hashtags: Vec<String> = Vec::new();
    for tag in extract_hashtags(content) {
        if !hashtags.contains(&tag) {
            hashtags.push(tag);
        }
    }

    let mut body = content.trim();
    loop {
        let start = body
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        let last = &body[start..];
        if last.is_empty() || !HASHTAG_TOKEN_RE.is_match(last) {
            break;
        }
        body = body[..start].trim_end();
    }

    Draft::new(body, hashtags)
}

/// Mentions in order of appearance, including the `@`
pub fn extract_mentions(content: &str) -> Vec<String> {
    MENTION_RE
        .find_iter(content)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Forecast likes, comments and shares from surface features of a post
pub fn predict_engagement(
    content: &str,
    industry: Option<&str>,
    tone: Option<&str>,
    audience: Option<&str>,
) -> EngagementPrediction {
    let lower = content.to_lowercase();
    let word_count = content.split_whitespace().count();
    let sentence_count = content.split('.').filter(|s| !s.trim().is_empty()).count();
    let hashtag_count = extract_hashtags(content).len();

    let mut score = 45.0_f64;
    if content.contains('?') {
        score += 20.0;
    }
    if CTA_PHRASES.iter().any(|p| lower.contains(p)) {
        score += 15.0;
    }
    if STORY_PHRASES.iter().any(|p| lower.contains(p)) {
        score += 18.0;
    }
    if DATA_KEYWORDS.iter().any(|k| lower.contains(k)) {
        score += 12.0;
    }
    if (3..=5).contains(&hashtag_count) {
        score += 8.0;
    }
    if (100..=200).contains(&word_count) {
        score += 10.0;
    }
    if sentence_count >= 3 {
        score += 5.0;
    }

    score *= match tone {
        Some("casual") => 1.25,
        Some("inspirational") => 1.35,
        _ => 1.0,
    };
    score *= match audience {
        Some("entry") => 1.1,
        Some("manager") => 1.2,
        Some("executive") => 1.15,
        _ => 1.0,
    };
    if matches!(industry, Some("Technology") | Some("Marketing")) {
        score *= 1.1;
    }

    let engagement_score = (score as u32).min(MAX_SCORE);
    EngagementPrediction {
        predicted_likes: (engagement_score * 3).min(300),
        predicted_comments: (engagement_score / 3).min(35),
        predicted_shares: (engagement_score / 8).min(15),
        engagement_score,
    }
}
