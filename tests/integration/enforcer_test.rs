//! Budget enforcer tests through the public API
//!
//! Each scenario drives `BudgetEnforcer` with a canned generator and checks
//! the final text, hashtags, length and warnings.

use postpilot::backend::content::enforcer::FALLBACK_WARNING;
use postpilot::backend::content::prompts::RewriteStyle;
use postpilot::backend::content::BudgetEnforcer;
use postpilot::shared::{rendered_length, Draft};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;

use crate::common::CannedGenerator;

fn tags(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn enforcer(generator: Arc<CannedGenerator>) -> BudgetEnforcer {
    BudgetEnforcer::new(generator, Duration::from_secs(1))
}

#[tokio::test]
async fn test_exact_fit_is_accepted_without_rewrite() {
    let generator = Arc::new(CannedGenerator::new(Vec::new()));
    let text = "a".repeat(94);
    let draft = Draft::new(text.clone(), tags(&["rust"]));
    assert_eq!(rendered_length(&draft.text, &draft.hashtags), 100);

    let result = enforcer(generator.clone())
        .enforce(draft, 100, RewriteStyle::LongForm)
        .await;

    assert_eq!(result.final_text, text);
    assert_eq!(result.total_length, 100);
    assert!(result.warnings.is_empty());
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn test_rewrite_that_fits_is_accepted() {
    let rewrite = "Short and sweet.";
    let generator = Arc::new(CannedGenerator::new(vec![Some(rewrite)]));
    let draft = Draft::new("word ".repeat(40), tags(&["ai", "growth"]));

    let result = enforcer(generator.clone())
        .enforce(draft, 60, RewriteStyle::Concise)
        .await;

    assert_eq!(result.final_text, rewrite);
    assert_eq!(result.final_hashtags, tags(&["ai", "growth"]));
    assert_eq!(result.total_length, rendered_length(rewrite, &tags(&["ai", "growth"])));
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("AI rewrite applied"));
    assert_eq!(generator.calls(), 1);
    assert!(generator.prompt(0).contains("60"));
}

#[tokio::test]
async fn test_generator_failure_falls_back_to_trimming() {
    let generator = Arc::new(CannedGenerator::new(vec![None]));
    let text = "First sentence is here. Second sentence follows it. Third one is long too.";
    let draft = Draft::new(text, tags(&["one", "two", "three"]));

    let result = enforcer(generator.clone())
        .enforce(draft, 50, RewriteStyle::LongForm)
        .await;

    assert!(result.total_length <= 50);
    assert_eq!(result.warnings, vec![FALLBACK_WARNING.to_string()]);
    assert!(["one", "two", "three"].starts_with(
        &result.final_hashtags.iter().map(String::as_str).collect::<Vec<_>>()
    ));
    assert_eq!(generator.calls(), 1);
}

#[tokio::test]
async fn test_hashtag_exhaustion() {
    let generator = Arc::new(CannedGenerator::new(vec![Some("x".repeat(500).as_str())]));
    let draft = Draft::new("y".repeat(40), tags(&["averyveryverylonghashtag", "another"]));

    let result = enforcer(generator)
        .enforce(draft, 30, RewriteStyle::LongForm)
        .await;

    assert!(result.total_length <= 30);
    assert!(result.final_hashtags.is_empty());
    assert_eq!(result.warnings, vec![FALLBACK_WARNING.to_string()]);
}
