//! Property-based tests for the character budget

use postpilot::shared::budget::{classify, rendered_length, soft_limit, trim_to_limit};
use postpilot::shared::BudgetStatus;
use proptest::prelude::*;

fn hashtag() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,20}"
}

fn post_text() -> impl Strategy<Value = String> {
    // Words, sentence ends and a few multi-byte chars
    prop::collection::vec(
        prop_oneof![
            "[A-Za-z]{1,12}",
            Just(".".to_string()),
            Just("!".to_string()),
            Just("é".to_string()),
            Just("🚀".to_string()),
        ],
        0..120,
    )
    .prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn test_trimmed_draft_always_fits(
        text in post_text(),
        hashtags in prop::collection::vec(hashtag(), 0..8),
        max in 1usize..600,
    ) {
        let (trimmed, kept) = trim_to_limit(&text, &hashtags, max);
        prop_assert!(rendered_length(&trimmed, &kept) <= max);
    }

    #[test]
    fn test_trimming_keeps_a_hashtag_prefix(
        text in post_text(),
        hashtags in prop::collection::vec(hashtag(), 0..8),
        max in 1usize..600,
    ) {
        let (_, kept) = trim_to_limit(&text, &hashtags, max);
        prop_assert!(kept.len() <= hashtags.len());
        prop_assert_eq!(&hashtags[..kept.len()], &kept[..]);
    }

    #[test]
    fn test_fitting_draft_is_unchanged(
        text in post_text(),
        hashtags in prop::collection::vec(hashtag(), 0..8),
        slack in 0usize..50,
    ) {
        let max = rendered_length(&text, &hashtags) + slack;
        prop_assume!(max > 0);

        let (trimmed, kept) = trim_to_limit(&text, &hashtags, max);
        prop_assert_eq!(trimmed, text);
        prop_assert_eq!(kept, hashtags);
    }

    #[test]
    fn test_classification_matches_thresholds(
        text in post_text(),
        hashtags in prop::collection::vec(hashtag(), 0..8),
        max in 1usize..800,
    ) {
        let result = classify(&text, &hashtags, max);
        let total = rendered_length(&text, &hashtags);

        prop_assert_eq!(result.total_length, total);
        prop_assert_eq!(result.soft_limit, soft_limit(max));
        let expected = if total <= soft_limit(max) {
            BudgetStatus::WithinLimit
        } else if total <= max {
            BudgetStatus::NearLimit
        } else {
            BudgetStatus::ExceedsLimit
        };
        prop_assert_eq!(result.status, expected);
    }
}
