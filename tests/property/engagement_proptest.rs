//! Property-based tests for hashtag splitting and the engagement forecast

use postpilot::backend::content::engagement::{extract_hashtags, predict_engagement, split_draft};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_forecast_stays_capped(
        content in "[ -~]{0,400}",
        tone in prop::option::of(prop_oneof![Just("casual"), Just("inspirational"), Just("professional")]),
        audience in prop::option::of(prop_oneof![Just("entry"), Just("manager"), Just("executive")]),
    ) {
        let prediction = predict_engagement(&content, Some("Technology"), tone, audience);
        prop_assert!(prediction.engagement_score <= 95);
        prop_assert!(prediction.predicted_likes <= 300);
        prop_assert!(prediction.predicted_comments <= 35);
        prop_assert!(prediction.predicted_shares <= 15);
    }

    #[test]
    fn test_split_draft_moves_trailing_tags(
        body in "[A-Za-z][A-Za-z ,.]{0,80}[a-z.]",
        tags in prop::collection::vec("[a-z][a-z0-9]{0,10}", 1..5),
    ) {
        let rendered: Vec<String> = tags.iter().map(|t| format!("#{}", t)).collect();
        let content = format!("{}\n\n{}", body, rendered.join(" "));

        let draft = split_draft(&content);
        prop_assert_eq!(draft.text, body.trim().to_string());
        for tag in &tags {
            prop_assert!(draft.hashtags.contains(tag));
        }
        for tag in &draft.hashtags {
            prop_assert!(!tag.starts_with('#'));
        }
    }

    #[test]
    fn test_extracted_hashtags_are_lowercase(content in "[ -~]{0,200}") {
        for tag in extract_hashtags(&content) {
            prop_assert_eq!(tag.to_lowercase(), tag.clone());
            prop_assert!(!tag.is_empty());
        }
    }
}
