//! Character Budget
//!
//! Pure measuring and trimming functions used by the content enforcer.
//!
//! A draft is rendered as its text, followed by one space and the hashtags as
//! `#tag` tokens joined by single spaces. The separator only counts when at
//! least one hashtag exists. All lengths are counted in `char`s and every cut
//! lands on a char boundary.
//!
//! # Usage
//!
//! ```rust
//! use postpilot::shared::budget::{classify, rendered_length, trim_to_limit};
//! use postpilot::shared::content::BudgetStatus;
//!
//! let tags = vec!["rust".to_string()];
//! let result = classify("Shipping today.", &tags, 100);
//! assert_eq!(result.status, BudgetStatus::WithinLimit);
//!
//! let (text, tags) = trim_to_limit("Too long for the budget. Really.", &tags, 20);
//! assert!(rendered_length(&text, &tags) <= 20);
//! ```

use crate::shared::content::{BudgetClassification, BudgetStatus};

/// Render hashtags as `#tag` tokens joined by single spaces
pub fn render_hashtags(hashtags: &[String]) -> String {
    hashtags
        .iter()
        .map(|tag| format!("#{}", tag))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Length of `text` plus its rendered hashtags
pub fn rendered_length(text: &str, hashtags: &[String]) -> usize {
    let text_len = text.chars().count();
    if hashtags.is_empty() {
        return text_len;
    }
    text_len + 1 + render_hashtags(hashtags).chars().count()
}

/// `value * numerator / denominator` rounded down, without overflowing
pub fn fraction_of(value: usize, numerator: usize, denominator: usize) -> usize {
    value / denominator * numerator + value % denominator * numerator / denominator
}

/// Soft threshold: 90% of the budget, rounded down
pub fn soft_limit(max_characters: usize) -> usize {
    fraction_of(max_characters, 9, 10)
}

/// Classify a draft against `max_characters`
pub fn classify(text: &str, hashtags: &[String], max_characters: usize) -> BudgetClassification {
    let total_length = rendered_length(text, hashtags);
    let soft_limit = soft_limit(max_characters);

    let status = if total_length <= soft_limit {
        BudgetStatus::WithinLimit
    } else if total_length <= max_characters {
        BudgetStatus::NearLimit
    } else {
        BudgetStatus::ExceedsLimit
    };

    BudgetClassification {
        status,
        soft_limit,
        total_length,
    }
}

/// Trim a draft until its rendered length fits `max_characters`
///
/// The text is shortened first, preferring a sentence end, then a word
/// boundary, then a hard cut. Hashtags are then dropped from the end. If the
/// text alone still exceeds the budget once every hashtag is gone, it is cut
/// again against the whole budget. For any `max_characters > 0` the result
/// fits.
pub fn trim_to_limit(
    text: &str,
    hashtags: &[String],
    max_characters: usize,
) -> (String, Vec<String>) {
    if rendered_length(text, hashtags) <= max_characters {
        return (text.to_string(), hashtags.to_vec());
    }

    let tags_len = render_hashtags(hashtags).chars().count();
    let mut text = text.to_string();

    // No room for the full tag set next to any text: leave the text for now
    // and let the tag loop below make space.
    if let Some(allowed_len) = max_characters.checked_sub(tags_len.saturating_add(1)) {
        if allowed_len > 0 && text.chars().count() > allowed_len {
            text = cut_at_boundary(&text, allowed_len);
        }
    }

    let mut tags = hashtags.to_vec();
    while rendered_length(&text, &tags) > max_characters && !tags.is_empty() {
        tags.pop();
    }

    if tags.is_empty() && text.chars().count() > max_characters {
        text = cut_at_boundary(&text, max_characters);
    }

    (text.trim().to_string(), tags)
}

/// Cut `text` to at most `allowed_len` chars at the cleanest boundary
///
/// A sentence terminator or a space only counts when it sits past 60% of
/// `allowed_len`; otherwise the hard cut is kept with trailing whitespace
/// removed.
fn cut_at_boundary(text: &str, allowed_len: usize) -> String {
    let end = byte_offset(text, allowed_len);
    let truncated = &text[..end];

    let guard = fraction_of(allowed_len, 6, 10);
    let past_guard = |char_pos: usize| char_pos > guard;

    let mut last_terminator = None;
    let mut last_space = None;
    for (char_pos, (byte_pos, c)) in truncated.char_indices().enumerate() {
        match c {
            '.' | '!' | '?' => last_terminator = Some((char_pos, byte_pos + c.len_utf8())),
            ' ' => last_space = Some((char_pos, byte_pos)),
            _ => {}
        }
    }

    if let Some((char_pos, cut)) = last_terminator {
        if past_guard(char_pos) {
            return truncated[..cut].to_string();
        }
    }
    if let Some((char_pos, cut)) = last_space {
        if past_guard(char_pos) {
            return truncated[..cut].to_string();
        }
    }

    truncated.trim_end().to_string()
}

/// Byte offset of the `n`th char, or the end of the string
fn byte_offset(text: &str, n: usize) -> usize {
    text.char_indices()
        .nth(n)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_render_hashtags() {
        assert_eq!(render_hashtags(&tags(&["rust", "ai"])), "#rust #ai");
        assert_eq!(render_hashtags(&[]), "");
    }

    #[test]
    fn test_rendered_length_counts_separator_only_with_tags() {
        assert_eq!(rendered_length("hello", &[]), 5);
        assert_eq!(rendered_length("hello", &tags(&["rust"])), 5 + 1 + 5);
        assert_eq!(rendered_length("", &tags(&["a"])), 3);
    }

    #[test]
    fn test_rendered_length_counts_chars_not_bytes() {
        assert_eq!(rendered_length("héllo 🚀", &[]), 7);
    }

    #[test]
    fn test_classification_boundary() {
        let at_soft = "x".repeat(90);
        let over_soft = "x".repeat(91);
        let at_max = "x".repeat(100);
        let over_max = "x".repeat(101);

        let c = classify(&at_soft, &[], 100);
        assert_eq!(c.soft_limit, 90);
        assert_eq!(c.status, BudgetStatus::WithinLimit);
        assert_eq!(classify(&over_soft, &[], 100).status, BudgetStatus::NearLimit);
        assert_eq!(classify(&at_max, &[], 100).status, BudgetStatus::NearLimit);
        assert_eq!(classify(&over_max, &[], 100).status, BudgetStatus::ExceedsLimit);
    }

    #[test]
    fn test_fraction_of_matches_plain_arithmetic() {
        for value in [0, 1, 9, 10, 99, 100, 101, 2999, 3000] {
            assert_eq!(fraction_of(value, 9, 10), value * 9 / 10);
            assert_eq!(fraction_of(value, 85, 100), value * 85 / 100);
        }
    }

    #[test]
    fn test_huge_budget_does_not_overflow() {
        assert_eq!(soft_limit(usize::MAX), usize::MAX / 10 * 9 + 4);

        let c = classify("hello", &tags(&["rust"]), usize::MAX);
        assert_eq!(c.status, BudgetStatus::WithinLimit);

        let (text, kept) = trim_to_limit("hello world", &tags(&["rust"]), usize::MAX);
        assert_eq!(text, "hello world");
        assert_eq!(kept, tags(&["rust"]));
    }

    #[test]
    fn test_classification_includes_hashtags() {
        // 84 + 1 + "#rust" (5) = 90
        let text = "x".repeat(84);
        let c = classify(&text, &tags(&["rust"]), 100);
        assert_eq!(c.total_length, 90);
        assert_eq!(c.status, BudgetStatus::WithinLimit);
    }

    #[test]
    fn test_exact_fit_scenario() {
        let text = "a".repeat(2690);
        let c = classify(&text, &[], 3000);
        assert_eq!(c.soft_limit, 2700);
        assert_eq!(c.total_length, 2690);
        assert_eq!(c.status, BudgetStatus::WithinLimit);

        let (trimmed, kept) = trim_to_limit(&text, &[], 3000);
        assert_eq!(trimmed, text);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_fitting_input_is_returned_unchanged() {
        let (text, kept) = trim_to_limit("  padded  ", &tags(&["a", "b"]), 100);
        assert_eq!(text, "  padded  ");
        assert_eq!(kept, tags(&["a", "b"]));
    }

    #[test]
    fn test_prefers_sentence_boundary() {
        let text = "Great insight. ".repeat(20);
        let (trimmed, kept) = trim_to_limit(&text, &[], 100);

        assert!(trimmed.ends_with('.'));
        assert!(trimmed.chars().count() <= 100);
        assert!(trimmed.chars().count() as f64 > 0.6 * 99.0);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_falls_back_to_word_boundary() {
        let text = "word ".repeat(40);
        let (trimmed, _) = trim_to_limit(&text, &[], 50);

        assert!(trimmed.ends_with("word"));
        assert!(trimmed.chars().count() <= 50);
    }

    #[test]
    fn test_early_sentence_boundary_is_ignored() {
        // The only period sits at position 2, well before 60% of the budget
        let text = format!("Hi. {}", "longword ".repeat(20));
        let (trimmed, _) = trim_to_limit(&text, &[], 60);

        assert!(!trimmed.ends_with('.'));
        assert!(trimmed.ends_with("longword"));
    }

    #[test]
    fn test_hard_cut_without_boundaries() {
        let text = "a".repeat(200);
        let (trimmed, _) = trim_to_limit(&text, &[], 50);
        assert_eq!(trimmed, "a".repeat(49));
    }

    #[test]
    fn test_text_is_cut_to_leave_room_for_tags() {
        let text = "a".repeat(150);
        let hashtags = tags(&["rust", "ai"]);
        let (trimmed, kept) = trim_to_limit(&text, &hashtags, 100);

        // "#rust #ai" is 9 chars, so 90 remain for text
        assert_eq!(trimmed.chars().count(), 90);
        assert_eq!(kept, hashtags);
        assert_eq!(rendered_length(&trimmed, &kept), 100);
    }

    #[test]
    fn test_hashtags_dropped_from_the_end() {
        let text = "Short text here.";
        let hashtags = tags(&["first", "second", "third", "fourth"]);
        // The full tag set leaves no room for text, so the text is kept
        // and tags go from the end until 16 + 1 + "#first" (6) fits
        let (trimmed, kept) = trim_to_limit(text, &hashtags, 30);

        assert_eq!(kept, tags(&["first"]));
        assert_eq!(trimmed, text);
    }

    #[test]
    fn test_text_cut_keeps_every_tag_when_room_remains() {
        let text = "Short text here.";
        let hashtags = tags(&["first", "second", "third", "fourth"]);
        let (trimmed, kept) = trim_to_limit(text, &hashtags, 32);

        assert_eq!(kept, hashtags);
        assert_eq!(trimmed, "Sh");
    }

    #[test]
    fn test_hashtag_exhaustion() {
        let text = "This sentence alone is already longer than the budget allows.";
        let hashtags = tags(&["leadership", "innovation"]);
        let (trimmed, kept) = trim_to_limit(text, &hashtags, 20);

        assert!(kept.is_empty());
        assert!(trimmed.chars().count() <= 20);
        assert!(!trimmed.is_empty());
    }

    #[test]
    fn test_multibyte_text_is_cut_on_char_boundaries() {
        let text = "é".repeat(30);
        let (trimmed, _) = trim_to_limit(&text, &[], 10);
        assert_eq!(trimmed.chars().count(), 9);
    }
}
