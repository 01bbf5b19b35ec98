/**
 * Budget Enforcer
 *
 * Makes a freshly generated or improved draft fit its character budget.
 *
 * # Ladder
 *
 * 1. Classify the draft. Within or near the limit: accept it untouched.
 * 2. Over the limit: ask the generator for exactly one rewrite, bounded by
 *    a timeout.
 * 3. Classify the rewrite against the original hashtags. If it fits, accept
 *    it with an "AI rewrite" warning.
 * 4. Otherwise (still too long, generator error, empty reply or timeout)
 *    trim the original draft deterministically and record a
 *    "Fallback trimming" warning.
 *
 * The enforcer never fails. `max_characters` must be positive; callers
 * reject other budgets before getting here.
 */

use std::sync::Arc;
use std::time::Duration;

use crate::backend::content::generator::{GenerationError, TextGenerator};
use crate::backend::content::prompts::RewriteStyle;
use crate::shared::budget::{classify, trim_to_limit};
use crate::shared::content::{Draft, EnforcementResult};

/// Warning recorded when the deterministic trimmer produced the result
pub const FALLBACK_WARNING: &str = "Fallback trimming applied to enforce character limit";

/// Runs the accept / rewrite / trim ladder
#[derive(Clone)]
pub struct BudgetEnforcer {
    generator: Arc<dyn TextGenerator>,
    rewrite_timeout: Duration,
}

impl BudgetEnforcer {
    pub fn new(generator: Arc<dyn TextGenerator>, rewrite_timeout: Duration) -> Self {
        Self {
            generator,
            rewrite_timeout,
        }
    }

    /// Enforce `max_characters` on `draft`
    pub async fn enforce(
        &self,
        draft: Draft,
        max_characters: usize,
        style: RewriteStyle,
    ) -> EnforcementResult {
        let initial = classify(&draft.text, &draft.hashtags, max_characters);
        if initial.status.fits() {
            return EnforcementResult {
                final_text: draft.text,
                final_hashtags: draft.hashtags,
                total_length: initial.total_length,
                warnings: Vec::new(),
            };
        }

        tracing::info!(
            "Draft exceeds character limit ({} > {}), requesting rewrite",
            initial.total_length,
            max_characters
        );

        match self.rewrite(&draft.text, max_characters, style).await {
            Ok(rewritten) => {
                let check = classify(&rewritten, &draft.hashtags, max_characters);
                if check.status.fits() {
                    return EnforcementResult {
                        final_text: rewritten,
                        final_hashtags: draft.hashtags,
                        total_length: check.total_length,
                        warnings: vec![format!(
                            "First attempt exceeded character limit → AI rewrite applied (final length: {})",
                            check.total_length
                        )],
                    };
                }
                tracing::warn!(
                    "Rewrite still exceeds character limit ({} > {})",
                    check.total_length,
                    max_characters
                );
            }
            Err(e) => {
                tracing::warn!("Rewrite failed, falling back to trimming: {}", e);
            }
        }

        let (final_text, final_hashtags) =
            trim_to_limit(&draft.text, &draft.hashtags, max_characters);
        let total_length = classify(&final_text, &final_hashtags, max_characters).total_length;

        EnforcementResult {
            final_text,
            final_hashtags,
            total_length,
            warnings: vec![FALLBACK_WARNING.to_string()],
        }
    }

    async fn rewrite(
        &self,
        text: &str,
        max_characters: usize,
        style: RewriteStyle,
    ) -> Result<String, GenerationError> {
        let prompt = style.prompt(text, max_characters);
        let rewritten = tokio::time::timeout(self.rewrite_timeout, self.generator.generate(&prompt))
            .await
            .map_err(|_| GenerationError::Timeout(self.rewrite_timeout))??;

        let rewritten = rewritten.trim();
        if rewritten.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(rewritten.to_string())
    }
}
