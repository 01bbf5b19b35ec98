/**
 * Content Service
 *
 * Orchestrates everything a content handler needs from the text model:
 * profile-aware generation with retries, A/B variations, improvements and
 * topic suggestions. Generated and improved drafts pass through the
 * `BudgetEnforcer` before they are returned.
 *
 * The service is stateless apart from the trend catalog it owns, so one
 * instance is shared by all requests behind an `Arc`.
 */

use std::sync::Arc;

use futures_util::future::join_all;
use serde::Serialize;

use crate::backend::content::enforcer::BudgetEnforcer;
use crate::backend::content::engagement::{extract_mentions, predict_engagement, split_draft};
use crate::backend::content::generator::{GenerationError, TextGenerator};
use crate::backend::content::prompts::{
    fallback_post, fallback_suggestions, improvement_prompt, parse_suggestions,
    suggestion_prompt, AuthorProfile, GenerationRequest, PromptBuilder, RewriteStyle,
};
use crate::backend::content::retry::{retry_with_backoff, RetryPolicy, Sleeper, TokioSleeper};
use crate::shared::content::{
    EngagementPrediction, EnforcementResult, PostLength, PostType, SuggestionType,
};

/// Post types and tones cycled through by `generate_variations`
const VARIATION_STYLES: [(PostType, &str); 3] = [
    (PostType::Professional, "professional"),
    (PostType::Casual, "casual"),
    (PostType::ThoughtLeadership, "inspirational"),
];

/// A draft that went through the budget enforcer
#[derive(Debug, Clone)]
pub struct EnforcedPost {
    pub enforcement: EnforcementResult,
    pub mentions: Vec<String>,
    pub engagement: EngagementPrediction,
    pub prompt_summary: String,
    pub model: String,
}

/// One A/B variation of a topic
#[derive(Debug, Clone, Serialize)]
pub struct Variation {
    pub content: String,
    pub hashtags: Vec<String>,
    pub mentions: Vec<String>,
    pub post_type: PostType,
    pub tone: String,
    pub ai_model: String,
    pub topic: String,
    pub estimated_engagement: EngagementPrediction,
    /// Set when generation failed and a template post was used instead
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Parameters of an `/improve` request after validation
#[derive(Debug, Clone)]
pub struct ImproveRequest {
    pub content: String,
    pub suggestion: SuggestionType,
    pub target_tone: Option<String>,
    pub specific_request: Option<String>,
    pub max_characters: usize,
}

/// Text model orchestration shared by all content handlers
pub struct ContentService {
    generator: Arc<dyn TextGenerator>,
    prompts: PromptBuilder,
    enforcer: BudgetEnforcer,
    retry: RetryPolicy,
    sleeper: Arc<dyn Sleeper>,
}

impl ContentService {
    pub fn new(generator: Arc<dyn TextGenerator>, rewrite_timeout: std::time::Duration) -> Self {
        Self {
            enforcer: BudgetEnforcer::new(generator.clone(), rewrite_timeout),
            generator,
            prompts: PromptBuilder::default(),
            retry: RetryPolicy::default(),
            sleeper: Arc::new(TokioSleeper),
        }
    }

    /// Replace the retry policy and the sleeper used between attempts
    pub fn with_retry(mut self, retry: RetryPolicy, sleeper: Arc<dyn Sleeper>) -> Self {
        self.retry = retry;
        self.sleeper = sleeper;
        self
    }

    pub fn with_prompts(mut self, prompts: PromptBuilder) -> Self {
        self.prompts = prompts;
        self
    }

    pub fn model_name(&self) -> &str {
        self.generator.model_name()
    }

    /// Generate a post for `profile` and enforce `max_characters` on it
    ///
    /// The initial call is retried with backoff. If every attempt fails the
    /// error is returned; there is no fallback on this path.
    pub async fn generate_post(
        &self,
        profile: &AuthorProfile,
        request: &GenerationRequest,
        max_characters: usize,
    ) -> Result<EnforcedPost, GenerationError> {
        let raw = self.generate_with_retry(profile, request).await?;

        let draft = split_draft(&raw);
        let mentions = extract_mentions(&raw);
        let engagement = predict_engagement(
            &raw,
            Some(profile.industry_or_default()),
            Some(request.tone.as_str()),
            request.audience.as_deref(),
        );

        let enforcement = self
            .enforcer
            .enforce(draft, max_characters, RewriteStyle::LongForm)
            .await;

        Ok(EnforcedPost {
            enforcement,
            mentions,
            engagement,
            prompt_summary: format!(
                "Topic: {}, Type: {}, Tone: {}",
                request.topic,
                request.post_type.as_str(),
                request.tone
            ),
            model: self.model_name().to_string(),
        })
    }

    /// Three concurrent generations with different post types and tones
    ///
    /// A variation whose generation fails carries a template post and the
    /// error message instead.
    pub async fn generate_variations(&self, profile: &AuthorProfile, topic: &str) -> Vec<Variation> {
        let tasks = VARIATION_STYLES.iter().map(|(post_type, tone)| {
            let request = GenerationRequest {
                topic: topic.to_string(),
                post_type: *post_type,
                length: PostLength::Medium,
                tone: tone.to_string(),
                audience: None,
            };
            async move {
                let result = self.generate_with_retry(profile, &request).await;
                self.variation(profile, request, result)
            }
        });

        join_all(tasks).await
    }

    /// Apply an improvement and enforce the budget on the result
    pub async fn improve(
        &self,
        profile: &AuthorProfile,
        request: &ImproveRequest,
    ) -> Result<EnforcedPost, GenerationError> {
        let prompt = improvement_prompt(
            request.suggestion,
            &request.content,
            request.target_tone.as_deref(),
            request.specific_request.as_deref(),
            request.max_characters,
        );
        let improved = self.generator.generate(&prompt).await?;

        let draft = split_draft(&improved);
        let mentions = extract_mentions(&improved);
        let engagement = predict_engagement(
            &improved,
            Some(profile.industry_or_default()),
            request.target_tone.as_deref(),
            None,
        );

        let enforcement = self
            .enforcer
            .enforce(draft, request.max_characters, RewriteStyle::Concise)
            .await;

        Ok(EnforcedPost {
            enforcement,
            mentions,
            engagement,
            prompt_summary: format!("Suggestion type: {}", request.suggestion.as_str()),
            model: self.model_name().to_string(),
        })
    }

    /// Up to five topic ideas for `industry`, or the static list on failure
    pub async fn suggestions(&self, industry: &str) -> Vec<String> {
        match self.generator.generate(&suggestion_prompt(industry)).await {
            Ok(text) => {
                let parsed = parse_suggestions(&text);
                if parsed.is_empty() {
                    fallback_suggestions(industry)
                } else {
                    parsed
                }
            }
            Err(e) => {
                tracing::warn!("AI suggestion generation failed: {}", e);
                fallback_suggestions(industry)
            }
        }
    }

    async fn generate_with_retry(
        &self,
        profile: &AuthorProfile,
        request: &GenerationRequest,
    ) -> Result<String, GenerationError> {
        let prompt = self.prompts.generation_prompt(profile, request);
        let generator = &self.generator;
        let prompt = prompt.as_str();

        retry_with_backoff(
            &self.retry,
            self.sleeper.as_ref(),
            |_: &GenerationError| true,
            move || generator.generate(prompt),
        )
        .await
        .map_err(|e| {
            tracing::error!("Post generation failed after retries: {}", e);
            e
        })
    }

    fn variation(
        &self,
        profile: &AuthorProfile,
        request: GenerationRequest,
        result: Result<String, GenerationError>,
    ) -> Variation {
        let (content, error) = match result {
            Ok(content) => (content, None),
            Err(e) => (fallback_post(&request.topic, profile), Some(e.to_string())),
        };

        let draft = split_draft(&content);
        let estimated_engagement = predict_engagement(
            &content,
            Some(profile.industry_or_default()),
            Some(request.tone.as_str()),
            None,
        );

        Variation {
            mentions: extract_mentions(&content),
            content: draft.text,
            hashtags: draft.hashtags,
            post_type: request.post_type,
            tone: request.tone,
            ai_model: self.model_name().to_string(),
            topic: request.topic,
            estimated_engagement,
            error,
        }
    }
}
