/**
 * Content Handlers
 *
 * HTTP handlers for the `/api/content` routes.
 *
 * # Character Budget
 *
 * `/generate` and `/improve` accept an optional `max_characters`. It is
 * resolved before anything else: absent means the platform default, zero or
 * negative is rejected with 400 and never reaches the enforcer.
 *
 * # Persistence
 *
 * Generated and improved posts are stored before the response is sent, and
 * the stored id is returned as `post_id`. Variations are not stored.
 */

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use crate::backend::auth::handlers::load_current_user;
use crate::backend::content::db::{self, NewPost, Post};
use crate::backend::content::engagement::extract_mentions;
use crate::backend::content::prompts::{AuthorProfile, GenerationRequest};
use crate::backend::content::service::{ContentService, EnforcedPost, ImproveRequest, Variation};
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::require_pool;
use crate::shared::content::{
    resolve_max_characters, EngagementPrediction, PostLength, PostStatus, PostType,
    SuggestionType,
};

const IMPROVED_POST_TYPE: &str = "improved";

fn default_tone() -> String {
    "professional".to_string()
}

fn default_suggestion_type() -> String {
    SuggestionType::Improve.as_str().to_string()
}

/// Body of `POST /api/content/generate`
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub topic: String,
    #[serde(default)]
    pub post_type: PostType,
    #[serde(default)]
    pub length: PostLength,
    /// Overrides the industry stored on the profile
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default = "default_tone")]
    pub tone: String,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default)]
    pub max_characters: Option<i64>,
}

/// Body of `POST /api/content/improve`
#[derive(Debug, Deserialize)]
pub struct ImprovePostRequest {
    pub content: String,
    #[serde(default = "default_suggestion_type")]
    pub suggestion_type: String,
    #[serde(default)]
    pub target_tone: Option<String>,
    #[serde(default)]
    pub specific_request: Option<String>,
    #[serde(default)]
    pub max_characters: Option<i64>,
}

/// Body of `POST /api/content/save-draft`
#[derive(Debug, Deserialize)]
pub struct SaveDraftRequest {
    pub content: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub post_type: Option<PostType>,
    #[serde(default)]
    pub topic: Option<String>,
}

/// Body of `POST /api/content/schedule-post`
#[derive(Debug, Deserialize)]
pub struct ScheduleRequest {
    pub post_id: Uuid,
    pub scheduled_time: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct VariationsQuery {
    pub topic: String,
}

/// Response of `/generate` and `/improve`
#[derive(Debug, Serialize)]
pub struct GeneratedPostResponse {
    pub content: String,
    pub hashtags: Vec<String>,
    pub mentions: Vec<String>,
    pub post_type: String,
    pub ai_model: String,
    pub topic: String,
    pub estimated_engagement: EngagementPrediction,
    pub character_count: usize,
    pub status: &'static str,
    pub warnings: Vec<String>,
    pub post_id: Uuid,
}

impl GeneratedPostResponse {
    fn new(post: EnforcedPost, post_type: &str, topic: String, post_id: Uuid) -> Self {
        Self {
            content: post.enforcement.final_text,
            hashtags: post.enforcement.final_hashtags,
            mentions: post.mentions,
            post_type: post_type.to_string(),
            ai_model: post.model,
            topic,
            estimated_engagement: post.engagement,
            character_count: post.enforcement.total_length,
            status: "success",
            warnings: post.enforcement.warnings,
            post_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VariationsResponse {
    pub topic: String,
    pub variations: Vec<Variation>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct SaveDraftResponse {
    pub message: &'static str,
    pub post_id: Uuid,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DraftsResponse {
    pub drafts: Vec<Post>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub industry: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub success: bool,
    pub message: &'static str,
    pub post_id: Uuid,
    pub scheduled_time: DateTime<Utc>,
}

async fn load_profile(pool: &PgPool, user_id: Uuid) -> Result<AuthorProfile, BackendError> {
    let user = load_current_user(pool, user_id).await?;
    Ok(AuthorProfile::from(&user))
}

/// Generate a post, enforce its character budget and store it
///
/// # Errors
///
/// * `400 Bad Request` - `max_characters` is zero or negative
/// * `502 Bad Gateway` - The text model failed on every attempt
/// * `503 Service Unavailable` - If database is not configured
pub async fn generate(
    State(pool): State<Option<PgPool>>,
    State(content): State<Arc<ContentService>>,
    AuthUser(auth): AuthUser,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GeneratedPostResponse>, BackendError> {
    let max_characters = resolve_max_characters(request.max_characters)?;
    let pool = require_pool(pool)?;

    let mut profile = load_profile(&pool, auth.user_id).await?;
    if let Some(industry) = request.industry.filter(|i| !i.trim().is_empty()) {
        profile.industry = Some(industry);
    }

    tracing::info!(
        "Generating {} post on '{}' for user {} (max {} chars)",
        request.post_type.as_str(),
        request.topic,
        auth.user_id,
        max_characters
    );

    let generation = GenerationRequest {
        topic: request.topic,
        post_type: request.post_type,
        length: request.length,
        tone: request.tone,
        audience: request.audience,
    };

    let post = content
        .generate_post(&profile, &generation, max_characters)
        .await?;

    let topics = vec![generation.topic.clone()];
    let stored = db::insert_post(
        &pool,
        &NewPost {
            user_id: auth.user_id,
            content: &post.enforcement.final_text,
            post_type: Some(generation.post_type.as_str()),
            hashtags: &post.enforcement.final_hashtags,
            mentions: &post.mentions,
            status: PostStatus::Generated,
            ai_prompt_used: Some(&post.prompt_summary),
            generation_model: Some(&post.model),
            topics_used: &topics,
            predicted_engagement: Some(post.engagement),
        },
    )
    .await?;

    Ok(Json(GeneratedPostResponse::new(
        post,
        generation.post_type.as_str(),
        generation.topic,
        stored.id,
    )))
}

/// Three concurrent variations of one topic
pub async fn generate_variations(
    State(pool): State<Option<PgPool>>,
    State(content): State<Arc<ContentService>>,
    AuthUser(auth): AuthUser,
    Query(query): Query<VariationsQuery>,
) -> Result<Json<VariationsResponse>, BackendError> {
    let pool = require_pool(pool)?;
    let profile = load_profile(&pool, auth.user_id).await?;

    let variations = content.generate_variations(&profile, &query.topic).await;
    let failed = variations.iter().filter(|v| v.error.is_some()).count();
    if failed > 0 {
        tracing::warn!("{} of {} variations fell back to a template", failed, variations.len());
    }

    Ok(Json(VariationsResponse {
        topic: query.topic,
        total: variations.len(),
        variations,
    }))
}

/// Store user-written content as a draft
pub async fn save_draft(
    State(pool): State<Option<PgPool>>,
    AuthUser(auth): AuthUser,
    Json(request): Json<SaveDraftRequest>,
) -> Result<Json<SaveDraftResponse>, BackendError> {
    let pool = require_pool(pool)?;

    if request.content.trim().is_empty() {
        return Err(BackendError::bad_request("Content cannot be empty"));
    }

    let hashtags: Vec<String> = request
        .hashtags
        .iter()
        .map(|tag| tag.trim_start_matches('#').to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect();
    let mentions = extract_mentions(&request.content);
    let topics: Vec<String> = request.topic.into_iter().collect();

    let stored = db::insert_post(
        &pool,
        &NewPost {
            user_id: auth.user_id,
            content: &request.content,
            post_type: request.post_type.as_ref().map(PostType::as_str),
            hashtags: &hashtags,
            mentions: &mentions,
            status: PostStatus::Draft,
            ai_prompt_used: None,
            generation_model: None,
            topics_used: &topics,
            predicted_engagement: None,
        },
    )
    .await?;

    Ok(Json(SaveDraftResponse {
        message: "Draft saved successfully",
        post_id: stored.id,
        status: PostStatus::Draft.as_str(),
    }))
}

/// Drafts of the current user, newest first
pub async fn get_drafts(
    State(pool): State<Option<PgPool>>,
    AuthUser(auth): AuthUser,
) -> Result<Json<DraftsResponse>, BackendError> {
    let pool = require_pool(pool)?;
    let drafts = db::list_drafts(&pool, auth.user_id).await?;

    Ok(Json(DraftsResponse {
        total: drafts.len(),
        drafts,
    }))
}

/// Topic ideas for an industry
///
/// Public route. Falls back to a static list when the model is unavailable.
pub async fn get_suggestions(
    State(content): State<Arc<ContentService>>,
    Path(industry): Path<String>,
) -> Json<SuggestionsResponse> {
    let suggestions = content.suggestions(&industry).await;
    Json(SuggestionsResponse {
        industry,
        suggestions,
    })
}

/// Record a scheduled time for one of the user's posts
///
/// Nothing publishes the post at that time; only the status changes.
pub async fn schedule_post(
    State(pool): State<Option<PgPool>>,
    AuthUser(auth): AuthUser,
    Json(request): Json<ScheduleRequest>,
) -> Result<Json<ScheduleResponse>, BackendError> {
    let pool = require_pool(pool)?;

    let post = db::schedule_post(&pool, request.post_id, auth.user_id, request.scheduled_time)
        .await?
        .ok_or_else(|| BackendError::not_found("Post not found"))?;

    tracing::info!("Post {} scheduled for {}", post.id, request.scheduled_time);

    Ok(Json(ScheduleResponse {
        success: true,
        message: "Post scheduled",
        post_id: post.id,
        scheduled_time: request.scheduled_time,
    }))
}

/// Rewrite existing content and enforce the budget on the result
///
/// # Errors
///
/// * `400 Bad Request` - Unknown `suggestion_type` or non-positive `max_characters`
/// * `502 Bad Gateway` - The text model failed
/// * `503 Service Unavailable` - If database is not configured
pub async fn improve(
    State(pool): State<Option<PgPool>>,
    State(content): State<Arc<ContentService>>,
    AuthUser(auth): AuthUser,
    Json(request): Json<ImprovePostRequest>,
) -> Result<Json<GeneratedPostResponse>, BackendError> {
    let max_characters = resolve_max_characters(request.max_characters)?;
    let suggestion = SuggestionType::from_str(&request.suggestion_type)?;
    let pool = require_pool(pool)?;

    let profile = load_profile(&pool, auth.user_id).await?;

    let improve_request = ImproveRequest {
        content: request.content,
        suggestion,
        target_tone: request.target_tone,
        specific_request: request.specific_request,
        max_characters,
    };
    let post = content.improve(&profile, &improve_request).await?;

    let stored = db::insert_post(
        &pool,
        &NewPost {
            user_id: auth.user_id,
            content: &post.enforcement.final_text,
            post_type: Some(IMPROVED_POST_TYPE),
            hashtags: &post.enforcement.final_hashtags,
            mentions: &post.mentions,
            status: PostStatus::Improved,
            ai_prompt_used: Some(&post.prompt_summary),
            generation_model: Some(&post.model),
            topics_used: &[],
            predicted_engagement: Some(post.engagement),
        },
    )
    .await?;

    Ok(Json(GeneratedPostResponse::new(
        post,
        IMPROVED_POST_TYPE,
        String::new(),
        stored.id,
    )))
}
