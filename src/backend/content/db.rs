/**
 * Posts Persistence
 *
 * Database operations for the `posts` table. Hashtags, mentions, topics and
 * the engagement forecast are stored as JSONB and decoded into typed values.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::shared::content::{EngagementPrediction, PostStatus};

/// A stored post
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub post_type: Option<String>,
    pub hashtags: Json<Vec<String>>,
    pub mentions: Json<Vec<String>>,
    pub status: String,
    pub scheduled_time: Option<DateTime<Utc>>,
    pub published_time: Option<DateTime<Utc>>,
    pub linkedin_post_id: Option<String>,
    pub linkedin_url: Option<String>,
    pub ai_prompt_used: Option<String>,
    pub generation_model: Option<String>,
    pub topics_used: Json<Vec<String>>,
    pub predicted_engagement: Option<Json<EngagementPrediction>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Values for a new post row
#[derive(Debug, Clone)]
pub struct NewPost<'a> {
    pub user_id: Uuid,
    pub content: &'a str,
    pub post_type: Option<&'a str>,
    pub hashtags: &'a [String],
    pub mentions: &'a [String],
    pub status: PostStatus,
    pub ai_prompt_used: Option<&'a str>,
    pub generation_model: Option<&'a str>,
    pub topics_used: &'a [String],
    pub predicted_engagement: Option<EngagementPrediction>,
}

/// Insert a post and return the stored row
pub async fn insert_post(pool: &PgPool, post: &NewPost<'_>) -> Result<Post, sqlx::Error> {
    let now = Utc::now();

    let stored = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (id, user_id, content, post_type, hashtags, mentions, status,
                           ai_prompt_used, generation_model, topics_used, predicted_engagement,
                           created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $12)
        RETURNING id, user_id, content, post_type, hashtags, mentions, status, scheduled_time,
                  published_time, linkedin_post_id, linkedin_url, ai_prompt_used, generation_model,
                  topics_used, predicted_engagement, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(post.user_id)
    .bind(post.content)
    .bind(post.post_type)
    .bind(Json(post.hashtags))
    .bind(Json(post.mentions))
    .bind(post.status.as_str())
    .bind(post.ai_prompt_used)
    .bind(post.generation_model)
    .bind(Json(post.topics_used))
    .bind(post.predicted_engagement.map(Json))
    .bind(now)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Stored {} post {} for user {}", stored.status, stored.id, stored.user_id);
    Ok(stored)
}

/// Draft posts of a user, newest first
pub async fn list_drafts(pool: &PgPool, user_id: Uuid) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, user_id, content, post_type, hashtags, mentions, status, scheduled_time,
               published_time, linkedin_post_id, linkedin_url, ai_prompt_used, generation_model,
               topics_used, predicted_engagement, created_at, updated_at
        FROM posts
        WHERE user_id = $1 AND status = 'draft'
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// A post owned by `user_id`, or `None`
pub async fn get_user_post(
    pool: &PgPool,
    post_id: Uuid,
    user_id: Uuid,
) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, user_id, content, post_type, hashtags, mentions, status, scheduled_time,
               published_time, linkedin_post_id, linkedin_url, ai_prompt_used, generation_model,
               topics_used, predicted_engagement, created_at, updated_at
        FROM posts
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Record a scheduled time; `None` when the post is not the user's
pub async fn schedule_post(
    pool: &PgPool,
    post_id: Uuid,
    user_id: Uuid,
    scheduled_time: DateTime<Utc>,
) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET scheduled_time = $1, status = $2, updated_at = $3
        WHERE id = $4 AND user_id = $5
        RETURNING id, user_id, content, post_type, hashtags, mentions, status, scheduled_time,
                  published_time, linkedin_post_id, linkedin_url, ai_prompt_used, generation_model,
                  topics_used, predicted_engagement, created_at, updated_at
        "#,
    )
    .bind(scheduled_time)
    .bind(PostStatus::Scheduled.as_str())
    .bind(Utc::now())
    .bind(post_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Mark a post as published on LinkedIn
pub async fn mark_published(
    pool: &PgPool,
    post_id: Uuid,
    linkedin_post_id: &str,
    linkedin_url: &str,
) -> Result<Post, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET status = $1, published_time = $2, linkedin_post_id = $3, linkedin_url = $4,
            updated_at = $2
        WHERE id = $5
        RETURNING id, user_id, content, post_type, hashtags, mentions, status, scheduled_time,
                  published_time, linkedin_post_id, linkedin_url, ai_prompt_used, generation_model,
                  topics_used, predicted_engagement, created_at, updated_at
        "#,
    )
    .bind(PostStatus::Published.as_str())
    .bind(now)
    .bind(linkedin_post_id)
    .bind(linkedin_url)
    .bind(post_id)
    .fetch_one(pool)
    .await
}
