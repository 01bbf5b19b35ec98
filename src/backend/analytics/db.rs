/**
 * Analytics Persistence
 *
 * Database operations for the `post_analytics` table, plus the aggregate
 * queries behind the dashboard and the performance trends.
 *
 * Rows are keyed by `post_id`. Counters are stored as reported; the only
 * derived value is `engagement_rate`, kept as a formatted percentage.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::shared::content::{AudienceData, MetricsSnapshot};

/// Rate stored for a post that has no metrics yet
pub const ZERO_RATE: &str = "0%";

/// A stored analytics row
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PostAnalytics {
    pub id: Uuid,
    pub user_id: Uuid,
    pub post_id: Uuid,
    pub likes_count: i32,
    pub comments_count: i32,
    pub shares_count: i32,
    pub views_count: i32,
    pub clicks_count: i32,
    pub engagement_rate: String,
    pub reach: i32,
    pub impressions: i32,
    pub audience_data: Option<Json<AudienceData>>,
    pub top_countries: Json<Vec<String>>,
    pub peak_engagement_time: Option<DateTime<Utc>>,
    pub metrics_history: Json<Vec<MetricsSnapshot>>,
    pub first_tracked: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

/// Partial metrics update; absent fields keep their stored value
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyticsUpdate {
    pub likes_count: Option<i32>,
    pub comments_count: Option<i32>,
    pub shares_count: Option<i32>,
    pub views_count: Option<i32>,
    pub clicks_count: Option<i32>,
    pub reach: Option<i32>,
    pub impressions: Option<i32>,
    pub audience_data: Option<AudienceData>,
    pub top_countries: Option<Vec<String>>,
    pub peak_engagement_time: Option<DateTime<Utc>>,
}

/// Counter values of one analytics row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub likes: i32,
    pub comments: i32,
    pub shares: i32,
    pub views: i32,
    pub clicks: i32,
    pub reach: i32,
    pub impressions: i32,
}

impl Counters {
    pub fn from_row(row: &PostAnalytics) -> Self {
        Self {
            likes: row.likes_count,
            comments: row.comments_count,
            shares: row.shares_count,
            views: row.views_count,
            clicks: row.clicks_count,
            reach: row.reach,
            impressions: row.impressions,
        }
    }

    /// Overlay the fields present in `update`
    pub fn apply(self, update: &AnalyticsUpdate) -> Self {
        Self {
            likes: update.likes_count.unwrap_or(self.likes),
            comments: update.comments_count.unwrap_or(self.comments),
            shares: update.shares_count.unwrap_or(self.shares),
            views: update.views_count.unwrap_or(self.views),
            clicks: update.clicks_count.unwrap_or(self.clicks),
            reach: update.reach.unwrap_or(self.reach),
            impressions: update.impressions.unwrap_or(self.impressions),
        }
    }

    pub fn engagement(&self) -> i64 {
        i64::from(self.likes) + i64::from(self.comments) + i64::from(self.shares)
    }

    /// `(likes + comments + shares) / impressions` as a percentage, or `None`
    /// without impressions
    pub fn engagement_rate(&self) -> Option<String> {
        (self.impressions > 0).then(|| {
            let rate = self.engagement() as f64 / f64::from(self.impressions) * 100.0;
            format!("{:.1}%", rate)
        })
    }

    fn snapshot(&self, recorded_at: DateTime<Utc>) -> MetricsSnapshot {
        MetricsSnapshot {
            recorded_at,
            likes_count: self.likes,
            comments_count: self.comments,
            shares_count: self.shares,
            impressions: self.impressions,
        }
    }
}

const COLUMNS: &str = "id, user_id, post_id, likes_count, comments_count, shares_count, \
     views_count, clicks_count, engagement_rate, reach, impressions, audience_data, \
     top_countries, peak_engagement_time, metrics_history, first_tracked, last_updated";

/// Analytics row of a post, or `None`
pub async fn get_analytics(
    pool: &PgPool,
    post_id: Uuid,
    user_id: Uuid,
) -> Result<Option<PostAnalytics>, sqlx::Error> {
    let sql = format!(
        "SELECT {} FROM post_analytics WHERE post_id = $1 AND user_id = $2",
        COLUMNS
    );

    sqlx::query_as::<_, PostAnalytics>(&sql)
        .bind(post_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Create a zeroed analytics row unless the post already has one
pub async fn ensure_analytics(pool: &PgPool, user_id: Uuid, post_id: Uuid) -> Result<(), sqlx::Error> {
    let now = Utc::now();

    let inserted = sqlx::query(
        r#"
        INSERT INTO post_analytics (id, user_id, post_id, engagement_rate, first_tracked, last_updated)
        VALUES ($1, $2, $3, $4, $5, $5)
        ON CONFLICT (post_id) DO NOTHING
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(post_id)
    .bind(ZERO_RATE)
    .bind(now)
    .execute(pool)
    .await?
    .rows_affected();

    if inserted > 0 {
        tracing::debug!("Started analytics tracking for post {}", post_id);
    }
    Ok(())
}

/// Apply `update` to the post's analytics, creating the row if needed
///
/// The engagement rate is recomputed when impressions are known. An update
/// without impressions keeps the stored rate; a new row without impressions
/// starts at `0.0%`. Every update appends a snapshot to the history.
pub async fn upsert_analytics(
    pool: &PgPool,
    user_id: Uuid,
    post_id: Uuid,
    update: &AnalyticsUpdate,
) -> Result<PostAnalytics, sqlx::Error> {
    let now = Utc::now();
    let existing = get_analytics(pool, post_id, user_id).await?;

    match existing {
        Some(row) => {
            let counters = Counters::from_row(&row).apply(update);
            let rate = counters
                .engagement_rate()
                .unwrap_or_else(|| row.engagement_rate.clone());

            let mut history = row.metrics_history.0;
            history.push(counters.snapshot(now));

            let sql = format!(
                r#"
                UPDATE post_analytics
                SET likes_count = $1, comments_count = $2, shares_count = $3, views_count = $4,
                    clicks_count = $5, reach = $6, impressions = $7, engagement_rate = $8,
                    audience_data = COALESCE($9, audience_data),
                    top_countries = COALESCE($10, top_countries),
                    peak_engagement_time = COALESCE($11, peak_engagement_time),
                    metrics_history = $12, last_updated = $13
                WHERE id = $14
                RETURNING {}
                "#,
                COLUMNS
            );

            sqlx::query_as::<_, PostAnalytics>(&sql)
                .bind(counters.likes)
                .bind(counters.comments)
                .bind(counters.shares)
                .bind(counters.views)
                .bind(counters.clicks)
                .bind(counters.reach)
                .bind(counters.impressions)
                .bind(rate)
                .bind(update.audience_data.clone().map(Json))
                .bind(update.top_countries.clone().map(Json))
                .bind(update.peak_engagement_time)
                .bind(Json(history))
                .bind(now)
                .bind(row.id)
                .fetch_one(pool)
                .await
        }
        None => {
            let counters = Counters::default().apply(update);
            let rate = counters.engagement_rate().unwrap_or_else(|| "0.0%".to_string());
            let history = vec![counters.snapshot(now)];

            let sql = format!(
                r#"
                INSERT INTO post_analytics (id, user_id, post_id, likes_count, comments_count,
                    shares_count, views_count, clicks_count, reach, impressions, engagement_rate,
                    audience_data, top_countries, peak_engagement_time, metrics_history,
                    first_tracked, last_updated)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $16)
                RETURNING {}
                "#,
                COLUMNS
            );

            sqlx::query_as::<_, PostAnalytics>(&sql)
                .bind(Uuid::new_v4())
                .bind(user_id)
                .bind(post_id)
                .bind(counters.likes)
                .bind(counters.comments)
                .bind(counters.shares)
                .bind(counters.views)
                .bind(counters.clicks)
                .bind(counters.reach)
                .bind(counters.impressions)
                .bind(rate)
                .bind(update.audience_data.clone().map(Json))
                .bind(Json(update.top_countries.clone().unwrap_or_default()))
                .bind(update.peak_engagement_time)
                .bind(Json(history))
                .bind(now)
                .fetch_one(pool)
                .await
        }
    }
}

/// Number of posts per status created since `since`
pub async fn count_posts_by_status(
    pool: &PgPool,
    user_id: Uuid,
    since: DateTime<Utc>,
) -> Result<Vec<(String, i64)>, sqlx::Error> {
    sqlx::query_as::<_, (String, i64)>(
        r#"
        SELECT status, COUNT(*)
        FROM posts
        WHERE user_id = $1 AND created_at >= $2
        GROUP BY status
        "#,
    )
    .bind(user_id)
    .bind(since)
    .fetch_all(pool)
    .await
}

/// Summed counters over published posts created since `since`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct EngagementTotals {
    pub total_likes: i64,
    pub total_comments: i64,
    pub total_shares: i64,
    pub total_impressions: i64,
}

impl EngagementTotals {
    pub fn engagement(&self) -> i64 {
        self.total_likes + self.total_comments + self.total_shares
    }
}

pub async fn engagement_totals(
    pool: &PgPool,
    user_id: Uuid,
    since: DateTime<Utc>,
) -> Result<EngagementTotals, sqlx::Error> {
    sqlx::query_as::<_, EngagementTotals>(
        r#"
        SELECT COALESCE(SUM(a.likes_count), 0)::BIGINT AS total_likes,
               COALESCE(SUM(a.comments_count), 0)::BIGINT AS total_comments,
               COALESCE(SUM(a.shares_count), 0)::BIGINT AS total_shares,
               COALESCE(SUM(a.impressions), 0)::BIGINT AS total_impressions
        FROM posts p
        JOIN post_analytics a ON a.post_id = p.id
        WHERE p.user_id = $1 AND p.status = 'published' AND p.created_at >= $2
        "#,
    )
    .bind(user_id)
    .bind(since)
    .fetch_one(pool)
    .await
}

/// One published post in the trends series
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct TrendPoint {
    pub date: DateTime<Utc>,
    pub impressions: i32,
    pub engagement_rate: String,
    pub likes: i32,
    pub comments: i32,
    pub shares: i32,
    pub post_type: Option<String>,
}

/// Published posts with analytics since `since`, oldest first
pub async fn performance_trends(
    pool: &PgPool,
    user_id: Uuid,
    since: DateTime<Utc>,
) -> Result<Vec<TrendPoint>, sqlx::Error> {
    sqlx::query_as::<_, TrendPoint>(
        r#"
        SELECT p.published_time AS date, a.impressions, a.engagement_rate,
               a.likes_count AS likes, a.comments_count AS comments,
               a.shares_count AS shares, p.post_type
        FROM posts p
        JOIN post_analytics a ON a.post_id = p.id
        WHERE p.user_id = $1 AND p.status = 'published'
          AND p.published_time IS NOT NULL AND p.published_time >= $2
        ORDER BY p.published_time ASC
        "#,
    )
    .bind(user_id)
    .bind(since)
    .fetch_all(pool)
    .await
}
