/**
 * Analytics Handlers
 *
 * HTTP handlers for the `/api/analytics` routes. All of them require authentication
 * and only ever read or write the caller's own posts.
 */

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::analytics::db::{
    count_posts_by_status, engagement_totals, get_analytics, performance_trends,
    upsert_analytics, AnalyticsUpdate, EngagementTotals, PostAnalytics, TrendPoint, ZERO_RATE,
};
use crate::backend::content::db::get_user_post;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::require_pool;
use crate::shared::content::PostStatus;

/// Window covered by the dashboard
pub const DASHBOARD_DAYS: i64 = 30;

const DEFAULT_TREND_DAYS: i64 = 30;

/// Post counts by status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PostCounts {
    pub total: i64,
    pub published: i64,
    pub drafts: i64,
    pub scheduled: i64,
    pub generated: i64,
    pub improved: i64,
}

impl PostCounts {
    pub fn from_rows(rows: &[(String, i64)]) -> Self {
        let mut counts = Self::default();
        for (status, count) in rows {
            counts.total += count;
            match status.as_str() {
                s if s == PostStatus::Published.as_str() => counts.published += count,
                s if s == PostStatus::Draft.as_str() => counts.drafts += count,
                s if s == PostStatus::Scheduled.as_str() => counts.scheduled += count,
                s if s == PostStatus::Generated.as_str() => counts.generated += count,
                s if s == PostStatus::Improved.as_str() => counts.improved += count,
                other => tracing::debug!("Ignoring unknown post status '{}'", other),
            }
        }
        counts
    }
}

/// Static hints shown next to the numbers
#[derive(Debug, Clone, Serialize)]
pub struct ContentPerformance {
    pub best_performing_topics: Vec<&'static str>,
    pub optimal_post_length: &'static str,
    pub best_posting_days: Vec<&'static str>,
}

impl Default for ContentPerformance {
    fn default() -> Self {
        Self {
            best_performing_topics: vec!["AI", "Technology", "Innovation"],
            optimal_post_length: "Medium",
            best_posting_days: vec!["Tuesday", "Wednesday", "Thursday"],
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub period: String,
    pub posts: PostCounts,
    pub engagement: EngagementTotals,
    pub avg_engagement_rate: String,
    pub content_performance: ContentPerformance,
}

#[derive(Debug, Deserialize)]
pub struct TrendsQuery {
    #[serde(default)]
    pub days: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct TrendsResponse {
    pub period: String,
    pub data_points: usize,
    pub trends: Vec<TrendPoint>,
}

#[derive(Debug, Serialize)]
pub struct UpdateAnalyticsResponse {
    pub success: bool,
    pub message: &'static str,
    pub analytics: PostAnalytics,
}

/// Interactions per published post, formatted as a percentage
pub fn average_engagement_rate(totals: &EngagementTotals, published: i64) -> String {
    if published <= 0 {
        return ZERO_RATE.to_string();
    }
    format!("{:.1}%", totals.engagement() as f64 / published as f64)
}

/// Counts and engagement sums over the last 30 days
pub async fn dashboard(
    State(pool): State<Option<PgPool>>,
    AuthUser(auth): AuthUser,
) -> Result<Json<DashboardResponse>, BackendError> {
    let pool = require_pool(pool)?;
    let since = Utc::now() - Duration::days(DASHBOARD_DAYS);

    let counts = PostCounts::from_rows(&count_posts_by_status(&pool, auth.user_id, since).await?);
    let totals = engagement_totals(&pool, auth.user_id, since).await?;

    Ok(Json(DashboardResponse {
        period: format!("Last {} days", DASHBOARD_DAYS),
        avg_engagement_rate: average_engagement_rate(&totals, counts.published),
        posts: counts,
        engagement: totals,
        content_performance: ContentPerformance::default(),
    }))
}

/// Analytics of one of the user's posts
///
/// # Errors
///
/// * `404 Not Found` - The post has no analytics row
pub async fn post_analytics(
    State(pool): State<Option<PgPool>>,
    AuthUser(auth): AuthUser,
    Path(post_id): Path<Uuid>,
) -> Result<Json<PostAnalytics>, BackendError> {
    let pool = require_pool(pool)?;

    let analytics = get_analytics(&pool, post_id, auth.user_id)
        .await?
        .ok_or_else(|| BackendError::not_found("Analytics not found"))?;

    Ok(Json(analytics))
}

/// Record new metrics for one of the user's posts
///
/// # Errors
///
/// * `404 Not Found` - The post does not exist or is not the user's
pub async fn update_post_analytics(
    State(pool): State<Option<PgPool>>,
    AuthUser(auth): AuthUser,
    Path(post_id): Path<Uuid>,
    Json(update): Json<AnalyticsUpdate>,
) -> Result<Json<UpdateAnalyticsResponse>, BackendError> {
    let pool = require_pool(pool)?;

    get_user_post(&pool, post_id, auth.user_id)
        .await?
        .ok_or_else(|| BackendError::not_found("Post not found"))?;

    let analytics = upsert_analytics(&pool, auth.user_id, post_id, &update).await?;
    tracing::info!(
        "Analytics updated for post {} (engagement rate {})",
        post_id,
        analytics.engagement_rate
    );

    Ok(Json(UpdateAnalyticsResponse {
        success: true,
        message: "Analytics updated successfully",
        analytics,
    }))
}

/// Start of a trend window reaching `days` days back from `now`
fn trend_window_start(now: DateTime<Utc>, days: i64) -> Result<DateTime<Utc>, BackendError> {
    if days <= 0 {
        return Err(BackendError::bad_request("days must be positive"));
    }
    Duration::try_days(days)
        .and_then(|window| now.checked_sub_signed(window))
        .ok_or_else(|| BackendError::bad_request("days is out of range"))
}

/// Published posts with their metrics over the last `days` days
pub async fn trends(
    State(pool): State<Option<PgPool>>,
    AuthUser(auth): AuthUser,
    Query(query): Query<TrendsQuery>,
) -> Result<Json<TrendsResponse>, BackendError> {
    let days = query.days.unwrap_or(DEFAULT_TREND_DAYS);
    let since = trend_window_start(Utc::now(), days)?;
    let pool = require_pool(pool)?;

    let trends = performance_trends(&pool, auth.user_id, since).await?;

    Ok(Json(TrendsResponse {
        period: format!("Last {} days", days),
        data_points: trends.len(),
        trends,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::middleware::AuthenticatedUser;
    use axum::http::StatusCode;

    #[test]
    fn test_post_counts_from_rows() {
        let rows = vec![
            ("published".to_string(), 3),
            ("draft".to_string(), 2),
            ("generated".to_string(), 5),
        ];

        let counts = PostCounts::from_rows(&rows);
        assert_eq!(counts.total, 10);
        assert_eq!(counts.published, 3);
        assert_eq!(counts.drafts, 2);
        assert_eq!(counts.generated, 5);
        assert_eq!(counts.scheduled, 0);
    }

    #[test]
    fn test_average_engagement_rate() {
        let totals = EngagementTotals {
            total_likes: 20,
            total_comments: 4,
            total_shares: 1,
            total_impressions: 900,
        };
        assert_eq!(average_engagement_rate(&totals, 2), "12.5%");
        assert_eq!(average_engagement_rate(&totals, 0), "0%");
    }

    #[tokio::test]
    async fn test_trends_rejects_non_positive_days() {
        let auth = AuthUser(AuthenticatedUser {
            user_id: Uuid::new_v4(),
            email: "ada@example.com".to_string(),
        });

        let err = trends(State(None), auth, Query(TrendsQuery { days: Some(0) }))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_trend_window_start() {
        let now = Utc::now();
        assert_eq!(trend_window_start(now, 30).unwrap(), now - Duration::days(30));
    }

    #[test]
    fn test_trend_window_rejects_huge_days() {
        let now = Utc::now();
        for days in [100_000_000, 200_000_000_000, i64::MAX] {
            let err = trend_window_start(now, days).unwrap_err();
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
            assert_eq!(err.message(), "days is out of range");
        }
    }
}
