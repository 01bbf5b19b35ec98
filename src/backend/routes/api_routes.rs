/**
 * API Routes
 *
 * This module defines the `/api` routes.
 *
 * # Routes
 *
 * ## Users
 * - `POST /api/users/register` - User registration
 * - `POST /api/users/login` - User login
 * - `GET /api/users/me` - Current user profile
 * - `PUT /api/users/me` - Update current user profile
 *
 * ## Content
 * - `POST /api/content/generate` - Generate a post within a character budget
 * - `POST /api/content/generate-variations?topic=...` - Three A/B variations
 * - `POST /api/content/save-draft` - Store a draft
 * - `GET /api/content/drafts` - List drafts
 * - `GET /api/content/suggestions/{industry}` - Topic ideas (public)
 * - `POST /api/content/schedule-post` - Record a scheduled time
 * - `POST /api/content/improve` - Rewrite a post within a character budget
 *
 * ## LinkedIn
 * - `GET /api/linkedin/connect` - OAuth authorization URL
 * - `POST /api/linkedin/exchange-token` - Complete the OAuth flow
 * - `POST /api/linkedin/publish` - Publish a post
 * - `GET /api/linkedin/status` - Connection status
 * - `POST /api/linkedin/disconnect` - Forget the token
 *
 * ## Analytics
 * - `GET /api/analytics/dashboard` - 30-day summary
 * - `GET /api/analytics/post/{post_id}` - Metrics of one post
 * - `POST /api/analytics/update/{post_id}` - Record metrics
 * - `GET /api/analytics/performance-trends?days=N` - Published posts over time
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::analytics::handlers as analytics;
use crate::backend::auth::{get_me, login, register, update_me};
use crate::backend::content::handlers as content;
use crate::backend::linkedin::handlers as linkedin;
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// Public routes are added directly. Everything else is grouped in one
/// router behind `auth_middleware`, so a missing or invalid token is
/// rejected with 401 before any handler runs.
pub fn configure_api_routes(router: Router<AppState>, state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/api/users/register", post(register))
        .route("/api/users/login", post(login))
        .route("/api/content/suggestions/{industry}", get(content::get_suggestions));

    let protected = Router::new()
        .route("/api/users/me", get(get_me).put(update_me))
        // Content
        .route("/api/content/generate", post(content::generate))
        .route("/api/content/generate-variations", post(content::generate_variations))
        .route("/api/content/save-draft", post(content::save_draft))
        .route("/api/content/drafts", get(content::get_drafts))
        .route("/api/content/schedule-post", post(content::schedule_post))
        .route("/api/content/improve", post(content::improve))
        // LinkedIn
        .route("/api/linkedin/connect", get(linkedin::connect))
        .route("/api/linkedin/exchange-token", post(linkedin::exchange_token))
        .route("/api/linkedin/publish", post(linkedin::publish))
        .route("/api/linkedin/status", get(linkedin::status))
        .route("/api/linkedin/disconnect", post(linkedin::disconnect))
        // Analytics
        .route("/api/analytics/dashboard", get(analytics::dashboard))
        .route("/api/analytics/post/{post_id}", get(analytics::post_analytics))
        .route("/api/analytics/update/{post_id}", post(analytics::update_post_analytics))
        .route("/api/analytics/performance-trends", get(analytics::trends))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    router.merge(public).merge(protected)
}
