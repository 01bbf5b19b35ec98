/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Service routes (banner, health, database check)
 * 2. API routes (users, content, LinkedIn, analytics)
 * 3. Fallback handler (404)
 * 4. CORS layer around everything
 */

use axum::{
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;
use crate::shared::config::AppConfig;

/// Create the Axum router with all routes configured
///
/// # Route Details
///
/// ## Service Routes
///
/// - `GET /` - Service banner
/// - `GET /health` - Liveness check
/// - `GET /db-test` - Database connectivity check
///
/// ## API Routes
///
/// See `configure_api_routes`.
///
/// ## Fallback
///
/// The fallback handler returns a JSON 404 for unknown routes.
pub fn create_router(app_state: AppState) -> Router<()> {
    let cors = cors_layer(&app_state.config.cors_origins);

    let router = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/db-test", get(db_test));

    let router = configure_api_routes(router, app_state.clone());

    router
        .fallback(not_found)
        .layer(cors)
        .with_state(app_state)
}

/// CORS for the configured frontend origins
///
/// Origins that are not valid header values are skipped with a warning.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

async fn root(State(config): State<Arc<AppConfig>>) -> Json<Value> {
    Json(json!({
        "message": "PostPilot",
        "environment": config.environment,
        "status": "running",
    }))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "postpilot",
    }))
}

/// Report the PostgreSQL version, or why it could not be read
async fn db_test(State(pool): State<Option<PgPool>>) -> Json<Value> {
    let Some(pool) = pool else {
        return Json(json!({
            "status": "Database connection failed",
            "error": "Database not configured",
        }));
    };

    match sqlx::query_scalar::<_, String>("SELECT version()")
        .fetch_one(&pool)
        .await
    {
        Ok(version) => Json(json!({
            "status": "Database connected successfully!",
            "postgres_version": version,
        })),
        Err(e) => {
            tracing::error!("Database check failed: {:?}", e);
            Json(json!({
                "status": "Database connection failed",
                "error": e.to_string(),
            }))
        }
    }
}

async fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Not found", "status": 404 })),
    )
}
