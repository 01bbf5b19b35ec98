/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - Loaded configuration
 * - The content service (text model, prompts, budget enforcer)
 * - The LinkedIn client
 * - Optional services (database)
 *
 * # Thread Safety
 *
 * Nothing in the state is mutable after startup. Services are shared
 * behind `Arc` and the database pool is internally reference counted.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`.
 *
 * # Example
 *
 * ```rust
 * use axum::extract::State;
 * use sqlx::PgPool;
 *
 * async fn handler(State(pool): State<Option<PgPool>>) {
 *     // `None` when DATABASE_URL is not configured
 * }
 * ```
 */

use axum::extract::FromRef;
use sqlx::PgPool;
use std::sync::Arc;

use crate::backend::content::service::ContentService;
use crate::backend::error::BackendError;
use crate::backend::linkedin::LinkedInClient;
use crate::shared::config::AppConfig;

/// Application state shared by every handler
///
/// # Fields
///
/// * `db_pool` - Optional PostgreSQL connection pool
/// * `config` - Configuration the server was started with
/// * `content` - Text model orchestration and budget enforcement
/// * `linkedin` - LinkedIn OAuth and publishing client
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    ///
    /// This is `None` if the database is not configured (e.g., if
    /// `DATABASE_URL` environment variable is not set). Handlers should
    /// go through `require_pool` before using the database.
    pub db_pool: Option<PgPool>,

    pub config: Arc<AppConfig>,

    pub content: Arc<ContentService>,

    pub linkedin: Arc<LinkedInClient>,
}

/// Unwrap the optional pool or answer 503
pub fn require_pool(pool: Option<PgPool>) -> Result<PgPool, BackendError> {
    pool.ok_or_else(|| {
        tracing::warn!("Database not configured");
        BackendError::state("Database not configured")
    })
}

/// Implement FromRef for Option<PgPool>
///
/// This allows Axum handlers to extract the optional database pool
/// directly from `AppState`.
impl FromRef<AppState> for Option<PgPool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

impl FromRef<AppState> for Arc<ContentService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.content.clone()
    }
}

impl FromRef<AppState> for Arc<LinkedInClient> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.linkedin.clone()
    }
}

/// State without a database, driven by a scripted generator
#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    use crate::backend::content::generator::testing::ScriptedGenerator;

    let config = AppConfig::default();
    let generator = Arc::new(ScriptedGenerator::new(Vec::new()));

    AppState {
        db_pool: None,
        content: Arc::new(ContentService::new(generator, config.rewrite_timeout)),
        linkedin: Arc::new(LinkedInClient::new(config.linkedin.clone())),
        config: Arc::new(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_require_pool_without_database() {
        let err = require_pool(None).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.message(), "Database not configured");
    }

    #[test]
    fn test_state_extraction() {
        let state = test_state();
        let pool: Option<PgPool> = FromRef::from_ref(&state);
        assert!(pool.is_none());

        let content: Arc<ContentService> = FromRef::from_ref(&state);
        assert_eq!(content.model_name(), "scripted");
    }
}
