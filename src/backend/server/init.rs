/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including state creation, database loading, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Load optional services (database)
 * 2. Create the text generator and the content service around it
 * 3. Create the LinkedIn client
 * 4. Create and configure the router
 */

use axum::Router;
use std::sync::Arc;

use crate::backend::content::generator::{GeminiGenerator, TextGenerator};
use crate::backend::content::service::ContentService;
use crate::backend::linkedin::LinkedInClient;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::config::AppConfig;

/// Create and configure the Axum application
///
/// # Error Handling
///
/// The function is designed to be resilient:
/// - Missing database: Server continues without database features
/// - Migration failures: Logged but don't prevent startup
/// - Missing LinkedIn credentials: the LinkedIn routes report the problem
pub async fn create_app(config: AppConfig) -> Router<()> {
    tracing::info!("Initializing PostPilot backend server");

    let db_pool = load_database(&config).await;
    let generator: Arc<dyn TextGenerator> = Arc::new(GeminiGenerator::new(config.gemini_model.clone()));

    if config.linkedin.client_id.is_none() {
        tracing::warn!("LINKEDIN_CLIENT_ID not set. LinkedIn publishing will be unavailable.");
    }

    create_app_with(config, db_pool, generator)
}

/// Build the application from already created services
///
/// Integration tests use this to run the router with a scripted generator
/// and no database.
pub fn create_app_with(
    config: AppConfig,
    db_pool: Option<sqlx::PgPool>,
    generator: Arc<dyn TextGenerator>,
) -> Router<()> {
    tracing::info!("Text generation model: {}", generator.model_name());

    let app_state = AppState {
        db_pool,
        content: Arc::new(ContentService::new(generator, config.rewrite_timeout)),
        linkedin: Arc::new(LinkedInClient::new(config.linkedin.clone())),
        config: Arc::new(config),
    };

    let app = create_router(app_state);

    tracing::info!("Backend server initialized successfully");

    app
}
