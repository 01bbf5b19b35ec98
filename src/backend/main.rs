/**
 * PostPilot Server Entry Point
 *
 * Loads `.env`, initializes tracing, reads the configuration and serves
 * the Axum application.
 */

use postpilot::backend::server::init::create_app;
use postpilot::shared::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AppConfig::from_env()?;
    tracing::info!(
        "Starting PostPilot ({}) with model {}",
        config.environment,
        config.gemini_model
    );

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.server_port));

    let app = create_app(config).await;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
