//! Application configuration module
//!
//! Configuration comes from environment variables (optionally loaded from a
//! `.env` file by the server binary). Every value has a development default
//! except the secrets, which are optional and disable the features that need
//! them when missing.

use std::time::Duration;
use thiserror::Error;

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 8000;

/// Default model used for post generation
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Default timeout around the single rewrite call of the budget enforcer
pub const DEFAULT_REWRITE_TIMEOUT: Duration = Duration::from_secs(8);

/// Default LinkedIn OAuth redirect
pub const DEFAULT_LINKEDIN_REDIRECT_URI: &str = "http://localhost:3000/linkedin/callback";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP server binds to
    pub server_port: u16,
    /// Deployment environment label (reported by `GET /`)
    pub environment: String,
    /// PostgreSQL connection string; `None` disables persistence
    pub database_url: Option<String>,
    /// Model identifier passed to the text generator
    pub gemini_model: String,
    /// Upper bound on the enforcer's rewrite call
    pub rewrite_timeout: Duration,
    /// LinkedIn OAuth settings
    pub linkedin: LinkedInConfig,
    /// Allowed CORS origins
    pub cors_origins: Vec<String>,
}

/// LinkedIn application credentials and endpoints
#[derive(Debug, Clone)]
pub struct LinkedInConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub redirect_uri: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_base: String,
}

impl Default for LinkedInConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            redirect_uri: DEFAULT_LINKEDIN_REDIRECT_URI.to_string(),
            auth_url: "https://www.linkedin.com/oauth/v2/authorization".to_string(),
            token_url: "https://www.linkedin.com/oauth/v2/accessToken".to_string(),
            api_base: "https://api.linkedin.com/v2".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_PORT,
            environment: "unknown".to_string(),
            database_url: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            rewrite_timeout: DEFAULT_REWRITE_TIMEOUT,
            linkedin: LinkedInConfig::default(),
            cors_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:8080".to_string(),
            ],
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// `from_env` is a thin wrapper over this; tests pass a map instead of
    /// mutating the real environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = AppConfig::builder();

        if let Some(port) = lookup("SERVER_PORT") {
            let port = port
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT", port))?;
            builder = builder.server_port(port);
        }
        if let Some(env) = lookup("ENVIRONMENT") {
            builder = builder.environment(env);
        }
        if let Some(url) = lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()) {
            builder = builder.database_url(url);
        }
        if let Some(model) = lookup("GEMINI_MODEL").filter(|v| !v.trim().is_empty()) {
            builder = builder.gemini_model(model);
        }
        if let Some(secs) = lookup("REWRITE_TIMEOUT_SECS") {
            let secs = secs
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue("REWRITE_TIMEOUT_SECS", secs))?;
            builder = builder.rewrite_timeout(Duration::from_secs(secs));
        }
        if let Some(id) = lookup("LINKEDIN_CLIENT_ID").filter(|v| !v.is_empty()) {
            builder = builder.linkedin_client_id(id);
        }
        if let Some(secret) = lookup("LINKEDIN_CLIENT_SECRET").filter(|v| !v.is_empty()) {
            builder = builder.linkedin_client_secret(secret);
        }
        if let Some(uri) = lookup("LINKEDIN_REDIRECT_URI") {
            builder = builder.linkedin_redirect_uri(uri);
        }
        if let Some(origins) = lookup("CORS_ORIGINS") {
            builder = builder.cors_origins(
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(String::from)
                    .collect(),
            );
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rewrite_timeout.is_zero() {
            return Err(ConfigError::InvalidValue(
                "REWRITE_TIMEOUT_SECS",
                "0".to_string(),
            ));
        }
        if let Some(url) = &self.database_url {
            if !(url.starts_with("postgres://") || url.starts_with("postgresql://")) {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    config: Option<AppConfig>,
}

impl AppConfigBuilder {
    fn config(&mut self) -> &mut AppConfig {
        self.config.get_or_insert_with(AppConfig::default)
    }

    /// Set the HTTP port
    pub fn server_port(mut self, port: u16) -> Self {
        self.config().server_port = port;
        self
    }

    /// Set the environment label
    pub fn environment(mut self, environment: String) -> Self {
        self.config().environment = environment;
        self
    }

    /// Set the database URL
    pub fn database_url(mut self, url: String) -> Self {
        self.config().database_url = Some(url);
        self
    }

    /// Set the generator model
    pub fn gemini_model(mut self, model: String) -> Self {
        self.config().gemini_model = model;
        self
    }

    /// Set the enforcer rewrite timeout
    pub fn rewrite_timeout(mut self, timeout: Duration) -> Self {
        self.config().rewrite_timeout = timeout;
        self
    }

    pub fn linkedin_client_id(mut self, id: String) -> Self {
        self.config().linkedin.client_id = Some(id);
        self
    }

    pub fn linkedin_client_secret(mut self, secret: String) -> Self {
        self.config().linkedin.client_secret = Some(secret);
        self
    }

    pub fn linkedin_redirect_uri(mut self, uri: String) -> Self {
        self.config().linkedin.redirect_uri = uri;
        self
    }

    /// Override every LinkedIn endpoint with one base URL (used against mock servers)
    pub fn linkedin_base_url(mut self, base: &str) -> Self {
        let base = base.trim_end_matches('/');
        let linkedin = &mut self.config().linkedin;
        linkedin.auth_url = format!("{}/oauth/v2/authorization", base);
        linkedin.token_url = format!("{}/oauth/v2/accessToken", base);
        linkedin.api_base = format!("{}/v2", base);
        self
    }

    /// Set the allowed CORS origins
    pub fn cors_origins(mut self, origins: Vec<String>) -> Self {
        self.config().cors_origins = origins;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = self.config.unwrap_or_default();
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
