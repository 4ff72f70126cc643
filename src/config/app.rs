use ::config::builder::DefaultState;
use ::config::{ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};

use super::{
    AuthConfig, ConfigError, DatabaseConfig, MetricsConfig, ObservabilityConfig, ServerConfig,
    Validate,
};

/// Prefix of environment variable overrides, e.g. `LIGHTER_TIMELINE__SERVER__PORT=8080`
pub const ENV_PREFIX: &str = "LIGHTER_TIMELINE";

/// Top-level application configuration that aggregates all config modules
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application metadata
    #[serde(default)]
    pub app: AppMetadata,
    /// Server configuration (host, port, workers)
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration (url, pool, migrations)
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Authentication configuration (tokens, Argon2)
    #[serde(default)]
    pub auth: AuthConfig,
    /// Tweet content rules
    #[serde(default)]
    pub tweet: TweetConfig,
    /// Observability configuration (logging)
    #[serde(default)]
    pub observability: ObservabilityConfig,
    /// Metrics configuration (Prometheus)
    #[serde(default)]
    pub metrics: MetricsConfig,
    /// API documentation configuration
    #[serde(default)]
    pub api: ApiConfig,
}

/// Application metadata configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppMetadata {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_app_version")]
    pub version: String,
    /// development, staging or production
    #[serde(default = "default_environment")]
    pub environment: String,
    /// Graceful shutdown timeout in seconds
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout: u64,
}

/// Tweet content rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TweetConfig {
    /// Maximum number of characters in a single tweet
    #[serde(default = "default_tweet_max_length")]
    pub max_length: usize,
}

/// API documentation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Serve the OpenAPI document
    #[serde(default = "default_docs_enabled")]
    pub docs_enabled: bool,
    /// Path of the OpenAPI document
    #[serde(default = "default_docs_path")]
    pub docs_path: String,
}

fn default_app_name() -> String {
    "lighter-timeline".to_string()
}

fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_shutdown_timeout() -> u64 {
    30
}

fn default_tweet_max_length() -> usize {
    300
}

fn default_docs_enabled() -> bool {
    true
}

fn default_docs_path() -> String {
    "/api.json".to_string()
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
            environment: default_environment(),
            shutdown_timeout: default_shutdown_timeout(),
        }
    }
}

impl Default for TweetConfig {
    fn default() -> Self {
        Self {
            max_length: default_tweet_max_length(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            docs_enabled: default_docs_enabled(),
            docs_path: default_docs_path(),
        }
    }
}

impl Validate for AppMetadata {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::ValidationError("app.name cannot be empty".to_string()));
        }
        if self.environment.is_empty() {
            return Err(ConfigError::ValidationError("app.environment cannot be empty".to_string()));
        }
        if self.shutdown_timeout == 0 {
            return Err(ConfigError::ValidationError("app.shutdown_timeout must be > 0".to_string()));
        }
        Ok(())
    }
}

impl Validate for TweetConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_length == 0 {
            return Err(ConfigError::ValidationError("tweet.max_length must be > 0".to_string()));
        }
        Ok(())
    }
}

impl Validate for ApiConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.docs_enabled && !self.docs_path.starts_with('/') {
            return Err(ConfigError::ValidationError(
                "api.docs_path must start with '/' when docs are enabled".to_string(),
            ));
        }
        Ok(())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.app.validate()?;
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.tweet.validate()?;
        self.observability.validate()?;
        self.metrics.validate()?;
        self.api.validate()?;
        Ok(())
    }
}

/// Load configuration from files and environment variables
///
/// Configuration loading follows this precedence (highest to lowest):
/// 1. Environment variables: LIGHTER_TIMELINE__SERVER__PORT=8080
/// 2. config/local.toml (git-ignored, developer overrides)
/// 3. config/{APP_ENV}.toml (development/staging/production)
/// 4. config/default.toml (base defaults)
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

    let builder = ::config::Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{}", env)).required(false))
        .add_source(File::with_name("config/local").required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

    load_from(builder)
}

/// Build, deserialize and validate configuration from an arbitrary set of sources
pub fn load_from(builder: ConfigBuilder<DefaultState>) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = builder.build()?.try_deserialize()?;

    config.validate()?;

    Ok(config)
}
