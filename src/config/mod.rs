pub mod app;
pub mod auth;
pub mod server;

pub use app::{ApiConfig, AppConfig, AppMetadata, TweetConfig};
pub use auth::{Argon2Config, AuthConfig};
pub use server::{DatabaseConfig, LogFormat, MetricsConfig, ObservabilityConfig, ServerConfig};

/// Errors raised while loading or validating configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Sanity checks run after deserialization
pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Load the application configuration from files and environment variables
pub fn load() -> Result<AppConfig, ConfigError> {
    app::load_config()
}
