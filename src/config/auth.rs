use serde::{Deserialize, Serialize};

use super::{ConfigError, Validate};

/// Upper bound for `token_expiration`, one year in seconds
pub const MAX_TOKEN_EXPIRATION: u64 = 365 * 24 * 60 * 60;

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Token expiration time in seconds
    #[serde(default = "default_token_expiration")]
    pub token_expiration: u64,
    /// Expired token cleanup interval in seconds
    #[serde(default = "default_token_cleanup_interval")]
    pub token_cleanup_interval: u64,
    /// Resolved token cache TTL in seconds
    #[serde(default = "default_session_cache_ttl")]
    pub session_cache_ttl: u64,
    /// Argon2 configuration
    #[serde(default = "Argon2Config::default")]
    pub argon2: Argon2Config,
}

/// Argon2 password hashing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Argon2Config {
    /// Memory cost in KB (64MB = 65536 KB)
    #[serde(default = "default_argon2_memory_cost")]
    pub memory_cost: u32,
    /// Time cost (iterations)
    #[serde(default = "default_argon2_time_cost")]
    pub time_cost: u32,
    /// Parallelism (number of lanes)
    #[serde(default = "default_argon2_parallelism")]
    pub parallelism: u32,
    /// Hash length in bytes
    #[serde(default = "default_argon2_hash_length")]
    pub hash_length: u32,
}

fn default_token_expiration() -> u64 {
    3600 // 1 hour
}

fn default_token_cleanup_interval() -> u64 {
    900 // 15 minutes
}

fn default_session_cache_ttl() -> u64 {
    300 // 5 minutes
}

fn default_argon2_memory_cost() -> u32 {
    65536 // 64 MB
}

fn default_argon2_time_cost() -> u32 {
    3
}

fn default_argon2_parallelism() -> u32 {
    4
}

fn default_argon2_hash_length() -> u32 {
    32
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_expiration: default_token_expiration(),
            token_cleanup_interval: default_token_cleanup_interval(),
            session_cache_ttl: default_session_cache_ttl(),
            argon2: Argon2Config::default(),
        }
    }
}

impl Default for Argon2Config {
    fn default() -> Self {
        Self {
            memory_cost: default_argon2_memory_cost(),
            time_cost: default_argon2_time_cost(),
            parallelism: default_argon2_parallelism(),
            hash_length: default_argon2_hash_length(),
        }
    }
}

impl Validate for AuthConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.token_expiration == 0 {
            return Err(ConfigError::ValidationError("auth.token_expiration must be > 0".to_string()));
        }
        if self.token_expiration > MAX_TOKEN_EXPIRATION {
            return Err(ConfigError::ValidationError(format!(
                "auth.token_expiration must be at most {} seconds",
                MAX_TOKEN_EXPIRATION
            )));
        }
        if self.token_cleanup_interval == 0 {
            return Err(ConfigError::ValidationError("auth.token_cleanup_interval must be > 0".to_string()));
        }
        if self.session_cache_ttl == 0 {
            return Err(ConfigError::ValidationError("auth.session_cache_ttl must be > 0".to_string()));
        }
        if self.session_cache_ttl > self.token_expiration {
            return Err(ConfigError::ValidationError(
                "auth.session_cache_ttl cannot exceed auth.token_expiration".to_string(),
            ));
        }
        self.argon2.validate()?;
        Ok(())
    }
}

impl Validate for Argon2Config {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.memory_cost == 0 {
            return Err(ConfigError::ValidationError("auth.argon2.memory_cost must be > 0".to_string()));
        }
        if self.time_cost == 0 {
            return Err(ConfigError::ValidationError("auth.argon2.time_cost must be > 0".to_string()));
        }
        if self.parallelism == 0 {
            return Err(ConfigError::ValidationError("auth.argon2.parallelism must be > 0".to_string()));
        }
        if self.hash_length == 0 {
            return Err(ConfigError::ValidationError("auth.argon2.hash_length must be > 0".to_string()));
        }
        Ok(())
    }
}
