//! Configuration loading through `config::load`
//!
//! These tests read `config/*.toml` from the package root and mutate process
//! environment variables, so they run serially.

use lighter_timeline::config::*;
use serial_test::serial;
use std::env;

mod utils {
    use std::fs;

    /// Remove every variable carrying the `LIGHTER_TIMELINE` prefix, and `APP_ENV`
    pub fn clean_env_vars() {
        let keys: Vec<String> = std::env::vars()
            .filter(|(k, _)| k.starts_with("LIGHTER_TIMELINE") || k == "APP_ENV")
            .map(|(k, _)| k)
            .collect();

        for key in keys {
            unsafe { std::env::remove_var(&key) };
        }
    }

    /// Write `config/<name>.toml`, returning its path for cleanup
    pub fn write_env_file(name: &str, content: &str) -> String {
        let path = format!("config/{}.toml", name);
        fs::create_dir_all("config").unwrap();
        fs::write(&path, content).unwrap();
        path
    }
}

#[test]
#[serial]
fn test_load_default_config_success() {
    utils::clean_env_vars();

    let config = load().expect("default configuration should load");

    assert_eq!(config.app.name, "lighter-timeline");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.tweet.max_length, 300);
    assert_eq!(config.auth.token_expiration, 3600);
    assert_eq!(config.observability.log_format, LogFormat::Pretty);
    assert!(config.database.migrate_on_start);
    assert!(config.api.docs_enabled);
}

#[test]
#[serial]
fn test_environment_variables_override_files() {
    utils::clean_env_vars();
    unsafe {
        env::set_var("LIGHTER_TIMELINE__SERVER__PORT", "9090");
        env::set_var("LIGHTER_TIMELINE__TWEET__MAX_LENGTH", "140");
        env::set_var("LIGHTER_TIMELINE__AUTH__ARGON2__TIME_COST", "2");
    }

    let config = load();
    utils::clean_env_vars();
    let config = config.unwrap();

    assert_eq!(config.server.port, 9090);
    assert_eq!(config.tweet.max_length, 140);
    assert_eq!(config.auth.argon2.time_cost, 2);
    assert_eq!(config.server.host, "0.0.0.0");
}

#[test]
#[serial]
fn test_production_profile() {
    utils::clean_env_vars();
    unsafe { env::set_var("APP_ENV", "production") };

    let config = load();
    utils::clean_env_vars();
    let config = config.unwrap();

    assert_eq!(config.app.environment, "production");
    assert_eq!(config.observability.log_format, LogFormat::Json);
    assert!(!config.database.migrate_on_start);
    assert!(!config.api.docs_enabled);
}

#[test]
#[serial]
fn test_environment_file_is_layered_over_default() {
    utils::clean_env_vars();
    let path = utils::write_env_file("unit-layering", "[server]\nport = 7070\n");
    unsafe { env::set_var("APP_ENV", "unit-layering") };

    let config = load();
    utils::clean_env_vars();
    std::fs::remove_file(&path).unwrap();
    let config = config.unwrap();

    assert_eq!(config.server.port, 7070);
    assert_eq!(config.tweet.max_length, 300);
}

#[test]
#[serial]
fn test_invalid_environment_value_is_rejected() {
    utils::clean_env_vars();
    unsafe { env::set_var("LIGHTER_TIMELINE__AUTH__SESSION_CACHE_TTL", "7200") };

    let result = load();
    utils::clean_env_vars();

    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

#[test]
fn test_default_sections_validate() {
    assert!(AppConfig::default().validate().is_ok());
    assert!(ServerConfig::default().validate().is_ok());
    assert!(DatabaseConfig::default().validate().is_ok());
    assert!(AuthConfig::default().validate().is_ok());
}
