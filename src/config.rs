//! Configuration management for the circulation server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct StorageConfig {
    /// JSON document with the initial catalog and branches.
    /// Set by `CIRCULATION_STORAGE__SEED_PATH` or `SEED_PATH`.
    pub seed_path: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(environment())
    }

    fn load_from(environment: Environment) -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Environment variables, e.g. CIRCULATION_SERVER__PORT
            .add_source(environment)
            .set_override_option("storage.seed_path", env::var("SEED_PATH").ok())?
            .build()?;

        config.try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("CIRCULATION")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
