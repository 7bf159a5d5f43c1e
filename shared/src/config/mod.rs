//! Configuration module
//!
//! - `database` - MySQL connection, pool sizing and the database feature flag
//! - `environment` - Environment detection and logging configuration

pub mod database;
pub mod environment;

use serde::{Deserialize, Serialize};

pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            database: DatabaseConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            database: DatabaseConfig::from_env(),
            logging: LoggingConfig::for_environment(environment),
        }
    }
}
