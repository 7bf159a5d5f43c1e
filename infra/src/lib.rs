//! # Infrastructure Layer
//!
//! MySQL-backed implementation of the content store for the energy storage
//! site. It owns the process-wide connection pool, table creation, additive
//! column migrations and first-boot seeding, and provides the
//! `ContentRepository` implementation the content service runs against.
//!
//! ## Architecture
//!
//! - **Database**: pool management, schema, migrations and seeding using SQLx
//! - **Repository**: `MySqlContentRepository`, one statement per call
//! - **Wiring**: [`initialize`] builds a ready-to-use `ContentService`

use std::sync::Arc;

use es_core::errors::DomainError;
use es_core::services::{ContentService, ContentServiceConfig};

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Configuration re-exported from the shared crate
pub mod config {
    pub use es_shared::config::{AppConfig, DatabaseConfig, Environment, LogFormat, LoggingConfig};
}

use config::DatabaseConfig;
use database::{DatabasePool, MySqlContentRepository};

/// Content service over the MySQL store
pub type SiteContentService = ContentService<MySqlContentRepository>;

/// Build the content service for the given database configuration.
///
/// When the database is disabled no pool is created and every read is served
/// from fixture data. Otherwise the process-wide pool is created on first use;
/// it connects lazily, so an unreachable server does not fail this call.
pub fn initialize(config: &DatabaseConfig) -> Result<SiteContentService, InfrastructureError> {
    if !config.use_database {
        tracing::info!("Database disabled (USE_DATABASE); serving built-in content");
        return Ok(ContentService::without_database());
    }

    tracing::info!("Initializing content store at {}", config.redacted_url());

    let pool = DatabasePool::global(config)?;
    let repository = MySqlContentRepository::new(pool.get_pool().clone());

    Ok(ContentService::new(
        Arc::new(repository),
        ContentServiceConfig::from(config),
    ))
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        match error {
            InfrastructureError::Database(e) => DomainError::database(e.to_string()),
            other => DomainError::database(other.to_string()),
        }
    }
}
