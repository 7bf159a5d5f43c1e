//! Database connection pool management
//!
//! One MySQL pool serves the whole process. It is created on first use,
//! connects lazily and checks connectivity in a detached task, so an
//! unreachable server shows up in the logs and as query errors rather than as
//! a startup failure.

use once_cell::sync::OnceCell;
use sqlx::{
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
    ConnectOptions, MySqlPool, Row,
};
use std::time::Duration;
use tracing::log::LevelFilter;

use crate::config::DatabaseConfig;
use crate::InfrastructureError;

static GLOBAL_POOL: OnceCell<DatabasePool> = OnceCell::new();

/// Database connection pool wrapper
///
/// Manages the MySQL connection pool with configurable settings
/// for connection limits, timeouts, and health checks.
#[derive(Clone)]
pub struct DatabasePool {
    /// SQLx MySQL connection pool
    pool: MySqlPool,
    /// Configuration used to create this pool
    config: DatabaseConfig,
}

impl DatabasePool {
    /// Process-wide pool, created from `config` on the first call.
    ///
    /// Later calls return the same pool and ignore their argument. Concurrent
    /// first calls race safely; exactly one pool is kept.
    pub fn global(config: &DatabaseConfig) -> Result<&'static DatabasePool, InfrastructureError> {
        GLOBAL_POOL.get_or_try_init(|| Self::new(config.clone()))
    }

    /// Process-wide pool configured from the environment
    pub fn shared() -> Result<&'static DatabasePool, InfrastructureError> {
        if let Some(pool) = GLOBAL_POOL.get() {
            return Ok(pool);
        }
        Self::global(&DatabaseConfig::from_env())
    }

    /// Create a new database connection pool
    ///
    /// No connection is opened here. A background task acquires and releases
    /// one connection and logs the outcome. Must be called from within a Tokio
    /// runtime.
    ///
    /// # Example
    /// ```no_run
    /// use es_infra::config::DatabaseConfig;
    /// use es_infra::database::DatabasePool;
    ///
    /// # async fn create_pool() -> Result<(), es_infra::InfrastructureError> {
    /// let config = DatabaseConfig::new("localhost", "energy_storage")
    ///     .with_credentials("site", "secret");
    /// let pool = DatabasePool::new(config)?;
    /// assert!(pool.health_check().await?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: DatabaseConfig) -> Result<Self, InfrastructureError> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| {
            InfrastructureError::General(
                "Database pool must be created inside a Tokio runtime".to_string(),
            )
        })?;

        let connect_options = connect_options(&config)?;

        tracing::info!(
            "Creating database connection pool for {} with max_connections: {}",
            config.redacted_url(),
            config.max_connections
        );

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(0)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(config.max_lifetime))
            .test_before_acquire(true)
            .connect_lazy_with(connect_options);

        let db = Self { pool, config };
        db.spawn_probe(&runtime);
        Ok(db)
    }

    /// Acquire and release one connection in the background, logging the result
    fn spawn_probe(&self, runtime: &tokio::runtime::Handle) {
        let pool = self.pool.clone();
        let target = self.config.redacted_url();

        runtime.spawn(async move {
            match pool.acquire().await {
                Ok(connection) => {
                    drop(connection);
                    tracing::info!("Database connection established: {}", target);
                }
                Err(e) => {
                    tracing::warn!("Database connection probe failed for {}: {}", target, e);
                }
            }
        });
    }

    /// Get a reference to the underlying SQLx pool
    pub fn get_pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Configuration this pool was created with
    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Check if the database connection is healthy
    ///
    /// Performs a simple query to verify connectivity.
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        tracing::debug!("Performing database health check");

        let result = sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Database health check failed: {}", e);
                InfrastructureError::Database(e)
            })?;

        let value: i64 = result.try_get(0)?;

        if value == 1 {
            tracing::debug!("Database health check passed");
            Ok(true)
        } else {
            tracing::warn!("Database health check returned unexpected value: {}", value);
            Ok(false)
        }
    }

    /// Get connection pool statistics
    pub fn get_statistics(&self) -> PoolStatistics {
        PoolStatistics {
            connections: self.pool.size(),
            idle_connections: self.pool.num_idle(),
            max_connections: self.pool.options().get_max_connections(),
        }
    }

    /// Close all connections in the pool
    ///
    /// This should be called during application shutdown.
    pub async fn close(&self) {
        tracing::info!("Closing database connection pool");
        self.pool.close().await;
        tracing::info!("Database connection pool closed");
    }
}

/// Translate the site configuration into SQLx connect options
pub fn connect_options(config: &DatabaseConfig) -> Result<MySqlConnectOptions, InfrastructureError> {
    if config.host.trim().is_empty() {
        return Err(InfrastructureError::Config("Database host is empty".to_string()));
    }
    if config.database.trim().is_empty() {
        return Err(InfrastructureError::Config("Database name is empty".to_string()));
    }
    if config.max_connections == 0 {
        return Err(InfrastructureError::Config(
            "Connection limit must be at least 1".to_string(),
        ));
    }

    let mut options = MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .database(&config.database)
        .charset("utf8mb4");

    if !config.password.is_empty() {
        options = options.password(&config.password);
    }

    Ok(options
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(
            LevelFilter::Warn,
            Duration::from_millis(config.slow_query_threshold),
        ))
}

/// Connection pool statistics
#[derive(Debug, Clone)]
pub struct PoolStatistics {
    /// Total number of connections in the pool
    pub connections: u32,
    /// Number of idle connections
    pub idle_connections: usize,
    /// Maximum allowed connections
    pub max_connections: u32,
}

impl std::fmt::Display for PoolStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Pool Stats: {}/{} connections ({} idle)",
            self.connections, self.max_connections, self.idle_connections
        )
    }
}
