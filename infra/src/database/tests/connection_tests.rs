//! Unit tests for database connection pool

use crate::config::DatabaseConfig;
use crate::database::connection::{connect_options, DatabasePool, PoolStatistics};
use crate::InfrastructureError;

fn unreachable_config() -> DatabaseConfig {
    DatabaseConfig::new("127.0.0.1", "energy_storage_test")
        .with_port(1)
        .with_max_connections(2)
}

#[test]
fn test_connect_options_reject_incomplete_config() {
    let empty_host = DatabaseConfig::new("", "energy_storage");
    assert!(matches!(
        connect_options(&empty_host),
        Err(InfrastructureError::Config(_))
    ));

    let no_connections = DatabaseConfig::default().with_max_connections(0);
    assert!(matches!(
        connect_options(&no_connections),
        Err(InfrastructureError::Config(_))
    ));

    assert!(connect_options(&DatabaseConfig::default()).is_ok());
}

#[test]
fn test_pool_requires_runtime() {
    let result = DatabasePool::new(unreachable_config());
    assert!(matches!(result, Err(InfrastructureError::General(_))));
}

#[tokio::test]
async fn test_pool_creation_does_not_connect() {
    // Nothing listens on port 1; creation still succeeds and the probe only logs
    let pool = DatabasePool::new(unreachable_config()).unwrap();

    let stats = pool.get_statistics();
    assert_eq!(stats.max_connections, 2);
    assert_eq!(stats.connections, 0);
    assert_eq!(pool.config().database, "energy_storage_test");
}

#[tokio::test]
async fn test_global_pool_is_created_once() {
    let first = DatabasePool::global(&unreachable_config()).unwrap();
    let second = DatabasePool::global(&DatabaseConfig::new("elsewhere", "other_db")).unwrap();

    assert!(std::ptr::eq(first, second));
    assert_eq!(second.config().database, "energy_storage_test");
}

#[tokio::test]
#[ignore] // Requires actual database
async fn test_pool_health_check() {
    let pool = DatabasePool::new(DatabaseConfig::from_env()).unwrap();
    let health = pool.health_check().await.unwrap();
    assert!(health);
}

#[test]
fn test_pool_statistics_display() {
    let stats = PoolStatistics {
        connections: 5,
        idle_connections: 3,
        max_connections: 10,
    };

    let display = format!("{}", stats);
    assert!(display.contains("5/10"));
    assert!(display.contains("3 idle"));
}
