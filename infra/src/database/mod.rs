//! Database module - MySQL implementations using SQLx
//!
//! - `connection` - process-wide pool with lazy connect and a background probe
//! - `schema` - table definitions created on startup
//! - `migrations` - additive column migrations with a versioned log
//! - `seed` - first-boot rows for the hero carousel and navigation
//! - `query` - list query composition shared by the repository
//! - `mysql` - `ContentRepository` implementation

pub mod connection;
pub mod migrations;
pub mod mysql;
pub mod query;
pub mod schema;
pub mod seed;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use migrations::{migrate_columns, ColumnMigration, MigrationReport, COLUMN_MIGRATIONS};
pub use mysql::MySqlContentRepository;
pub use query::{visible_by_slug, ListQuery};
pub use schema::initialize_schema;
pub use seed::{seed_defaults, SeedReport};
