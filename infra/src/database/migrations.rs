//! Forward-only column migrations.
//!
//! Older deployments created some tables before a few columns existed. Each
//! missing column is added with `ALTER TABLE ... ADD COLUMN`, and its
//! `<table>.<column>` identifier is written to `schema_migrations` so later
//! runs skip it without touching `information_schema`. Columns that already
//! exist (fresh installs, manual changes) are only recorded.
//!
//! Nothing here fails the caller: every error is logged and counted in the
//! returned [`MigrationReport`].

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;
use sqlx::{MySqlPool, Row};

use crate::InfrastructureError;

/// One additive column change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMigration {
    pub table: &'static str,
    pub column: &'static str,
    /// Column type and constraints as written after the column name
    pub definition: &'static str,
}

impl ColumnMigration {
    /// Stable identifier recorded in `schema_migrations`
    pub fn id(&self) -> String {
        format!("{}.{}", self.table, self.column)
    }

    pub fn alter_statement(&self) -> String {
        format!(
            "ALTER TABLE {} ADD COLUMN {} {}",
            self.table, self.column, self.definition
        )
    }
}

/// Columns added after the first release, in application order
pub const COLUMN_MIGRATIONS: &[ColumnMigration] = &[
    ColumnMigration {
        table: "products",
        column: "specifications",
        definition: "JSON NULL",
    },
    ColumnMigration {
        table: "products",
        column: "applications",
        definition: "JSON NULL",
    },
    ColumnMigration {
        table: "products",
        column: "benefits",
        definition: "JSON NULL",
    },
    ColumnMigration {
        table: "products",
        column: "is_featured",
        definition: "BOOLEAN NOT NULL DEFAULT FALSE",
    },
    ColumnMigration {
        table: "products",
        column: "price",
        definition: "DECIMAL(12, 2) NULL",
    },
    ColumnMigration {
        table: "navigation",
        column: "parent_id",
        definition: "BIGINT UNSIGNED NULL",
    },
    ColumnMigration {
        table: "navigation",
        column: "position",
        definition: "INT NOT NULL DEFAULT 0",
    },
    ColumnMigration {
        table: "navigation",
        column: "is_external",
        definition: "BOOLEAN NOT NULL DEFAULT FALSE",
    },
    ColumnMigration {
        table: "news",
        column: "category",
        definition: "VARCHAR(100) NULL",
    },
    ColumnMigration {
        table: "news",
        column: "author",
        definition: "VARCHAR(255) NULL",
    },
    ColumnMigration {
        table: "product_applications",
        column: "media_url",
        definition: "VARCHAR(500) NULL",
    },
    ColumnMigration {
        table: "product_applications",
        column: "media_type",
        definition: "VARCHAR(50) NULL",
    },
];

/// What a migration run did, by migration identifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MigrationReport {
    /// Columns added by this run
    pub applied: Vec<String>,
    /// Already recorded, or already present and now recorded
    pub skipped: Vec<String>,
    /// Left for the next run
    pub failed: Vec<String>,
}

impl MigrationReport {
    /// True when the run changed no table
    pub fn is_noop(&self) -> bool {
        self.applied.is_empty()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

impl std::fmt::Display for MigrationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} applied, {} skipped, {} failed",
            self.applied.len(),
            self.skipped.len(),
            self.failed.len()
        )
    }
}

/// Action decided for one migration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationStep {
    /// Identifier already in the log
    AlreadyRecorded,
    /// Column exists but the identifier is not logged yet
    RecordOnly,
    /// Column is missing
    AddColumn,
}

/// Decide what to do for `migration` given the logged identifiers and the
/// columns currently present on its table
pub fn plan_step(
    migration: &ColumnMigration,
    recorded: &HashSet<String>,
    existing_columns: &HashSet<String>,
) -> MigrationStep {
    if recorded.contains(&migration.id()) {
        MigrationStep::AlreadyRecorded
    } else if existing_columns.contains(&migration.column.to_ascii_lowercase()) {
        MigrationStep::RecordOnly
    } else {
        MigrationStep::AddColumn
    }
}

/// Apply every pending column migration. Running it twice is a no-op the
/// second time.
pub async fn migrate_columns(pool: &MySqlPool) -> MigrationReport {
    let mut report = MigrationReport::default();

    let recorded = match recorded_migrations(pool).await {
        Ok(ids) => ids,
        Err(e) => {
            tracing::warn!("Could not read schema_migrations, checking every column: {}", e);
            HashSet::new()
        }
    };

    let pending: Vec<&ColumnMigration> = COLUMN_MIGRATIONS
        .iter()
        .filter(|m| {
            if recorded.contains(&m.id()) {
                report.skipped.push(m.id());
                false
            } else {
                true
            }
        })
        .collect();

    let tables: BTreeSet<&str> = pending.iter().map(|m| m.table).collect();

    for table in tables {
        let existing = match existing_columns(pool, table).await {
            Ok(columns) => columns,
            Err(e) => {
                tracing::warn!("Could not inspect columns of {}: {}", table, e);
                report
                    .failed
                    .extend(pending.iter().filter(|m| m.table == table).map(|m| m.id()));
                continue;
            }
        };

        if existing.is_empty() {
            tracing::warn!("Table {} does not exist; skipping its column migrations", table);
            report
                .failed
                .extend(pending.iter().filter(|m| m.table == table).map(|m| m.id()));
            continue;
        }

        for migration in pending.iter().filter(|m| m.table == table) {
            apply(pool, migration, &recorded, &existing, &mut report).await;
        }
    }

    if report.is_noop() {
        tracing::debug!("Column migrations: {}", report);
    } else {
        tracing::info!("Column migrations: {}", report);
    }

    report
}

async fn apply(
    pool: &MySqlPool,
    migration: &ColumnMigration,
    recorded: &HashSet<String>,
    existing: &HashSet<String>,
    report: &mut MigrationReport,
) {
    let id = migration.id();

    match plan_step(migration, recorded, existing) {
        MigrationStep::AlreadyRecorded => report.skipped.push(id),
        MigrationStep::RecordOnly => {
            record(pool, &id).await;
            report.skipped.push(id);
        }
        MigrationStep::AddColumn => {
            match sqlx::query(&migration.alter_statement()).execute(pool).await {
                Ok(_) => {
                    tracing::info!("Added column {}", id);
                    record(pool, &id).await;
                    report.applied.push(id);
                }
                Err(e) if is_duplicate_column(&e) => {
                    tracing::debug!("Column {} was added concurrently", id);
                    record(pool, &id).await;
                    report.skipped.push(id);
                }
                Err(e) => {
                    tracing::warn!("Failed to add column {}: {}", id, e);
                    report.failed.push(id);
                }
            }
        }
    }
}

async fn recorded_migrations(pool: &MySqlPool) -> Result<HashSet<String>, InfrastructureError> {
    let rows = sqlx::query("SELECT id FROM schema_migrations")
        .fetch_all(pool)
        .await?;

    rows.iter()
        .map(|row| row.try_get::<String, _>("id").map_err(InfrastructureError::from))
        .collect()
}

/// Lowercased column names of `table` in the current database. Empty when the
/// table does not exist.
async fn existing_columns(
    pool: &MySqlPool,
    table: &str,
) -> Result<HashSet<String>, InfrastructureError> {
    let rows = sqlx::query(
        r#"
            SELECT CAST(COLUMN_NAME AS CHAR(64)) AS column_name
            FROM information_schema.COLUMNS
            WHERE TABLE_SCHEMA = DATABASE() AND TABLE_NAME = ?
        "#,
    )
    .bind(table)
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| {
            row.try_get::<String, _>("column_name")
                .map(|name| name.to_ascii_lowercase())
                .map_err(InfrastructureError::from)
        })
        .collect()
}

async fn record(pool: &MySqlPool, id: &str) {
    if let Err(e) = sqlx::query("INSERT IGNORE INTO schema_migrations (id) VALUES (?)")
        .bind(id)
        .execute(pool)
        .await
    {
        tracing::warn!("Could not record migration {}: {}", id, e);
    }
}

/// MySQL error 1060 (SQLSTATE 42S21), duplicate column name
fn is_duplicate_column(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(db) => db.code().as_deref() == Some("42S21"),
        _ => false,
    }
}
