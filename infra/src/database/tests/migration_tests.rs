//! Column migration planning

use std::collections::HashSet;

use crate::database::migrations::{
    plan_step, ColumnMigration, MigrationReport, MigrationStep, COLUMN_MIGRATIONS,
};
use crate::database::schema::TABLES;

const MEDIA_URL: ColumnMigration = ColumnMigration {
    table: "product_applications",
    column: "media_url",
    definition: "VARCHAR(500) NULL",
};

fn set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_migration_identifier_and_statement() {
    assert_eq!(MEDIA_URL.id(), "product_applications.media_url");
    assert_eq!(
        MEDIA_URL.alter_statement(),
        "ALTER TABLE product_applications ADD COLUMN media_url VARCHAR(500) NULL"
    );
}

#[test]
fn test_plan_adds_only_missing_columns() {
    let existing = set(&["id", "product_id", "title"]);
    assert_eq!(
        plan_step(&MEDIA_URL, &HashSet::new(), &existing),
        MigrationStep::AddColumn
    );

    let existing = set(&["id", "product_id", "title", "media_url"]);
    assert_eq!(
        plan_step(&MEDIA_URL, &HashSet::new(), &existing),
        MigrationStep::RecordOnly
    );
}

#[test]
fn test_recorded_migrations_are_skipped() {
    let recorded = set(&["product_applications.media_url"]);
    assert_eq!(
        plan_step(&MEDIA_URL, &recorded, &HashSet::new()),
        MigrationStep::AlreadyRecorded
    );
}

#[test]
fn test_migrations_cover_known_tables() {
    let tables: HashSet<&str> = COLUMN_MIGRATIONS.iter().map(|m| m.table).collect();
    let expected: HashSet<&str> = ["products", "navigation", "news", "product_applications"]
        .into_iter()
        .collect();
    assert_eq!(tables, expected);

    let created: HashSet<&str> = TABLES.iter().map(|(name, _)| *name).collect();
    assert!(tables.is_subset(&created));

    let ids: HashSet<String> = COLUMN_MIGRATIONS.iter().map(|m| m.id()).collect();
    assert_eq!(ids.len(), COLUMN_MIGRATIONS.len());
}

#[test]
fn test_fresh_schema_needs_no_column_changes() {
    // Tables created today already carry every migrated column
    for migration in COLUMN_MIGRATIONS {
        let (_, definition) = TABLES
            .iter()
            .find(|(name, _)| *name == migration.table)
            .expect("table is created");
        let declared = definition
            .lines()
            .any(|line| line.trim_start().starts_with(&format!("{} ", migration.column)));
        assert!(declared, "{} missing from CREATE TABLE", migration.id());
    }
}

#[test]
fn test_report_summary() {
    let report = MigrationReport {
        applied: vec!["news.author".into()],
        skipped: vec!["news.category".into(), "products.price".into()],
        failed: vec![],
    };
    assert!(!report.is_noop());
    assert!(!report.has_failures());
    assert_eq!(report.to_string(), "1 applied, 2 skipped, 0 failed");
    assert!(MigrationReport::default().is_noop());
}
