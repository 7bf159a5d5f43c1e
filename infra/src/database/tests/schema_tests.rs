//! Table definitions

use crate::database::schema::{create_table_statement, TABLES};

#[test]
fn test_tables_in_dependency_order() {
    let names: Vec<&str> = TABLES.iter().map(|(name, _)| *name).collect();
    let position = |table: &str| names.iter().position(|n| *n == table).expect("table");

    for (name, definition) in TABLES {
        for (referenced, _) in TABLES {
            if definition.contains(&format!("REFERENCES {} (", referenced)) {
                assert!(
                    position(*referenced) < position(*name),
                    "{} must be created before {}",
                    referenced,
                    name
                );
            }
        }
    }
    assert_eq!(names.len(), 14);
    assert_eq!(names.last(), Some(&"schema_migrations"));
}

#[test]
fn test_create_statement_is_idempotent_and_utf8mb4() {
    let (name, definition) = TABLES[0];
    let sql = create_table_statement(name, definition);

    assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS products ("));
    assert!(sql.ends_with("COLLATE=utf8mb4_unicode_ci"));
}

#[test]
fn test_slugs_and_child_rows_are_unique() {
    for table in ["products", "solutions", "news", "case_studies", "lab_equipment", "pages"] {
        let (_, definition) = TABLES.iter().find(|(n, _)| *n == table).expect("table");
        assert!(definition.contains("(slug)"), "{} needs a unique slug", table);
    }
    for table in ["product_specifications", "product_applications"] {
        let (_, definition) = TABLES.iter().find(|(n, _)| *n == table).expect("table");
        assert!(definition.contains("UNIQUE KEY") && definition.contains("(product_id)"));
        assert!(definition.contains("ON DELETE CASCADE"));
    }
}
