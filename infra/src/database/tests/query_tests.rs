//! List query composition

use es_core::domain::value_objects::ListFilter;

use crate::database::query::{visible_by_slug, ListQuery};

const SELECT: &str = "SELECT id, slug FROM products";

fn placeholders(sql: &str) -> usize {
    sql.matches('?').count()
}

#[test]
fn test_clause_order_with_every_filter() {
    let filter = ListFilter::active()
        .with_category("residential")
        .with_featured(Some(true))
        .with_limit(5);
    let builder = ListQuery::from_filter(SELECT, "is_active", &filter)
        .order_by("created_at DESC")
        .build();

    assert_eq!(
        builder.sql(),
        "SELECT id, slug FROM products WHERE is_active = TRUE AND category = ? \
         AND is_featured = ? ORDER BY created_at DESC LIMIT ?"
    );
}

#[test]
fn test_all_rows_have_no_visibility_clause_or_limit() {
    let builder = ListQuery::from_filter(SELECT, "is_active", &ListFilter::all())
        .order_by("id ASC")
        .build();

    assert_eq!(builder.sql(), "SELECT id, slug FROM products WHERE 1=1 ORDER BY id ASC");
}

#[test]
fn test_active_filter_keeps_default_page_size() {
    let builder = ListQuery::from_filter(SELECT, "is_published", &ListFilter::active()).build();

    assert!(builder.sql().ends_with("ORDER BY id ASC LIMIT ?"));
    assert_eq!(placeholders(builder.sql()), 1);
}

#[test]
fn test_category_is_bound_not_spliced() {
    let filter = ListFilter::all().with_category("x' OR '1'='1");
    let builder = ListQuery::from_filter(SELECT, "is_published", &filter).build();

    assert!(!builder.sql().contains("OR '1'"));
    assert!(builder.sql().contains("WHERE 1=1 AND category = ?"));
    assert_eq!(placeholders(builder.sql()), 1);
}

#[test]
fn test_featured_dropped_for_entities_without_flag() {
    let filter = ListFilter::all().with_featured(Some(true));
    let builder =
        ListQuery::from_filter(SELECT, "is_active", &filter.without_featured()).build();

    assert!(!builder.sql().contains("is_featured"));
    assert_eq!(placeholders(builder.sql()), 0);
}

#[test]
fn test_unbounded_query_has_no_limit() {
    let builder = ListQuery::new("SELECT id FROM navigation")
        .visibility("is_active", true)
        .order_by("position ASC")
        .build();

    assert_eq!(
        builder.sql(),
        "SELECT id FROM navigation WHERE is_active = TRUE ORDER BY position ASC"
    );
}

#[test]
fn test_slug_lookup_requires_visible_row() {
    let builder = visible_by_slug(SELECT, "is_active", "retired' --");

    assert_eq!(
        builder.sql(),
        "SELECT id, slug FROM products WHERE slug = ? AND is_active = TRUE LIMIT 1"
    );

    let builder = visible_by_slug("SELECT id FROM news", "is_published", "draft-post");
    assert!(builder.sql().ends_with("AND is_published = TRUE LIMIT 1"));
}
