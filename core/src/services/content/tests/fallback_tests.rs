//! Fixture fallback when the database is disabled or failing

use std::sync::Arc;

use crate::domain::entities::ContactForm;
use crate::domain::value_objects::ListFilter;
use crate::repositories::MockContentRepository;
use crate::services::content::{fixtures, ContentService};

use super::helpers::*;

#[tokio::test]
async fn test_disabled_flag_serves_fixtures_regardless_of_store() {
    let repo = Arc::new(MockContentRepository::new());
    repo.insert_product(product(500, "stored-only", "solar", true));
    repo.insert_hero_slide(crate::domain::entities::HeroSlide {
        id: 77,
        title: "stored slide".into(),
        description: None,
        cta_label: None,
        cta_link: None,
        image: None,
        category: None,
        position: 1,
        is_active: true,
    });
    let service = disabled_service(repo);

    assert!(!service.is_database_enabled());
    assert_eq!(service.get_all_products().await, fixtures::products());
    assert_eq!(service.get_hero_slides().await, fixtures::hero_slides());
    assert_eq!(service.get_news(&ListFilter::active()).await, fixtures::news());
    assert_eq!(service.get_solutions(&ListFilter::active()).await, fixtures::solutions());
    assert_eq!(
        service.get_lab_equipment(&ListFilter::active()).await,
        fixtures::lab_equipment()
    );
    assert_eq!(
        service.get_case_studies(&ListFilter::active()).await,
        fixtures::case_studies()
    );
    assert_eq!(service.get_all_pages().await, fixtures::pages());
    assert!(service.get_product_by_slug("stored-only").await.is_none());
}

#[tokio::test]
async fn test_forced_failure_falls_back_on_every_read() {
    let (service, repo) = service();
    repo.insert_product(product(1, "live", "solar", true));
    repo.set_should_fail(true);

    assert_eq!(service.get_all_products().await, fixtures::products());
    assert_eq!(service.get_hero_slides().await, fixtures::hero_slides());
    assert_eq!(service.get_all_news().await, fixtures::news());
    assert_eq!(service.get_solutions(&ListFilter::all()).await, fixtures::solutions());
    assert_eq!(service.get_all_pages().await, fixtures::pages());
    assert_eq!(
        service.get_case_studies(&ListFilter::all()).await,
        fixtures::case_studies()
    );
    assert!(!service.get_navigation().await.is_empty());
    assert!(service.get_product_specification(1).await.is_none());
    assert!(service.get_product_application(1).await.is_none());

    // Lookups search the fixtures
    let fixture_slug = fixtures::products()[0].slug.clone();
    assert_eq!(
        service.get_product_by_slug(&fixture_slug).await.map(|p| p.id),
        Some(fixtures::products()[0].id)
    );
    assert!(service.get_product_by_slug("live").await.is_none());
    assert!(service.get_news_by_slug("no-such-article").await.is_none());
}

#[tokio::test]
async fn test_fixture_subset_honours_filters() {
    let service = ContentService::<MockContentRepository>::without_database();

    let residential = service.get_products(Some("residential"), 10, None).await;
    assert!(!residential.is_empty());
    assert!(residential
        .iter()
        .all(|p| p.category.as_deref() == Some("residential")));

    let featured = service.get_products(None, 10, Some(true)).await;
    assert!(featured.iter().all(|p| p.is_featured));

    let limited = service.get_products(None, 1, None).await;
    assert_eq!(limited.len(), 1);

    assert!(service.get_products(Some("no-such-category"), 10, None).await.is_empty());
}

#[tokio::test]
async fn test_fixture_navigation_tree() {
    let service = ContentService::<MockContentRepository>::without_database();
    let tree = service.get_navigation().await;

    let roots = fixtures::navigation_items()
        .iter()
        .filter(|n| n.parent_id.is_none())
        .count();
    assert_eq!(tree.len(), roots);

    let products = tree
        .iter()
        .find(|n| n.item.href == "/products")
        .expect("products section");
    assert_eq!(products.children.len(), 3);
}

#[tokio::test]
async fn test_writes_fail_when_disabled() {
    let repo = Arc::new(MockContentRepository::new());
    let service = disabled_service(repo.clone());

    let outcome = service.subscribe_to_newsletter("reader@example.com").await;
    assert!(!outcome.success);
    assert_eq!(outcome.error.as_deref(), Some("Database access is disabled"));

    let outcome = service
        .submit_contact_form(ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello".into(),
            ..Default::default()
        })
        .await;
    assert!(!outcome.success);
    assert!(repo.contact_requests().is_empty());
    assert!(!service.initialize().await);
    assert!(!repo.is_initialized());
}

#[tokio::test]
async fn test_write_errors_are_surfaced_not_masked() {
    let (service, repo) = service();
    repo.set_should_fail(true);

    let outcome = service.subscribe_to_newsletter("reader@example.com").await;
    assert!(!outcome.success);
    assert_eq!(
        outcome.error.as_deref(),
        Some("Database error: Mock repository error")
    );
    assert!(!service.initialize().await);
}
