//! Unit tests for the content service against the mock repository

use serde_json::json;

use crate::domain::entities::{
    ContactForm, NewsInput, ProductChildInput, ProductInput, SolutionInput, SpecEntry,
};
use crate::domain::value_objects::{ListFilter, DEFAULT_LIST_LIMIT};

use super::helpers::*;

#[tokio::test]
async fn test_category_filter_and_active_default() {
    let (service, repo) = service();
    repo.insert_product(product(1, "sun-1", "solar", true));
    repo.insert_product(product(2, "sun-2", "solar", false));
    repo.insert_product(product(3, "breeze-1", "wind", true));

    let solar = service.get_products(Some("solar"), 10, None).await;
    let slugs: Vec<&str> = solar.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["sun-1"]);

    let all = service.get_all_products().await;
    assert_eq!(all.len(), 3);
    assert!(all.iter().any(|p| !p.is_active));
}

#[tokio::test]
async fn test_products_are_normalized() {
    let (service, repo) = service();
    let mut record = product(1, "cube", "residential", true);
    record.features = json!("[\"a\",\"b\"]");
    record.specifications = json!([{"label": "Capacity", "value": "10 kWh"}]);
    record.benefits = json!("garbage");
    repo.insert_product(record);

    let product = service.get_product_by_slug("cube").await.expect("product");
    assert_eq!(product.features, vec!["a", "b"]);
    assert_eq!(product.specifications, vec![SpecEntry::new("Capacity", "10 kWh")]);
    assert!(product.applications.is_empty());
    assert!(product.benefits.is_empty());
}

#[tokio::test]
async fn test_admin_lists_are_not_truncated() {
    let (service, repo) = service();
    for id in 1..=150 {
        repo.insert_product(product(id, &format!("unit-{}", id), "solar", id % 5 != 0));
    }
    for id in 1..=120 {
        repo.insert_news(news(id, &format!("post-{}", id), id % 2 == 0));
    }

    assert_eq!(service.get_all_products().await.len(), 150);
    assert_eq!(service.get_all_news().await.len(), 120);
    assert_eq!(service.get_news(&ListFilter::active()).await.len(), 60);
    assert_eq!(
        service.list_products(&ListFilter::active()).await.len(),
        DEFAULT_LIST_LIMIT as usize
    );
}

#[tokio::test]
async fn test_slug_lookup_hides_inactive_rows() {
    let (service, repo) = service();
    repo.insert_product(product(1, "retired", "solar", false));
    repo.insert_news(news(2, "draft-post", false));

    assert!(service.get_product_by_slug("retired").await.is_none());
    assert!(service.get_news_by_slug("draft-post").await.is_none());
    assert!(service.get_product_by_id(1).await.is_some());
    assert!(service.get_news_by_id(2).await.is_some());

    assert!(service.set_product_active(1, true).await.success);
    assert_eq!(
        service.get_product_by_slug("retired").await.map(|p| p.id),
        Some(1)
    );
}

#[tokio::test]
async fn test_missing_slug_returns_none() {
    let (service, _repo) = service();

    assert!(service.get_product_by_slug("nope").await.is_none());
    assert!(service.get_product_by_id(424242).await.is_none());
    assert!(service.get_solution_by_slug("nope").await.is_none());
    assert!(service.get_news_by_slug("nope").await.is_none());
    assert!(service.get_lab_equipment_by_slug("nope").await.is_none());
    assert!(service.get_lab_equipment_by_id(424242).await.is_none());
}

#[tokio::test]
async fn test_newsletter_resubscribe_updates_timestamp() {
    let (service, repo) = service();

    assert!(service.subscribe_to_newsletter("Reader@Example.com").await.success);
    let first = repo.newsletter_subscriptions();
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].email, "reader@example.com");

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    assert!(service.subscribe_to_newsletter("reader@example.com").await.success);

    let second = repo.newsletter_subscriptions();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].subscribed_at, first[0].subscribed_at);
    assert!(second[0].updated_at > first[0].updated_at);
}

#[tokio::test]
async fn test_newsletter_rejects_invalid_email() {
    let (service, repo) = service();
    let outcome = service.subscribe_to_newsletter("not-an-email").await;
    assert!(!outcome.success);
    assert!(repo.newsletter_subscriptions().is_empty());
}

#[tokio::test]
async fn test_contact_form_validation_and_storage() {
    let (service, repo) = service();

    let rejected = service
        .submit_contact_form(ContactForm {
            name: "".into(),
            email: "bad".into(),
            message: "".into(),
            ..Default::default()
        })
        .await;
    assert!(!rejected.success);
    assert!(rejected.error.unwrap().starts_with("Validation error:"));

    let accepted = service
        .submit_contact_form(ContactForm {
            name: " Ada ".into(),
            email: "ADA@example.com".into(),
            company: Some("Grid Co".into()),
            message: "Quote for 2 cabinets".into(),
            ..Default::default()
        })
        .await;
    assert!(accepted.success);
    assert!(accepted.id.is_some());

    let stored = repo.contact_requests();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Ada");
    assert_eq!(stored[0].email, "ada@example.com");
}

#[tokio::test]
async fn test_specification_upsert_keeps_one_row() {
    let (service, repo) = service();
    repo.insert_product(product(7, "cube", "residential", true));

    let first = ProductChildInput {
        title: "Datasheet".into(),
        ..Default::default()
    };
    assert!(service.upsert_product_specification(7, first).await.success);

    let second = ProductChildInput {
        title: "Datasheet v2".into(),
        content: Some("Updated".into()),
        ..Default::default()
    };
    assert!(service.upsert_product_specification(7, second).await.success);

    let spec = service.get_product_specification(7).await.expect("spec");
    assert_eq!(spec.title, "Datasheet v2");
    assert_eq!(spec.content.as_deref(), Some("Updated"));

    assert!(service.delete_product_specification(7).await.success);
    assert!(service.get_product_specification(7).await.is_none());
}

#[tokio::test]
async fn test_application_upsert_requires_product() {
    let (service, repo) = service();
    let input = ProductChildInput {
        title: "Peak shaving".into(),
        media_url: Some("https://cdn.example.com/peak.mp4".into()),
        media_type: Some("video".into()),
        ..Default::default()
    };

    let orphan = service.upsert_product_application(99, input.clone()).await;
    assert!(!orphan.success);

    repo.insert_product(product(99, "cube", "residential", true));
    assert!(service.upsert_product_application(99, input).await.success);
    let application = service.get_product_application(99).await.expect("application");
    assert_eq!(application.media_type.as_deref(), Some("video"));

    assert!(service.delete_product_application(99).await.success);
    assert!(service.get_product_application(99).await.is_none());
}

#[tokio::test]
async fn test_save_product_insert_update_and_soft_delete() {
    let (service, _repo) = service();

    let created = service
        .save_product(ProductInput {
            name: "PowerCube".into(),
            slug: "powercube".into(),
            category: Some("residential".into()),
            features: vec!["LFP".into()],
            is_active: true,
            ..Default::default()
        })
        .await;
    assert!(created.success);
    let id = created.id.expect("id");

    let updated = service
        .save_product(ProductInput {
            id: Some(id),
            name: "PowerCube 2".into(),
            slug: "powercube".into(),
            is_active: true,
            ..Default::default()
        })
        .await;
    assert!(updated.success);
    let product = service.get_product_by_id(id).await.expect("product");
    assert_eq!(product.name, "PowerCube 2");

    assert!(service.set_product_active(id, false).await.success);
    assert!(service.get_products(None, 10, None).await.is_empty());
    assert_eq!(service.get_all_products().await.len(), 1);

    assert!(!service.set_product_active(id + 1, false).await.success);
}

#[tokio::test]
async fn test_save_rejects_bad_slug() {
    let (service, _repo) = service();
    let outcome = service
        .save_product(ProductInput {
            name: "X".into(),
            slug: "Not A Slug".into(),
            ..Default::default()
        })
        .await;
    assert!(!outcome.success);
    assert!(outcome.error.unwrap().starts_with("slug:"));

    let outcome = service
        .save_news(NewsInput {
            title: " ".into(),
            slug: "ok-slug".into(),
            ..Default::default()
        })
        .await;
    assert_eq!(outcome.error.as_deref(), Some("title: Title is required"));
}

#[tokio::test]
async fn test_news_published_filter() {
    let (service, repo) = service();
    repo.insert_news(news(1, "live-article", true));
    repo.insert_news(news(2, "draft-article", false));

    let published = service.get_news(&ListFilter::active()).await;
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].slug, "live-article");
    assert_eq!(service.get_all_news().await.len(), 2);
    assert!(service.get_news_by_id(2).await.is_some());
}

#[tokio::test]
async fn test_save_solution_round_trip() {
    let (service, _repo) = service();
    let outcome = service
        .save_solution(SolutionInput {
            title: "Peak Shaving".into(),
            slug: "peak-shaving".into(),
            features: vec!["a".into(), "b".into()],
            is_active: true,
            ..Default::default()
        })
        .await;
    assert!(outcome.success);

    let solution = service.get_solution_by_slug("peak-shaving").await.expect("solution");
    assert_eq!(solution.features, vec!["a", "b"]);
    assert_eq!(
        service.get_solution_by_id(solution.id).await.map(|s| s.slug),
        Some("peak-shaving".to_string())
    );
}

#[tokio::test]
async fn test_navigation_drops_orphans() {
    let (service, repo) = service();
    repo.insert_navigation(nav(1, None, 1));
    repo.insert_navigation(nav(2, Some(1), 1));
    repo.insert_navigation(nav(3, Some(404), 2));

    let tree = service.get_navigation().await;
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].children.len(), 1);
    assert_eq!(tree[0].children[0].item.id, 2);
}

#[tokio::test]
async fn test_initialize_delegates_to_repository() {
    let (service, repo) = service();
    assert!(service.initialize().await);
    assert!(repo.is_initialized());
}
