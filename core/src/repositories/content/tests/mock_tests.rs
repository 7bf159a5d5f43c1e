//! Tests for the mock content repository implementation

use chrono::Utc;
use serde_json::json;

use crate::domain::entities::{HeroSlide, ProductInput, ProductRecord};
use crate::domain::value_objects::ListFilter;
use crate::repositories::{ContentRepository, MockContentRepository};

fn record(id: u64, slug: &str, category: &str, featured: bool) -> ProductRecord {
    ProductRecord {
        id,
        name: slug.into(),
        slug: slug.into(),
        description: None,
        image: None,
        category: Some(category.into()),
        features: json!([]),
        specifications: json!([]),
        applications: json!([]),
        benefits: json!([]),
        is_featured: featured,
        is_active: true,
        price: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn slide(id: u64, position: i32, is_active: bool) -> HeroSlide {
    HeroSlide {
        id,
        title: format!("slide {}", id),
        description: None,
        cta_label: None,
        cta_link: None,
        image: None,
        category: None,
        position,
        is_active,
    }
}

#[tokio::test]
async fn test_mock_list_products_filters() {
    let repo = MockContentRepository::new();
    repo.insert_product(record(1, "a", "solar", true));
    repo.insert_product(record(2, "b", "solar", false));
    repo.insert_product(record(3, "c", "wind", true));

    let featured_solar = repo
        .list_products(&ListFilter::active().with_category("solar").with_featured(Some(true)))
        .await
        .unwrap();
    assert_eq!(featured_solar.len(), 1);
    assert_eq!(featured_solar[0].slug, "a");

    let limited = repo
        .list_products(&ListFilter::all().with_limit(2))
        .await
        .unwrap();
    assert_eq!(limited.len(), 2);
}

#[tokio::test]
async fn test_mock_save_product_rejects_duplicate_slug() {
    let repo = MockContentRepository::new();
    repo.insert_product(record(1, "taken", "solar", false));

    let input = ProductInput {
        name: "Other".into(),
        slug: "taken".into(),
        ..Default::default()
    };
    assert!(repo.save_product(&input).await.is_err());
}

#[tokio::test]
async fn test_mock_update_of_missing_product_is_not_found() {
    let repo = MockContentRepository::new();
    let input = ProductInput {
        id: Some(12),
        name: "Ghost".into(),
        slug: "ghost".into(),
        ..Default::default()
    };
    assert!(repo.save_product(&input).await.is_err());
    assert!(repo.find_product_by_id(12).await.unwrap().is_none());
}

#[tokio::test]
async fn test_mock_hero_slides_ordered_and_active() {
    let repo = MockContentRepository::new();
    repo.insert_hero_slide(slide(1, 3, true));
    repo.insert_hero_slide(slide(2, 1, true));
    repo.insert_hero_slide(slide(3, 2, false));

    let slides = repo.list_hero_slides().await.unwrap();
    let ids: Vec<u64> = slides.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[tokio::test]
async fn test_mock_should_fail() {
    let repo = MockContentRepository::new();
    repo.set_should_fail(true);
    assert!(repo.list_pages().await.is_err());
    assert!(repo.upsert_newsletter_subscription("a@b.co").await.is_err());

    repo.set_should_fail(false);
    assert!(repo.list_pages().await.unwrap().is_empty());
}
