//! Row builders shared by the content service tests

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde_json::{json, Value as JsonValue};

use crate::domain::entities::{NavigationItem, News, ProductRecord};
use crate::repositories::MockContentRepository;
use crate::services::content::{ContentService, ContentServiceConfig};

pub fn product(id: u64, slug: &str, category: &str, is_active: bool) -> ProductRecord {
    ProductRecord {
        id,
        name: slug.to_uppercase(),
        slug: slug.to_string(),
        description: None,
        image: None,
        category: Some(category.to_string()),
        features: json!(["stored"]),
        specifications: JsonValue::Null,
        applications: json!([]),
        benefits: JsonValue::Null,
        is_featured: false,
        is_active,
        price: None,
        created_at: Utc::now() - Duration::minutes(id as i64),
        updated_at: Utc::now(),
    }
}

pub fn news(id: u64, slug: &str, is_published: bool) -> News {
    News {
        id,
        title: slug.to_string(),
        slug: slug.to_string(),
        excerpt: None,
        content: None,
        image: None,
        category: Some("company".into()),
        author: None,
        published_at: Some(Utc::now() - Duration::days(id as i64)),
        is_published,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn nav(id: u64, parent_id: Option<u64>, position: i32) -> NavigationItem {
    NavigationItem {
        id,
        label: format!("nav-{}", id),
        href: format!("/nav/{}", id),
        parent_id,
        position,
        is_external: false,
        is_active: true,
    }
}

/// Service over a fresh mock repository with the database enabled
pub fn service() -> (ContentService<MockContentRepository>, Arc<MockContentRepository>) {
    let repo = Arc::new(MockContentRepository::new());
    let service = ContentService::new(repo.clone(), ContentServiceConfig { use_database: true });
    (service, repo)
}

/// Service over the given repository with the database disabled
pub fn disabled_service(
    repo: Arc<MockContentRepository>,
) -> ContentService<MockContentRepository> {
    ContentService::new(repo, ContentServiceConfig { use_database: false })
}
