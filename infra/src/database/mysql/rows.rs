//! Column lists and row mapping for the content tables.
//!
//! JSON columns are selected as `CAST(... AS CHAR)` so legacy text columns and
//! native JSON columns decode the same way; the raw text is kept as a JSON
//! value and normalized by the domain layer.

use sqlx::mysql::{MySql, MySqlRow};
use sqlx::{Decode, Row, Type};

use es_core::domain::entities::{
    CaseStudy, HeroSlide, LabEquipmentRecord, NavigationItem, News, Page, ProductApplication,
    ProductRecord, ProductSpecification, SolutionRecord,
};
use es_core::errors::DomainError;
use es_shared::utils::raw_json_from_text;

pub const PRODUCT_SELECT: &str = r#"
    SELECT id, name, slug, description, image, category,
           CAST(features AS CHAR) AS features,
           CAST(specifications AS CHAR) AS specifications,
           CAST(applications AS CHAR) AS applications,
           CAST(benefits AS CHAR) AS benefits,
           is_featured, is_active, price, created_at, updated_at
    FROM products
"#;

pub const PRODUCT_SPECIFICATION_SELECT: &str = r#"
    SELECT id, product_id, title, description, image, content, created_at, updated_at
    FROM product_specifications
"#;

pub const PRODUCT_APPLICATION_SELECT: &str = r#"
    SELECT id, product_id, title, description, image, media_url, media_type, content,
           created_at, updated_at
    FROM product_applications
"#;

pub const HERO_SLIDE_SELECT: &str = r#"
    SELECT id, title, description, cta_label, cta_link, image, category, position, is_active
    FROM hero_slides
"#;

pub const LAB_EQUIPMENT_SELECT: &str = r#"
    SELECT id, name, slug, description, image, category,
           CAST(specifications AS CHAR) AS specifications,
           is_active, created_at, updated_at
    FROM lab_equipment
"#;

pub const NEWS_SELECT: &str = r#"
    SELECT id, title, slug, excerpt, content, image, category, author, published_at,
           is_published, created_at, updated_at
    FROM news
"#;

pub const SOLUTION_SELECT: &str = r#"
    SELECT id, title, slug, summary, content, image, category,
           CAST(features AS CHAR) AS features,
           is_active, created_at, updated_at
    FROM solutions
"#;

pub const CASE_STUDY_SELECT: &str = r#"
    SELECT id, title, slug, client, location, summary, content, image, category,
           is_published, created_at, updated_at
    FROM case_studies
"#;

pub const NAVIGATION_SELECT: &str = r#"
    SELECT id, label, href, parent_id, position, is_external, is_active
    FROM navigation
"#;

pub const PAGE_SELECT: &str = r#"
    SELECT id, title, slug, content, meta_description, is_published, created_at, updated_at
    FROM pages
"#;

fn get<'r, T>(row: &'r MySqlRow, column: &str) -> Result<T, DomainError>
where
    T: Decode<'r, MySql> + Type<MySql>,
{
    row.try_get(column).map_err(|e| DomainError::Internal {
        message: format!("Failed to get {}: {}", column, e),
    })
}

fn get_json(row: &MySqlRow, column: &str) -> Result<serde_json::Value, DomainError> {
    let text: Option<String> = get(row, column)?;
    Ok(raw_json_from_text(text.as_deref()))
}

pub fn row_to_product(row: &MySqlRow) -> Result<ProductRecord, DomainError> {
    Ok(ProductRecord {
        id: get(row, "id")?,
        name: get(row, "name")?,
        slug: get(row, "slug")?,
        description: get(row, "description")?,
        image: get(row, "image")?,
        category: get(row, "category")?,
        features: get_json(row, "features")?,
        specifications: get_json(row, "specifications")?,
        applications: get_json(row, "applications")?,
        benefits: get_json(row, "benefits")?,
        is_featured: get(row, "is_featured")?,
        is_active: get(row, "is_active")?,
        price: get(row, "price")?,
        created_at: get(row, "created_at")?,
        updated_at: get(row, "updated_at")?,
    })
}

pub fn row_to_specification(row: &MySqlRow) -> Result<ProductSpecification, DomainError> {
    Ok(ProductSpecification {
        id: get(row, "id")?,
        product_id: get(row, "product_id")?,
        title: get(row, "title")?,
        description: get(row, "description")?,
        image: get(row, "image")?,
        content: get(row, "content")?,
        created_at: get(row, "created_at")?,
        updated_at: get(row, "updated_at")?,
    })
}

pub fn row_to_application(row: &MySqlRow) -> Result<ProductApplication, DomainError> {
    Ok(ProductApplication {
        id: get(row, "id")?,
        product_id: get(row, "product_id")?,
        title: get(row, "title")?,
        description: get(row, "description")?,
        image: get(row, "image")?,
        media_url: get(row, "media_url")?,
        media_type: get(row, "media_type")?,
        content: get(row, "content")?,
        created_at: get(row, "created_at")?,
        updated_at: get(row, "updated_at")?,
    })
}

pub fn row_to_hero_slide(row: &MySqlRow) -> Result<HeroSlide, DomainError> {
    Ok(HeroSlide {
        id: get(row, "id")?,
        title: get(row, "title")?,
        description: get(row, "description")?,
        cta_label: get(row, "cta_label")?,
        cta_link: get(row, "cta_link")?,
        image: get(row, "image")?,
        category: get(row, "category")?,
        position: get(row, "position")?,
        is_active: get(row, "is_active")?,
    })
}

pub fn row_to_lab_equipment(row: &MySqlRow) -> Result<LabEquipmentRecord, DomainError> {
    Ok(LabEquipmentRecord {
        id: get(row, "id")?,
        name: get(row, "name")?,
        slug: get(row, "slug")?,
        description: get(row, "description")?,
        image: get(row, "image")?,
        category: get(row, "category")?,
        specifications: get_json(row, "specifications")?,
        is_active: get(row, "is_active")?,
        created_at: get(row, "created_at")?,
        updated_at: get(row, "updated_at")?,
    })
}

pub fn row_to_news(row: &MySqlRow) -> Result<News, DomainError> {
    Ok(News {
        id: get(row, "id")?,
        title: get(row, "title")?,
        slug: get(row, "slug")?,
        excerpt: get(row, "excerpt")?,
        content: get(row, "content")?,
        image: get(row, "image")?,
        category: get(row, "category")?,
        author: get(row, "author")?,
        published_at: get(row, "published_at")?,
        is_published: get(row, "is_published")?,
        created_at: get(row, "created_at")?,
        updated_at: get(row, "updated_at")?,
    })
}

pub fn row_to_solution(row: &MySqlRow) -> Result<SolutionRecord, DomainError> {
    Ok(SolutionRecord {
        id: get(row, "id")?,
        title: get(row, "title")?,
        slug: get(row, "slug")?,
        summary: get(row, "summary")?,
        content: get(row, "content")?,
        image: get(row, "image")?,
        category: get(row, "category")?,
        features: get_json(row, "features")?,
        is_active: get(row, "is_active")?,
        created_at: get(row, "created_at")?,
        updated_at: get(row, "updated_at")?,
    })
}

pub fn row_to_case_study(row: &MySqlRow) -> Result<CaseStudy, DomainError> {
    Ok(CaseStudy {
        id: get(row, "id")?,
        title: get(row, "title")?,
        slug: get(row, "slug")?,
        client: get(row, "client")?,
        location: get(row, "location")?,
        summary: get(row, "summary")?,
        content: get(row, "content")?,
        image: get(row, "image")?,
        category: get(row, "category")?,
        is_published: get(row, "is_published")?,
        created_at: get(row, "created_at")?,
        updated_at: get(row, "updated_at")?,
    })
}

pub fn row_to_navigation(row: &MySqlRow) -> Result<NavigationItem, DomainError> {
    Ok(NavigationItem {
        id: get(row, "id")?,
        label: get(row, "label")?,
        href: get(row, "href")?,
        parent_id: get(row, "parent_id")?,
        position: get(row, "position")?,
        is_external: get(row, "is_external")?,
        is_active: get(row, "is_active")?,
    })
}

pub fn row_to_page(row: &MySqlRow) -> Result<Page, DomainError> {
    Ok(Page {
        id: get(row, "id")?,
        title: get(row, "title")?,
        slug: get(row, "slug")?,
        content: get(row, "content")?,
        meta_description: get(row, "meta_description")?,
        is_published: get(row, "is_published")?,
        created_at: get(row, "created_at")?,
        updated_at: get(row, "updated_at")?,
    })
}
