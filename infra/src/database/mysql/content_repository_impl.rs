//! MySQL implementation of the ContentRepository trait.
//!
//! Each method issues a single statement against the shared pool (updates
//! that touch no row issue one more to tell "unchanged" from "missing").
//! Driver errors are reported as `DomainError::Database` with the failing
//! operation in the message.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

use es_core::domain::entities::{
    CaseStudy, ContactForm, HeroSlide, LabEquipmentRecord, NavigationItem, News, NewsInput,
    Page, ProductApplication, ProductChildInput, ProductInput, ProductRecord,
    ProductSpecification, SolutionInput, SolutionRecord,
};
use es_core::domain::value_objects::ListFilter;
use es_core::errors::DomainError;
use es_core::repositories::ContentRepository;

use super::rows::*;
use crate::database::migrations::migrate_columns;
use crate::database::query::{visible_by_slug, ListQuery};
use crate::database::schema::initialize_schema;
use crate::database::seed::seed_defaults;

/// MySQL implementation of ContentRepository
pub struct MySqlContentRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlContentRepository {
    /// Create a new MySQL content repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    async fn fetch_list<T>(
        &self,
        query: ListQuery,
        map: fn(&MySqlRow) -> Result<T, DomainError>,
        operation: &str,
    ) -> Result<Vec<T>, DomainError> {
        let mut builder = query.build();
        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_error(operation, e))?;

        rows.iter().map(map).collect()
    }

    async fn fetch_one_by<T, V>(
        &self,
        select: &str,
        column: &str,
        value: V,
        map: fn(&MySqlRow) -> Result<T, DomainError>,
        operation: &str,
    ) -> Result<Option<T>, DomainError>
    where
        V: for<'q> sqlx::Encode<'q, sqlx::MySql> + sqlx::Type<sqlx::MySql> + Send,
    {
        let sql = format!("{} WHERE {} = ? LIMIT 1", select.trim(), column);
        let row = sqlx::query(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_error(operation, e))?;

        row.as_ref().map(map).transpose()
    }

    /// Slug lookups only see rows whose `visibility_column` is set
    async fn fetch_visible_by_slug<T>(
        &self,
        select: &'static str,
        visibility_column: &'static str,
        slug: &str,
        map: fn(&MySqlRow) -> Result<T, DomainError>,
        operation: &str,
    ) -> Result<Option<T>, DomainError> {
        let mut builder = visible_by_slug(select, visibility_column, slug);
        let row = builder
            .build()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_error(operation, e))?;

        row.as_ref().map(map).transpose()
    }

    async fn row_exists(&self, table: &str, id: u64) -> Result<bool, DomainError> {
        let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = ?) AS found", table);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| query_error("check row existence", e))?;

        let found: i64 = row.try_get("found").map_err(|e| DomainError::Internal {
            message: format!("Failed to get existence result: {}", e),
        })?;
        Ok(found == 1)
    }

    /// Map "no row updated" to `NotFound` when the row is really missing
    async fn ensure_updated(
        &self,
        table: &str,
        id: u64,
        rows_affected: u64,
    ) -> Result<(), DomainError> {
        if rows_affected > 0 || self.row_exists(table, id).await? {
            Ok(())
        } else {
            Err(DomainError::not_found(format!("{} {}", table, id)))
        }
    }
}

fn query_error(operation: &str, error: sqlx::Error) -> DomainError {
    DomainError::database(format!("Failed to {}: {}", operation, error))
}

fn encode_json<T: serde::Serialize>(value: &T) -> Result<String, DomainError> {
    serde_json::to_string(value).map_err(|e| DomainError::Internal {
        message: format!("Failed to encode JSON column: {}", e),
    })
}

#[async_trait]
impl ContentRepository for MySqlContentRepository {
    async fn initialize(&self) -> Result<(), DomainError> {
        initialize_schema(&self.pool).await?;

        let report = migrate_columns(&self.pool).await;
        if report.has_failures() {
            tracing::warn!("Some column migrations did not apply: {:?}", report.failed);
        }

        match seed_defaults(&self.pool).await {
            Ok(seeded) => tracing::debug!("Seeding finished: {:?}", seeded),
            Err(e) => tracing::warn!("Failed to seed default content: {}", e),
        }

        Ok(())
    }

    async fn list_products(&self, filter: &ListFilter) -> Result<Vec<ProductRecord>, DomainError> {
        let query = ListQuery::from_filter(PRODUCT_SELECT, "is_active", filter)
            .order_by("created_at DESC, id DESC");
        self.fetch_list(query, row_to_product, "list products").await
    }

    async fn find_product_by_slug(&self, slug: &str) -> Result<Option<ProductRecord>, DomainError> {
        self.fetch_visible_by_slug(
            PRODUCT_SELECT,
            "is_active",
            slug,
            row_to_product,
            "find product",
        )
        .await
    }

    async fn find_product_by_id(&self, id: u64) -> Result<Option<ProductRecord>, DomainError> {
        self.fetch_one_by(PRODUCT_SELECT, "id", id, row_to_product, "find product")
            .await
    }

    async fn save_product(&self, input: &ProductInput) -> Result<u64, DomainError> {
        let features = encode_json(&input.features)?;
        let specifications = encode_json(&input.specifications)?;
        let applications = encode_json(&input.applications)?;
        let benefits = encode_json(&input.benefits)?;

        match input.id {
            None => {
                let result = sqlx::query(
                    r#"
                        INSERT INTO products (
                            name, slug, description, image, category, features, specifications,
                            applications, benefits, is_featured, is_active, price
                        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                    "#,
                )
                .bind(&input.name)
                .bind(&input.slug)
                .bind(&input.description)
                .bind(&input.image)
                .bind(&input.category)
                .bind(features)
                .bind(specifications)
                .bind(applications)
                .bind(benefits)
                .bind(input.is_featured)
                .bind(input.is_active)
                .bind(input.price)
                .execute(&self.pool)
                .await
                .map_err(|e| query_error("create product", e))?;

                Ok(result.last_insert_id())
            }
            Some(id) => {
                let result = sqlx::query(
                    r#"
                        UPDATE products
                        SET name = ?, slug = ?, description = ?, image = ?, category = ?,
                            features = ?, specifications = ?, applications = ?, benefits = ?,
                            is_featured = ?, is_active = ?, price = ?
                        WHERE id = ?
                    "#,
                )
                .bind(&input.name)
                .bind(&input.slug)
                .bind(&input.description)
                .bind(&input.image)
                .bind(&input.category)
                .bind(features)
                .bind(specifications)
                .bind(applications)
                .bind(benefits)
                .bind(input.is_featured)
                .bind(input.is_active)
                .bind(input.price)
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|e| query_error("update product", e))?;

                self.ensure_updated("products", id, result.rows_affected()).await?;
                Ok(id)
            }
        }
    }

    async fn set_product_active(&self, id: u64, active: bool) -> Result<bool, DomainError> {
        let result = sqlx::query("UPDATE products SET is_active = ? WHERE id = ?")
            .bind(active)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| query_error("update product status", e))?;

        if result.rows_affected() > 0 {
            return Ok(true);
        }
        self.row_exists("products", id).await
    }

    async fn find_product_specification(
        &self,
        product_id: u64,
    ) -> Result<Option<ProductSpecification>, DomainError> {
        self.fetch_one_by(
            PRODUCT_SPECIFICATION_SELECT,
            "product_id",
            product_id,
            row_to_specification,
            "find product specification",
        )
        .await
    }

    async fn upsert_product_specification(
        &self,
        product_id: u64,
        input: &ProductChildInput,
    ) -> Result<(), DomainError> {
        sqlx::query(
            r#"
                INSERT INTO product_specifications (product_id, title, description, image, content)
                VALUES (?, ?, ?, ?, ?)
                ON DUPLICATE KEY UPDATE
                    title = VALUES(title),
                    description = VALUES(description),
                    image = VALUES(image),
                    content = VALUES(content),
                    updated_at = CURRENT_TIMESTAMP
            "#,
        )
        .bind(product_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.image)
        .bind(&input.content)
        .execute(&self.pool)
        .await
        .map_err(|e| query_error("save product specification", e))?;

        Ok(())
    }

    async fn delete_product_specification(&self, product_id: u64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM product_specifications WHERE product_id = ?")
            .bind(product_id)
            .execute(&self.pool)
            .await
            .map_err(|e| query_error("delete product specification", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_product_application(
        &self,
        product_id: u64,
    ) -> Result<Option<ProductApplication>, DomainError> {
        self.fetch_one_by(
            PRODUCT_APPLICATION_SELECT,
            "product_id",
            product_id,
            row_to_application,
            "find product application",
        )
        .await
    }

    async fn upsert_product_application(
        &self,
        product_id: u64,
        input: &ProductChildInput,
    ) -> Result<(), DomainError> {
        sqlx::query(
            r#"
                INSERT INTO product_applications (
                    product_id, title, description, image, media_url, media_type, content
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
                ON DUPLICATE KEY UPDATE
                    title = VALUES(title),
                    description = VALUES(description),
                    image = VALUES(image),
                    media_url = VALUES(media_url),
                    media_type = VALUES(media_type),
                    content = VALUES(content),
                    updated_at = CURRENT_TIMESTAMP
            "#,
        )
        .bind(product_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.image)
        .bind(&input.media_url)
        .bind(&input.media_type)
        .bind(&input.content)
        .execute(&self.pool)
        .await
        .map_err(|e| query_error("save product application", e))?;

        Ok(())
    }

    async fn delete_product_application(&self, product_id: u64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM product_applications WHERE product_id = ?")
            .bind(product_id)
            .execute(&self.pool)
            .await
            .map_err(|e| query_error("delete product application", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_hero_slides(&self) -> Result<Vec<HeroSlide>, DomainError> {
        let query = ListQuery::new(HERO_SLIDE_SELECT)
            .visibility("is_active", true)
            .order_by("position ASC, id ASC");
        self.fetch_list(query, row_to_hero_slide, "list hero slides").await
    }

    async fn list_lab_equipment(
        &self,
        filter: &ListFilter,
    ) -> Result<Vec<LabEquipmentRecord>, DomainError> {
        let query =
            ListQuery::from_filter(LAB_EQUIPMENT_SELECT, "is_active", &filter.without_featured())
                .order_by("name ASC, id ASC");
        self.fetch_list(query, row_to_lab_equipment, "list lab equipment").await
    }

    async fn find_lab_equipment_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<LabEquipmentRecord>, DomainError> {
        self.fetch_visible_by_slug(
            LAB_EQUIPMENT_SELECT,
            "is_active",
            slug,
            row_to_lab_equipment,
            "find lab equipment",
        )
        .await
    }

    async fn find_lab_equipment_by_id(
        &self,
        id: u64,
    ) -> Result<Option<LabEquipmentRecord>, DomainError> {
        self.fetch_one_by(LAB_EQUIPMENT_SELECT, "id", id, row_to_lab_equipment, "find lab equipment")
            .await
    }

    async fn list_news(&self, filter: &ListFilter) -> Result<Vec<News>, DomainError> {
        let query = ListQuery::from_filter(NEWS_SELECT, "is_published", &filter.without_featured())
            .order_by("published_at DESC, id DESC");
        self.fetch_list(query, row_to_news, "list news").await
    }

    async fn find_news_by_slug(&self, slug: &str) -> Result<Option<News>, DomainError> {
        self.fetch_visible_by_slug(NEWS_SELECT, "is_published", slug, row_to_news, "find news")
            .await
    }

    async fn find_news_by_id(&self, id: u64) -> Result<Option<News>, DomainError> {
        self.fetch_one_by(NEWS_SELECT, "id", id, row_to_news, "find news").await
    }

    async fn save_news(&self, input: &NewsInput) -> Result<u64, DomainError> {
        match input.id {
            None => {
                let result = sqlx::query(
                    r#"
                        INSERT INTO news (
                            title, slug, excerpt, content, image, category, author,
                            published_at, is_published
                        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                    "#,
                )
                .bind(&input.title)
                .bind(&input.slug)
                .bind(&input.excerpt)
                .bind(&input.content)
                .bind(&input.image)
                .bind(&input.category)
                .bind(&input.author)
                .bind(input.published_at)
                .bind(input.is_published)
                .execute(&self.pool)
                .await
                .map_err(|e| query_error("create news", e))?;

                Ok(result.last_insert_id())
            }
            Some(id) => {
                let result = sqlx::query(
                    r#"
                        UPDATE news
                        SET title = ?, slug = ?, excerpt = ?, content = ?, image = ?,
                            category = ?, author = ?, published_at = ?, is_published = ?
                        WHERE id = ?
                    "#,
                )
                .bind(&input.title)
                .bind(&input.slug)
                .bind(&input.excerpt)
                .bind(&input.content)
                .bind(&input.image)
                .bind(&input.category)
                .bind(&input.author)
                .bind(input.published_at)
                .bind(input.is_published)
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|e| query_error("update news", e))?;

                self.ensure_updated("news", id, result.rows_affected()).await?;
                Ok(id)
            }
        }
    }

    async fn list_solutions(&self, filter: &ListFilter) -> Result<Vec<SolutionRecord>, DomainError> {
        let query = ListQuery::from_filter(SOLUTION_SELECT, "is_active", &filter.without_featured())
            .order_by("title ASC, id ASC");
        self.fetch_list(query, row_to_solution, "list solutions").await
    }

    async fn find_solution_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<SolutionRecord>, DomainError> {
        self.fetch_visible_by_slug(
            SOLUTION_SELECT,
            "is_active",
            slug,
            row_to_solution,
            "find solution",
        )
        .await
    }

    async fn find_solution_by_id(&self, id: u64) -> Result<Option<SolutionRecord>, DomainError> {
        self.fetch_one_by(SOLUTION_SELECT, "id", id, row_to_solution, "find solution")
            .await
    }

    async fn save_solution(&self, input: &SolutionInput) -> Result<u64, DomainError> {
        let features = encode_json(&input.features)?;

        match input.id {
            None => {
                let result = sqlx::query(
                    r#"
                        INSERT INTO solutions (
                            title, slug, summary, content, image, category, features, is_active
                        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
                    "#,
                )
                .bind(&input.title)
                .bind(&input.slug)
                .bind(&input.summary)
                .bind(&input.content)
                .bind(&input.image)
                .bind(&input.category)
                .bind(features)
                .bind(input.is_active)
                .execute(&self.pool)
                .await
                .map_err(|e| query_error("create solution", e))?;

                Ok(result.last_insert_id())
            }
            Some(id) => {
                let result = sqlx::query(
                    r#"
                        UPDATE solutions
                        SET title = ?, slug = ?, summary = ?, content = ?, image = ?,
                            category = ?, features = ?, is_active = ?
                        WHERE id = ?
                    "#,
                )
                .bind(&input.title)
                .bind(&input.slug)
                .bind(&input.summary)
                .bind(&input.content)
                .bind(&input.image)
                .bind(&input.category)
                .bind(features)
                .bind(input.is_active)
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|e| query_error("update solution", e))?;

                self.ensure_updated("solutions", id, result.rows_affected()).await?;
                Ok(id)
            }
        }
    }

    async fn list_case_studies(&self, filter: &ListFilter) -> Result<Vec<CaseStudy>, DomainError> {
        let query =
            ListQuery::from_filter(CASE_STUDY_SELECT, "is_published", &filter.without_featured())
                .order_by("created_at DESC, id DESC");
        self.fetch_list(query, row_to_case_study, "list case studies").await
    }

    async fn list_navigation(&self) -> Result<Vec<NavigationItem>, DomainError> {
        let query = ListQuery::new(NAVIGATION_SELECT)
            .visibility("is_active", true)
            .order_by("position ASC, id ASC");
        self.fetch_list(query, row_to_navigation, "list navigation").await
    }

    async fn list_pages(&self) -> Result<Vec<Page>, DomainError> {
        let query = ListQuery::new(PAGE_SELECT).order_by("title ASC, id ASC");
        self.fetch_list(query, row_to_page, "list pages").await
    }

    async fn insert_contact_request(&self, form: &ContactForm) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
                INSERT INTO contact_submissions (name, email, phone, company, subject, message)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&form.name)
        .bind(&form.email)
        .bind(&form.phone)
        .bind(&form.company)
        .bind(&form.subject)
        .bind(&form.message)
        .execute(&self.pool)
        .await
        .map_err(|e| query_error("store contact request", e))?;

        Ok(result.last_insert_id())
    }

    async fn upsert_newsletter_subscription(&self, email: &str) -> Result<(), DomainError> {
        sqlx::query(
            r#"
                INSERT INTO newsletter_subscriptions (email) VALUES (?)
                ON DUPLICATE KEY UPDATE updated_at = CURRENT_TIMESTAMP
            "#,
        )
        .bind(email)
        .execute(&self.pool)
        .await
        .map_err(|e| query_error("subscribe to newsletter", e))?;

        Ok(())
    }
}
