//! Content service facade used by page rendering and admin forms.
//!
//! Reads never fail: when the database is disabled, or a query errors, the
//! service logs a warning and serves the built-in fixture data instead. Writes
//! report failures through [`WriteOutcome`] so the admin UI can show them.

use std::future::Future;
use std::sync::Arc;

use es_shared::config::DatabaseConfig;
use es_shared::validation::validators;
use es_shared::validation::Validate;

use crate::domain::entities::{
    CaseStudy, ContactForm, HeroSlide, LabEquipment, LabEquipmentRecord, NavigationNode, News,
    NewsInput, Page, Product, ProductApplication, ProductChildInput, ProductInput, ProductRecord,
    ProductSpecification, Solution, SolutionInput, SolutionRecord,
};
use crate::domain::value_objects::{ListFilter, WriteOutcome};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::ContentRepository;

use super::fixtures;
use super::navigation::build_navigation_tree;

/// Configuration for the content service
#[derive(Debug, Clone)]
pub struct ContentServiceConfig {
    /// When false no query is issued and every read returns fixture data
    pub use_database: bool,
}

impl Default for ContentServiceConfig {
    fn default() -> Self {
        Self { use_database: true }
    }
}

impl From<&DatabaseConfig> for ContentServiceConfig {
    fn from(config: &DatabaseConfig) -> Self {
        Self {
            use_database: config.use_database,
        }
    }
}

/// Typed read/write operations over the site content
pub struct ContentService<R>
where
    R: ContentRepository,
{
    repository: Option<Arc<R>>,
    config: ContentServiceConfig,
}

impl<R> Clone for ContentService<R>
where
    R: ContentRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            config: self.config.clone(),
        }
    }
}

impl<R> ContentService<R>
where
    R: ContentRepository,
{
    /// Create a service backed by the given repository
    pub fn new(repository: Arc<R>, config: ContentServiceConfig) -> Self {
        Self {
            repository: Some(repository),
            config,
        }
    }

    /// Create a service that only ever serves fixture data
    pub fn without_database() -> Self {
        Self {
            repository: None,
            config: ContentServiceConfig {
                use_database: false,
            },
        }
    }

    pub fn is_database_enabled(&self) -> bool {
        self.config.use_database && self.repository.is_some()
    }

    fn live_repository(&self) -> Option<&R> {
        if self.config.use_database {
            self.repository.as_deref()
        } else {
            None
        }
    }

    /// Run `live` against the repository, or produce `fixture` when the
    /// database is disabled or the query fails.
    async fn with_fallback<'r, T, Fut>(
        &'r self,
        operation: &'static str,
        live: impl FnOnce(&'r R) -> Fut,
        fixture: impl FnOnce() -> T,
    ) -> T
    where
        Fut: Future<Output = DomainResult<T>>,
    {
        let Some(repository) = self.live_repository() else {
            tracing::debug!("{}: database disabled, serving fixture data", operation);
            return fixture();
        };

        match live(repository).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("{} failed, serving fixture data: {}", operation, e);
                fixture()
            }
        }
    }

    /// Run a write against the repository. Errors are logged and returned.
    async fn write<'r, T, Fut>(
        &'r self,
        operation: &'static str,
        live: impl FnOnce(&'r R) -> Fut,
    ) -> DomainResult<T>
    where
        Fut: Future<Output = DomainResult<T>>,
    {
        let repository = self
            .live_repository()
            .ok_or(DomainError::DatabaseDisabled)?;

        live(repository).await.map_err(|e| {
            tracing::error!("{} failed: {}", operation, e);
            e
        })
    }

    /// Create tables, add missing columns and seed empty tables.
    ///
    /// Returns false when the database is disabled or initialization failed;
    /// reads keep working from fixtures either way.
    pub async fn initialize(&self) -> bool {
        let Some(repository) = self.live_repository() else {
            tracing::info!("Database disabled; content will be served from fixtures");
            return false;
        };

        match repository.initialize().await {
            Ok(()) => {
                tracing::info!("Content database initialized");
                true
            }
            Err(e) => {
                tracing::warn!("Content database initialization failed: {}", e);
                false
            }
        }
    }

    // ---------------------------------------------------------------------
    // Products
    // ---------------------------------------------------------------------

    /// Active products, optionally narrowed by category and featured flag
    pub async fn get_products(
        &self,
        category: Option<&str>,
        limit: u32,
        featured: Option<bool>,
    ) -> Vec<Product> {
        let filter = ListFilter::active()
            .with_optional_category(category)
            .with_featured(featured)
            .with_limit(limit);
        self.list_products(&filter).await
    }

    pub async fn list_products(&self, filter: &ListFilter) -> Vec<Product> {
        self.with_fallback(
            "get_products",
            |repo| async move {
                let rows = repo.list_products(filter).await?;
                Ok::<_, DomainError>(rows.into_iter().map(ProductRecord::normalize).collect())
            },
            || {
                filter.take(
                    fixtures::products()
                        .into_iter()
                        .filter(|p| filter.matches(p.category.as_deref(), p.is_active, p.is_featured))
                        .collect(),
                )
            },
        )
        .await
    }

    /// Active and inactive products, for the admin list
    pub async fn get_all_products(&self) -> Vec<Product> {
        self.list_products(&ListFilter::all()).await
    }

    pub async fn get_product_by_slug(&self, slug: &str) -> Option<Product> {
        self.with_fallback(
            "get_product_by_slug",
            |repo| async move {
                let row = repo.find_product_by_slug(slug).await?;
                Ok::<_, DomainError>(row.map(ProductRecord::normalize))
            },
            || {
                fixtures::products()
                    .into_iter()
                    .find(|p| p.slug == slug && p.is_active)
            },
        )
        .await
    }

    pub async fn get_product_by_id(&self, id: u64) -> Option<Product> {
        self.with_fallback(
            "get_product_by_id",
            |repo| async move {
                let row = repo.find_product_by_id(id).await?;
                Ok::<_, DomainError>(row.map(ProductRecord::normalize))
            },
            || fixtures::products().into_iter().find(|p| p.id == id),
        )
        .await
    }

    /// Create (`input.id == None`) or update a product
    pub async fn save_product(&self, input: ProductInput) -> WriteOutcome {
        if let Err(message) = check_title_and_slug("name", &input.name, &input.slug) {
            return WriteOutcome::failure(message);
        }
        match self.write("save_product", |repo| repo.save_product(&input)).await {
            Ok(id) => WriteOutcome::with_id(id),
            Err(e) => e.into(),
        }
    }

    /// Soft delete (`active = false`) or restore a product
    pub async fn set_product_active(&self, id: u64, active: bool) -> WriteOutcome {
        match self
            .write("set_product_active", |repo| repo.set_product_active(id, active))
            .await
        {
            Ok(true) => WriteOutcome::with_id(id),
            Ok(false) => DomainError::not_found(format!("product {}", id)).into(),
            Err(e) => e.into(),
        }
    }

    pub async fn get_product_specification(&self, product_id: u64) -> Option<ProductSpecification> {
        self.with_fallback(
            "get_product_specification",
            |repo| repo.find_product_specification(product_id),
            || None,
        )
        .await
    }

    pub async fn upsert_product_specification(
        &self,
        product_id: u64,
        input: ProductChildInput,
    ) -> WriteOutcome {
        if !validators::not_empty(&input.title) {
            return WriteOutcome::failure("title: Title is required");
        }
        match self
            .write("upsert_product_specification", |repo| {
                repo.upsert_product_specification(product_id, &input)
            })
            .await
        {
            Ok(()) => WriteOutcome::ok(),
            Err(e) => e.into(),
        }
    }

    pub async fn delete_product_specification(&self, product_id: u64) -> WriteOutcome {
        match self
            .write("delete_product_specification", |repo| {
                repo.delete_product_specification(product_id)
            })
            .await
        {
            Ok(_) => WriteOutcome::ok(),
            Err(e) => e.into(),
        }
    }

    pub async fn get_product_application(&self, product_id: u64) -> Option<ProductApplication> {
        self.with_fallback(
            "get_product_application",
            |repo| repo.find_product_application(product_id),
            || None,
        )
        .await
    }

    pub async fn upsert_product_application(
        &self,
        product_id: u64,
        input: ProductChildInput,
    ) -> WriteOutcome {
        if !validators::not_empty(&input.title) {
            return WriteOutcome::failure("title: Title is required");
        }
        match self
            .write("upsert_product_application", |repo| {
                repo.upsert_product_application(product_id, &input)
            })
            .await
        {
            Ok(()) => WriteOutcome::ok(),
            Err(e) => e.into(),
        }
    }

    pub async fn delete_product_application(&self, product_id: u64) -> WriteOutcome {
        match self
            .write("delete_product_application", |repo| {
                repo.delete_product_application(product_id)
            })
            .await
        {
            Ok(_) => WriteOutcome::ok(),
            Err(e) => e.into(),
        }
    }

    // ---------------------------------------------------------------------
    // Home page, lab, news, solutions, case studies
    // ---------------------------------------------------------------------

    pub async fn get_hero_slides(&self) -> Vec<HeroSlide> {
        self.with_fallback(
            "get_hero_slides",
            |repo| repo.list_hero_slides(),
            fixtures::hero_slides,
        )
        .await
    }

    pub async fn get_lab_equipment(&self, filter: &ListFilter) -> Vec<LabEquipment> {
        self.with_fallback(
            "get_lab_equipment",
            |repo| async move {
                let rows = repo.list_lab_equipment(filter).await?;
                Ok::<_, DomainError>(rows.into_iter().map(LabEquipmentRecord::normalize).collect())
            },
            || {
                let scope = filter.without_featured();
                filter.take(
                    fixtures::lab_equipment()
                        .into_iter()
                        .filter(|e| scope.matches(e.category.as_deref(), e.is_active, false))
                        .collect(),
                )
            },
        )
        .await
    }

    pub async fn get_lab_equipment_by_slug(&self, slug: &str) -> Option<LabEquipment> {
        self.with_fallback(
            "get_lab_equipment_by_slug",
            |repo| async move {
                let row = repo.find_lab_equipment_by_slug(slug).await?;
                Ok::<_, DomainError>(row.map(LabEquipmentRecord::normalize))
            },
            || {
                fixtures::lab_equipment()
                    .into_iter()
                    .find(|e| e.slug == slug && e.is_active)
            },
        )
        .await
    }

    pub async fn get_lab_equipment_by_id(&self, id: u64) -> Option<LabEquipment> {
        self.with_fallback(
            "get_lab_equipment_by_id",
            |repo| async move {
                let row = repo.find_lab_equipment_by_id(id).await?;
                Ok::<_, DomainError>(row.map(LabEquipmentRecord::normalize))
            },
            || fixtures::lab_equipment().into_iter().find(|e| e.id == id),
        )
        .await
    }

    /// `filter.active_only` selects published articles
    pub async fn get_news(&self, filter: &ListFilter) -> Vec<News> {
        self.with_fallback(
            "get_news",
            |repo| repo.list_news(filter),
            || {
                let scope = filter.without_featured();
                filter.take(
                    fixtures::news()
                        .into_iter()
                        .filter(|n| scope.matches(n.category.as_deref(), n.is_published, false))
                        .collect(),
                )
            },
        )
        .await
    }

    /// Published and draft articles, for the admin list
    pub async fn get_all_news(&self) -> Vec<News> {
        self.get_news(&ListFilter::all()).await
    }

    pub async fn get_news_by_slug(&self, slug: &str) -> Option<News> {
        self.with_fallback(
            "get_news_by_slug",
            |repo| repo.find_news_by_slug(slug),
            || {
                fixtures::news()
                    .into_iter()
                    .find(|n| n.slug == slug && n.is_published)
            },
        )
        .await
    }

    pub async fn get_news_by_id(&self, id: u64) -> Option<News> {
        self.with_fallback(
            "get_news_by_id",
            |repo| repo.find_news_by_id(id),
            || fixtures::news().into_iter().find(|n| n.id == id),
        )
        .await
    }

    pub async fn save_news(&self, input: NewsInput) -> WriteOutcome {
        if let Err(message) = check_title_and_slug("title", &input.title, &input.slug) {
            return WriteOutcome::failure(message);
        }
        match self.write("save_news", |repo| repo.save_news(&input)).await {
            Ok(id) => WriteOutcome::with_id(id),
            Err(e) => e.into(),
        }
    }

    pub async fn get_solutions(&self, filter: &ListFilter) -> Vec<Solution> {
        self.with_fallback(
            "get_solutions",
            |repo| async move {
                let rows = repo.list_solutions(filter).await?;
                Ok::<_, DomainError>(rows.into_iter().map(SolutionRecord::normalize).collect())
            },
            || {
                let scope = filter.without_featured();
                filter.take(
                    fixtures::solutions()
                        .into_iter()
                        .filter(|s| scope.matches(s.category.as_deref(), s.is_active, false))
                        .collect(),
                )
            },
        )
        .await
    }

    pub async fn get_solution_by_slug(&self, slug: &str) -> Option<Solution> {
        self.with_fallback(
            "get_solution_by_slug",
            |repo| async move {
                let row = repo.find_solution_by_slug(slug).await?;
                Ok::<_, DomainError>(row.map(SolutionRecord::normalize))
            },
            || {
                fixtures::solutions()
                    .into_iter()
                    .find(|s| s.slug == slug && s.is_active)
            },
        )
        .await
    }

    pub async fn get_solution_by_id(&self, id: u64) -> Option<Solution> {
        self.with_fallback(
            "get_solution_by_id",
            |repo| async move {
                let row = repo.find_solution_by_id(id).await?;
                Ok::<_, DomainError>(row.map(SolutionRecord::normalize))
            },
            || fixtures::solutions().into_iter().find(|s| s.id == id),
        )
        .await
    }

    pub async fn save_solution(&self, input: SolutionInput) -> WriteOutcome {
        if let Err(message) = check_title_and_slug("title", &input.title, &input.slug) {
            return WriteOutcome::failure(message);
        }
        match self.write("save_solution", |repo| repo.save_solution(&input)).await {
            Ok(id) => WriteOutcome::with_id(id),
            Err(e) => e.into(),
        }
    }

    /// `filter.active_only` selects published case studies
    pub async fn get_case_studies(&self, filter: &ListFilter) -> Vec<CaseStudy> {
        self.with_fallback(
            "get_case_studies",
            |repo| repo.list_case_studies(filter),
            || {
                let scope = filter.without_featured();
                filter.take(
                    fixtures::case_studies()
                        .into_iter()
                        .filter(|c| scope.matches(c.category.as_deref(), c.is_published, false))
                        .collect(),
                )
            },
        )
        .await
    }

    // ---------------------------------------------------------------------
    // Navigation and pages
    // ---------------------------------------------------------------------

    /// Menu tree assembled from the flat navigation rows
    pub async fn get_navigation(&self) -> Vec<NavigationNode> {
        let items = self
            .with_fallback(
                "get_navigation",
                |repo| repo.list_navigation(),
                fixtures::navigation_items,
            )
            .await;
        build_navigation_tree(items)
    }

    pub async fn get_all_pages(&self) -> Vec<Page> {
        self.with_fallback("get_all_pages", |repo| repo.list_pages(), fixtures::pages)
            .await
    }

    // ---------------------------------------------------------------------
    // Visitor submissions
    // ---------------------------------------------------------------------

    pub async fn submit_contact_form(&self, form: ContactForm) -> WriteOutcome {
        let form = form.normalized();
        if let Err(errors) = form.validate() {
            return DomainError::from(errors).into();
        }

        match self
            .write("submit_contact_form", |repo| repo.insert_contact_request(&form))
            .await
        {
            Ok(id) => {
                tracing::info!("Contact request {} stored", id);
                WriteOutcome::with_id(id)
            }
            Err(e) => e.into(),
        }
    }

    /// Subscribe an email; subscribing again refreshes the existing row
    pub async fn subscribe_to_newsletter(&self, email: &str) -> WriteOutcome {
        let email = email.trim().to_lowercase();
        if !validators::is_valid_email(&email) {
            return WriteOutcome::failure("email: A valid email address is required");
        }

        match self
            .write("subscribe_to_newsletter", |repo| {
                repo.upsert_newsletter_subscription(&email)
            })
            .await
        {
            Ok(()) => WriteOutcome::ok(),
            Err(e) => e.into(),
        }
    }
}

fn check_title_and_slug(title_field: &str, title: &str, slug: &str) -> Result<(), String> {
    if !validators::not_empty(title) {
        return Err(format!("{}: {} is required", title_field, capitalize(title_field)));
    }
    if !validators::is_valid_slug(slug) {
        return Err(format!("slug: '{}' is not a valid slug", slug));
    }
    Ok(())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
