//! Repository trait defining the content store contract.

use async_trait::async_trait;

use crate::domain::entities::{
    CaseStudy, ContactForm, HeroSlide, LabEquipmentRecord, NavigationItem, News, NewsInput,
    Page, ProductApplication, ProductChildInput, ProductInput, ProductRecord,
    ProductSpecification, SolutionInput, SolutionRecord,
};
use crate::domain::value_objects::ListFilter;
use crate::errors::DomainError;

/// Persistence operations behind the content service.
///
/// Every method issues a single statement against the store. Implementations
/// report failures as `DomainError::Database`; deciding whether to mask them
/// with fixture data is the service's job. Lookups return `Ok(None)` when no
/// row matches.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Create tables, add missing columns and seed empty tables
    async fn initialize(&self) -> Result<(), DomainError>;

    // Products

    /// List products ordered newest first
    async fn list_products(&self, filter: &ListFilter) -> Result<Vec<ProductRecord>, DomainError>;

    async fn find_product_by_slug(&self, slug: &str) -> Result<Option<ProductRecord>, DomainError>;

    async fn find_product_by_id(&self, id: u64) -> Result<Option<ProductRecord>, DomainError>;

    /// Insert when `input.id` is `None`, otherwise update. Returns the row id.
    async fn save_product(&self, input: &ProductInput) -> Result<u64, DomainError>;

    /// Soft delete or restore. Returns whether a row was touched.
    async fn set_product_active(&self, id: u64, active: bool) -> Result<bool, DomainError>;

    async fn find_product_specification(
        &self,
        product_id: u64,
    ) -> Result<Option<ProductSpecification>, DomainError>;

    /// Insert or replace the single specification row of a product
    async fn upsert_product_specification(
        &self,
        product_id: u64,
        input: &ProductChildInput,
    ) -> Result<(), DomainError>;

    async fn delete_product_specification(&self, product_id: u64) -> Result<bool, DomainError>;

    async fn find_product_application(
        &self,
        product_id: u64,
    ) -> Result<Option<ProductApplication>, DomainError>;

    /// Insert or replace the single application row of a product
    async fn upsert_product_application(
        &self,
        product_id: u64,
        input: &ProductChildInput,
    ) -> Result<(), DomainError>;

    async fn delete_product_application(&self, product_id: u64) -> Result<bool, DomainError>;

    // Home page

    /// Active slides by ascending position
    async fn list_hero_slides(&self) -> Result<Vec<HeroSlide>, DomainError>;

    // Lab equipment

    async fn list_lab_equipment(
        &self,
        filter: &ListFilter,
    ) -> Result<Vec<LabEquipmentRecord>, DomainError>;

    async fn find_lab_equipment_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<LabEquipmentRecord>, DomainError>;

    async fn find_lab_equipment_by_id(
        &self,
        id: u64,
    ) -> Result<Option<LabEquipmentRecord>, DomainError>;

    // News

    /// `filter.active_only` selects published articles
    async fn list_news(&self, filter: &ListFilter) -> Result<Vec<News>, DomainError>;

    async fn find_news_by_slug(&self, slug: &str) -> Result<Option<News>, DomainError>;

    async fn find_news_by_id(&self, id: u64) -> Result<Option<News>, DomainError>;

    async fn save_news(&self, input: &NewsInput) -> Result<u64, DomainError>;

    // Solutions

    async fn list_solutions(&self, filter: &ListFilter) -> Result<Vec<SolutionRecord>, DomainError>;

    async fn find_solution_by_slug(&self, slug: &str)
        -> Result<Option<SolutionRecord>, DomainError>;

    async fn find_solution_by_id(&self, id: u64) -> Result<Option<SolutionRecord>, DomainError>;

    async fn save_solution(&self, input: &SolutionInput) -> Result<u64, DomainError>;

    // Case studies, navigation, pages

    /// `filter.active_only` selects published case studies
    async fn list_case_studies(&self, filter: &ListFilter) -> Result<Vec<CaseStudy>, DomainError>;

    /// Active navigation rows by ascending position, flat
    async fn list_navigation(&self) -> Result<Vec<NavigationItem>, DomainError>;

    async fn list_pages(&self) -> Result<Vec<Page>, DomainError>;

    // Visitor submissions

    /// Append a contact request, returning its id
    async fn insert_contact_request(&self, form: &ContactForm) -> Result<u64, DomainError>;

    /// Insert the email, or bump `updated_at` if it is already subscribed
    async fn upsert_newsletter_subscription(&self, email: &str) -> Result<(), DomainError>;
}
