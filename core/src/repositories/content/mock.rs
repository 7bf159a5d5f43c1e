//! In-memory implementation of ContentRepository for testing.
//!
//! Mirrors the SQL semantics that matter to the service: list filters, slug
//! uniqueness, one child row per product and newsletter upserts keyed on email.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value as JsonValue;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::entities::{
    CaseStudy, ContactForm, ContactRequest, HeroSlide, LabEquipmentRecord, NavigationItem, News,
    NewsInput, NewsletterSubscription, Page, ProductApplication, ProductChildInput, ProductInput,
    ProductRecord, ProductSpecification, SolutionInput, SolutionRecord,
};
use crate::domain::value_objects::ListFilter;
use crate::errors::DomainError;

use super::ContentRepository;

#[derive(Default)]
struct State {
    products: Vec<ProductRecord>,
    specifications: Vec<ProductSpecification>,
    applications: Vec<ProductApplication>,
    hero_slides: Vec<HeroSlide>,
    lab_equipment: Vec<LabEquipmentRecord>,
    news: Vec<News>,
    solutions: Vec<SolutionRecord>,
    case_studies: Vec<CaseStudy>,
    navigation: Vec<NavigationItem>,
    pages: Vec<Page>,
    contact_requests: Vec<ContactRequest>,
    newsletter: Vec<NewsletterSubscription>,
    next_id: u64,
    initialized: bool,
}

impl State {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Mock implementation of ContentRepository for testing
pub struct MockContentRepository {
    state: Arc<Mutex<State>>,
    should_fail: Arc<Mutex<bool>>,
}

impl MockContentRepository {
    /// Create a new, empty mock repository
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                next_id: 1000,
                ..State::default()
            })),
            should_fail: Arc::new(Mutex::new(false)),
        }
    }

    /// Set whether operations should fail
    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.lock().unwrap() = should_fail;
    }

    pub fn insert_product(&self, product: ProductRecord) {
        self.state().products.push(product);
    }

    pub fn insert_news(&self, news: News) {
        self.state().news.push(news);
    }

    pub fn insert_solution(&self, solution: SolutionRecord) {
        self.state().solutions.push(solution);
    }

    pub fn insert_lab_equipment(&self, equipment: LabEquipmentRecord) {
        self.state().lab_equipment.push(equipment);
    }

    pub fn insert_case_study(&self, case_study: CaseStudy) {
        self.state().case_studies.push(case_study);
    }

    pub fn insert_hero_slide(&self, slide: HeroSlide) {
        self.state().hero_slides.push(slide);
    }

    pub fn insert_navigation(&self, item: NavigationItem) {
        self.state().navigation.push(item);
    }

    pub fn insert_page(&self, page: Page) {
        self.state().pages.push(page);
    }

    /// Stored newsletter rows
    pub fn newsletter_subscriptions(&self) -> Vec<NewsletterSubscription> {
        self.state().newsletter.clone()
    }

    /// Stored contact requests
    pub fn contact_requests(&self) -> Vec<ContactRequest> {
        self.state().contact_requests.clone()
    }

    pub fn is_initialized(&self) -> bool {
        self.state().initialized
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    fn check(&self) -> Result<(), DomainError> {
        if *self.should_fail.lock().unwrap() {
            return Err(DomainError::database("Mock repository error"));
        }
        Ok(())
    }
}

impl Default for MockContentRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn json_list<T: serde::Serialize>(items: &[T]) -> JsonValue {
    serde_json::to_value(items).unwrap_or(JsonValue::Null)
}

#[async_trait]
impl ContentRepository for MockContentRepository {
    async fn initialize(&self) -> Result<(), DomainError> {
        self.check()?;
        self.state().initialized = true;
        Ok(())
    }

    async fn list_products(&self, filter: &ListFilter) -> Result<Vec<ProductRecord>, DomainError> {
        self.check()?;
        let state = self.state();
        let mut result: Vec<ProductRecord> = state
            .products
            .iter()
            .filter(|p| filter.matches(p.category.as_deref(), p.is_active, p.is_featured))
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(filter.take(result))
    }

    async fn find_product_by_slug(&self, slug: &str) -> Result<Option<ProductRecord>, DomainError> {
        self.check()?;
        Ok(self.state().products.iter().find(|p| p.slug == slug && p.is_active).cloned())
    }

    async fn find_product_by_id(&self, id: u64) -> Result<Option<ProductRecord>, DomainError> {
        self.check()?;
        Ok(self.state().products.iter().find(|p| p.id == id).cloned())
    }

    async fn save_product(&self, input: &ProductInput) -> Result<u64, DomainError> {
        self.check()?;
        let mut state = self.state();
        if state
            .products
            .iter()
            .any(|p| p.slug == input.slug && Some(p.id) != input.id)
        {
            return Err(DomainError::database(format!(
                "Duplicate entry '{}' for key 'slug'",
                input.slug
            )));
        }

        let now = Utc::now();
        let id = match input.id {
            Some(id) => id,
            None => state.next_id(),
        };
        let record = ProductRecord {
            id,
            name: input.name.clone(),
            slug: input.slug.clone(),
            description: input.description.clone(),
            image: input.image.clone(),
            category: input.category.clone(),
            features: json_list(&input.features),
            specifications: json_list(&input.specifications),
            applications: json_list(&input.applications),
            benefits: json_list(&input.benefits),
            is_featured: input.is_featured,
            is_active: input.is_active,
            price: input.price,
            created_at: now,
            updated_at: now,
        };

        match state.products.iter_mut().find(|p| p.id == id) {
            Some(existing) => {
                let created_at = existing.created_at;
                *existing = ProductRecord { created_at, ..record };
            }
            None if input.id.is_some() => {
                return Err(DomainError::not_found(format!("product {}", id)));
            }
            None => state.products.push(record),
        }
        Ok(id)
    }

    async fn set_product_active(&self, id: u64, active: bool) -> Result<bool, DomainError> {
        self.check()?;
        let mut state = self.state();
        match state.products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                product.is_active = active;
                product.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_product_specification(
        &self,
        product_id: u64,
    ) -> Result<Option<ProductSpecification>, DomainError> {
        self.check()?;
        Ok(self
            .state()
            .specifications
            .iter()
            .find(|s| s.product_id == product_id)
            .cloned())
    }

    async fn upsert_product_specification(
        &self,
        product_id: u64,
        input: &ProductChildInput,
    ) -> Result<(), DomainError> {
        self.check()?;
        let mut state = self.state();
        if !state.products.iter().any(|p| p.id == product_id) {
            return Err(DomainError::database(format!(
                "Foreign key constraint fails for product {}",
                product_id
            )));
        }
        let now = Utc::now();
        match state
            .specifications
            .iter_mut()
            .find(|s| s.product_id == product_id)
        {
            Some(existing) => {
                existing.title = input.title.clone();
                existing.description = input.description.clone();
                existing.image = input.image.clone();
                existing.content = input.content.clone();
                existing.updated_at = now;
            }
            None => {
                let id = state.next_id();
                state.specifications.push(ProductSpecification {
                    id,
                    product_id,
                    title: input.title.clone(),
                    description: input.description.clone(),
                    image: input.image.clone(),
                    content: input.content.clone(),
                    created_at: now,
                    updated_at: now,
                });
            }
        }
        Ok(())
    }

    async fn delete_product_specification(&self, product_id: u64) -> Result<bool, DomainError> {
        self.check()?;
        let mut state = self.state();
        let before = state.specifications.len();
        state.specifications.retain(|s| s.product_id != product_id);
        Ok(state.specifications.len() < before)
    }

    async fn find_product_application(
        &self,
        product_id: u64,
    ) -> Result<Option<ProductApplication>, DomainError> {
        self.check()?;
        Ok(self
            .state()
            .applications
            .iter()
            .find(|a| a.product_id == product_id)
            .cloned())
    }

    async fn upsert_product_application(
        &self,
        product_id: u64,
        input: &ProductChildInput,
    ) -> Result<(), DomainError> {
        self.check()?;
        let mut state = self.state();
        if !state.products.iter().any(|p| p.id == product_id) {
            return Err(DomainError::database(format!(
                "Foreign key constraint fails for product {}",
                product_id
            )));
        }
        let now = Utc::now();
        match state
            .applications
            .iter_mut()
            .find(|a| a.product_id == product_id)
        {
            Some(existing) => {
                existing.title = input.title.clone();
                existing.description = input.description.clone();
                existing.image = input.image.clone();
                existing.media_url = input.media_url.clone();
                existing.media_type = input.media_type.clone();
                existing.content = input.content.clone();
                existing.updated_at = now;
            }
            None => {
                let id = state.next_id();
                state.applications.push(ProductApplication {
                    id,
                    product_id,
                    title: input.title.clone(),
                    description: input.description.clone(),
                    image: input.image.clone(),
                    media_url: input.media_url.clone(),
                    media_type: input.media_type.clone(),
                    content: input.content.clone(),
                    created_at: now,
                    updated_at: now,
                });
            }
        }
        Ok(())
    }

    async fn delete_product_application(&self, product_id: u64) -> Result<bool, DomainError> {
        self.check()?;
        let mut state = self.state();
        let before = state.applications.len();
        state.applications.retain(|a| a.product_id != product_id);
        Ok(state.applications.len() < before)
    }

    async fn list_hero_slides(&self) -> Result<Vec<HeroSlide>, DomainError> {
        self.check()?;
        let mut slides: Vec<HeroSlide> = self
            .state()
            .hero_slides
            .iter()
            .filter(|s| s.is_active)
            .cloned()
            .collect();
        slides.sort_by_key(|s| s.position);
        Ok(slides)
    }

    async fn list_lab_equipment(
        &self,
        filter: &ListFilter,
    ) -> Result<Vec<LabEquipmentRecord>, DomainError> {
        self.check()?;
        let scope = filter.without_featured();
        let result: Vec<LabEquipmentRecord> = self
            .state()
            .lab_equipment
            .iter()
            .filter(|e| scope.matches(e.category.as_deref(), e.is_active, false))
            .cloned()
            .collect();
        Ok(filter.take(result))
    }

    async fn find_lab_equipment_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<LabEquipmentRecord>, DomainError> {
        self.check()?;
        Ok(self.state().lab_equipment.iter().find(|e| e.slug == slug && e.is_active).cloned())
    }

    async fn find_lab_equipment_by_id(
        &self,
        id: u64,
    ) -> Result<Option<LabEquipmentRecord>, DomainError> {
        self.check()?;
        Ok(self.state().lab_equipment.iter().find(|e| e.id == id).cloned())
    }

    async fn list_news(&self, filter: &ListFilter) -> Result<Vec<News>, DomainError> {
        self.check()?;
        let scope = filter.without_featured();
        let mut result: Vec<News> = self
            .state()
            .news
            .iter()
            .filter(|n| scope.matches(n.category.as_deref(), n.is_published, false))
            .cloned()
            .collect();
        result.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(filter.take(result))
    }

    async fn find_news_by_slug(&self, slug: &str) -> Result<Option<News>, DomainError> {
        self.check()?;
        Ok(self.state().news.iter().find(|n| n.slug == slug && n.is_published).cloned())
    }

    async fn find_news_by_id(&self, id: u64) -> Result<Option<News>, DomainError> {
        self.check()?;
        Ok(self.state().news.iter().find(|n| n.id == id).cloned())
    }

    async fn save_news(&self, input: &NewsInput) -> Result<u64, DomainError> {
        self.check()?;
        let mut state = self.state();
        let now = Utc::now();
        let id = match input.id {
            Some(id) => id,
            None => state.next_id(),
        };
        let article = News {
            id,
            title: input.title.clone(),
            slug: input.slug.clone(),
            excerpt: input.excerpt.clone(),
            content: input.content.clone(),
            image: input.image.clone(),
            category: input.category.clone(),
            author: input.author.clone(),
            published_at: input.published_at,
            is_published: input.is_published,
            created_at: now,
            updated_at: now,
        };
        match state.news.iter_mut().find(|n| n.id == id) {
            Some(existing) => {
                let created_at = existing.created_at;
                *existing = News { created_at, ..article };
            }
            None if input.id.is_some() => {
                return Err(DomainError::not_found(format!("news {}", id)));
            }
            None => state.news.push(article),
        }
        Ok(id)
    }

    async fn list_solutions(&self, filter: &ListFilter) -> Result<Vec<SolutionRecord>, DomainError> {
        self.check()?;
        let scope = filter.without_featured();
        let result: Vec<SolutionRecord> = self
            .state()
            .solutions
            .iter()
            .filter(|s| scope.matches(s.category.as_deref(), s.is_active, false))
            .cloned()
            .collect();
        Ok(filter.take(result))
    }

    async fn find_solution_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<SolutionRecord>, DomainError> {
        self.check()?;
        Ok(self.state().solutions.iter().find(|s| s.slug == slug && s.is_active).cloned())
    }

    async fn find_solution_by_id(&self, id: u64) -> Result<Option<SolutionRecord>, DomainError> {
        self.check()?;
        Ok(self.state().solutions.iter().find(|s| s.id == id).cloned())
    }

    async fn save_solution(&self, input: &SolutionInput) -> Result<u64, DomainError> {
        self.check()?;
        let mut state = self.state();
        let now = Utc::now();
        let id = match input.id {
            Some(id) => id,
            None => state.next_id(),
        };
        let solution = SolutionRecord {
            id,
            title: input.title.clone(),
            slug: input.slug.clone(),
            summary: input.summary.clone(),
            content: input.content.clone(),
            image: input.image.clone(),
            category: input.category.clone(),
            features: json_list(&input.features),
            is_active: input.is_active,
            created_at: now,
            updated_at: now,
        };
        match state.solutions.iter_mut().find(|s| s.id == id) {
            Some(existing) => {
                let created_at = existing.created_at;
                *existing = SolutionRecord { created_at, ..solution };
            }
            None if input.id.is_some() => {
                return Err(DomainError::not_found(format!("solution {}", id)));
            }
            None => state.solutions.push(solution),
        }
        Ok(id)
    }

    async fn list_case_studies(&self, filter: &ListFilter) -> Result<Vec<CaseStudy>, DomainError> {
        self.check()?;
        let scope = filter.without_featured();
        let result: Vec<CaseStudy> = self
            .state()
            .case_studies
            .iter()
            .filter(|c| scope.matches(c.category.as_deref(), c.is_published, false))
            .cloned()
            .collect();
        Ok(filter.take(result))
    }

    async fn list_navigation(&self) -> Result<Vec<NavigationItem>, DomainError> {
        self.check()?;
        let mut items: Vec<NavigationItem> = self
            .state()
            .navigation
            .iter()
            .filter(|n| n.is_active)
            .cloned()
            .collect();
        items.sort_by_key(|n| n.position);
        Ok(items)
    }

    async fn list_pages(&self) -> Result<Vec<Page>, DomainError> {
        self.check()?;
        Ok(self.state().pages.clone())
    }

    async fn insert_contact_request(&self, form: &ContactForm) -> Result<u64, DomainError> {
        self.check()?;
        let mut state = self.state();
        let id = state.next_id();
        state.contact_requests.push(ContactRequest {
            id,
            name: form.name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            company: form.company.clone(),
            subject: form.subject.clone(),
            message: form.message.clone(),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn upsert_newsletter_subscription(&self, email: &str) -> Result<(), DomainError> {
        self.check()?;
        let mut state = self.state();
        let now = Utc::now();
        match state.newsletter.iter_mut().find(|s| s.email == email) {
            Some(existing) => existing.updated_at = now,
            None => {
                let id = state.next_id();
                state.newsletter.push(NewsletterSubscription {
                    id,
                    email: email.to_string(),
                    subscribed_at: now,
                    updated_at: now,
                });
            }
        }
        Ok(())
    }
}
