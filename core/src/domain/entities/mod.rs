//! Content entities, one module per table family.

pub mod case_study;
pub mod hero_slide;
pub mod lab_equipment;
pub mod navigation;
pub mod news;
pub mod page;
pub mod product;
pub mod solution;
pub mod submission;

// Re-export commonly used types
pub use case_study::CaseStudy;
pub use hero_slide::HeroSlide;
pub use lab_equipment::{LabEquipment, LabEquipmentRecord};
pub use navigation::{NavigationItem, NavigationNode};
pub use news::{News, NewsInput};
pub use page::Page;
pub use product::{
    Product, ProductApplication, ProductChildInput, ProductInput, ProductRecord,
    ProductSpecification, SpecEntry,
};
pub use solution::{Solution, SolutionInput, SolutionRecord};
pub use submission::{ContactForm, ContactRequest, NewsletterSubscription};
