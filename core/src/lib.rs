//! # Site Content Core
//!
//! Domain layer of the content backend: entities, the repository contract,
//! the content service facade and the fixture data it falls back to.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::{DomainError, DomainResult};
pub use repositories::{ContentRepository, MockContentRepository};
pub use services::{ContentService, ContentServiceConfig};
