//! MySQL repository implementations

mod content_repository_impl;
pub mod rows;

pub use content_repository_impl::MySqlContentRepository;
