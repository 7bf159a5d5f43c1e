//! Content repository module.

mod r#trait;
pub use r#trait::ContentRepository;

mod mock;
pub use mock::MockContentRepository;

#[cfg(test)]
mod tests;
