pub mod content;

pub use content::{ContentRepository, MockContentRepository};
