//! Value objects passed across the repository and service boundaries.

pub mod list_filter;
pub mod write_outcome;

// Re-export commonly used types
pub use list_filter::{ListFilter, DEFAULT_LIST_LIMIT};
pub use write_outcome::WriteOutcome;
