//! Common utility functions

pub mod json;
pub mod validation;

// Re-export commonly used utilities
pub use json::{parse_json_array, parse_json_array_or, raw_json_from_text};
pub use validation::*;
