//! Shared utilities and common types for the site content backend
//!
//! This crate provides functionality used by both the domain and the
//! infrastructure crates:
//! - Configuration types (database, environment, logging)
//! - Defensive JSON list decoding
//! - Input validators

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DatabaseConfig, Environment, LogFormat, LoggingConfig};
pub use utils::{json, validation};
