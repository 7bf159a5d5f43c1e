//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

static SLUG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug pattern is valid"));

/// Validation error with field-level details
#[derive(Debug, Clone, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub code: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: code.into(),
        }
    }
}

/// Collection of validation errors
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>, code: impl Into<String>) {
        self.add(ValidationError::new(field, message, code));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn to_field_errors(&self) -> HashMap<String, Vec<String>> {
        let mut field_errors: HashMap<String, Vec<String>> = HashMap::new();
        for error in &self.errors {
            field_errors
                .entry(error.field.clone())
                .or_default()
                .push(error.message.clone());
        }
        field_errors
    }

    /// Join all messages into one line, e.g. for a write result shown to an admin
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Trait for types that can be validated
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Common validation functions
pub mod validators {
    use super::{EMAIL_REGEX, SLUG_REGEX};

    /// Check if a string is not empty
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string length is within bounds
    pub fn length_between(value: &str, min: usize, max: usize) -> bool {
        let len = value.chars().count();
        len >= min && len <= max
    }

    /// Check if an email address is valid
    pub fn is_valid_email(email: &str) -> bool {
        email.len() <= 255 && EMAIL_REGEX.is_match(email.trim())
    }

    /// Check if a slug is lowercase words joined by single hyphens
    pub fn is_valid_slug(slug: &str) -> bool {
        SLUG_REGEX.is_match(slug)
    }
}

#[cfg(test)]
mod tests {
    use super::validators::*;
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("ops@energy-storage.com"));
        assert!(is_valid_email(" first.last+news@example.co.uk "));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("user@host"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_slug_validation() {
        assert!(is_valid_slug("home-battery-5kwh"));
        assert!(!is_valid_slug("Home Battery"));
        assert!(!is_valid_slug("double--hyphen"));
        assert!(!is_valid_slug("-leading"));
    }

    #[test]
    fn test_errors_summary() {
        let mut errors = ValidationErrors::new();
        assert!(errors.is_empty());
        errors.add_error("email", "Invalid email", "invalid_email");
        errors.add_error("name", "Required", "required");
        assert_eq!(errors.summary(), "email: Invalid email; name: Required");
        assert_eq!(errors.to_field_errors()["email"], vec!["Invalid email"]);
    }
}
