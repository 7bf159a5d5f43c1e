//! Append-only visitor submissions: contact requests and newsletter signups.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use es_shared::validation::{validators, Validate, ValidationErrors};

/// Contact form payload as posted by a visitor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub subject: Option<String>,
    pub message: String,
}

impl ContactForm {
    /// Trim surrounding whitespace and drop empty optional fields
    pub fn normalized(mut self) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_lowercase();
        self.message = self.message.trim().to_string();
        self.phone = clean(self.phone);
        self.company = clean(self.company);
        self.subject = clean(self.subject);
        self
    }
}

impl Validate for ContactForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if !validators::not_empty(&self.name) {
            errors.add_error("name", "Name is required", "required");
        } else if !validators::length_between(&self.name, 1, 255) {
            errors.add_error("name", "Name is too long", "too_long");
        }
        if !validators::is_valid_email(&self.email) {
            errors.add_error("email", "A valid email address is required", "invalid_email");
        }
        if !validators::not_empty(&self.message) {
            errors.add_error("message", "Message is required", "required");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Stored contact request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Newsletter signup. `email` is unique; re-subscribing bumps `updated_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterSubscription {
    pub id: u64,
    pub email: String,
    pub subscribed_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
