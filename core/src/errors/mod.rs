//! Domain-specific error types.

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Database access is disabled")]
    DatabaseDisabled,

    /// Connectivity or query failure reported by a repository
    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }
}

impl From<es_shared::validation::ValidationErrors> for DomainError {
    fn from(errors: es_shared::validation::ValidationErrors) -> Self {
        Self::Validation {
            message: errors.summary(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
