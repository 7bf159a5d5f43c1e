//! Result of an admin or visitor write, shaped for display.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Outcome of a write call. Write errors are reported here instead of being
/// masked, so the admin UI can show them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteOutcome {
    pub success: bool,
    /// Id of the inserted or updated row when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WriteOutcome {
    pub fn ok() -> Self {
        Self {
            success: true,
            id: None,
            error: None,
        }
    }

    pub fn with_id(id: u64) -> Self {
        Self {
            id: Some(id),
            ..Self::ok()
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            id: None,
            error: Some(error.into()),
        }
    }
}

impl From<DomainError> for WriteOutcome {
    fn from(error: DomainError) -> Self {
        Self::failure(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let ok = serde_json::to_value(WriteOutcome::with_id(7)).unwrap();
        assert_eq!(ok, serde_json::json!({"success": true, "id": 7}));

        let failed = serde_json::to_value(WriteOutcome::failure("boom")).unwrap();
        assert_eq!(failed, serde_json::json!({"success": false, "error": "boom"}));
    }

    #[test]
    fn test_from_domain_error() {
        let outcome: WriteOutcome = DomainError::DatabaseDisabled.into();
        assert!(!outcome.success);
        assert_eq!(outcome.error.as_deref(), Some("Database access is disabled"));
    }
}
