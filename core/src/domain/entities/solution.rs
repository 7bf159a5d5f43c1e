//! Solution entity (application scenarios such as peak shaving or microgrids).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use es_shared::json::parse_json_array;

/// Solution row with the raw `features` column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionRecord {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub features: JsonValue,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SolutionRecord {
    pub fn normalize(self) -> Solution {
        Solution {
            features: parse_json_array(&self.features),
            id: self.id,
            title: self.title,
            slug: self.slug,
            summary: self.summary,
            content: self.content,
            image: self.image,
            category: self.category,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub features: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Admin create-or-update payload for a solution. `id: None` inserts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionInput {
    pub id: Option<u64>,
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub is_active: bool,
}
