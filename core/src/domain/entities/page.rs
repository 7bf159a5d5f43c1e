//! CMS page entity. Page bodies are composed from `content_blocks` rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub content: Option<String>,
    pub meta_description: Option<String>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
