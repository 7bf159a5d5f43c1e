//! Product entity and its one-to-one child records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use es_shared::json::parse_json_array;

/// Label/value pair shown in a product's specification table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecEntry {
    pub label: String,
    pub value: String,
}

impl SpecEntry {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Product row as stored, with list columns still in their raw JSON form.
///
/// The list columns may hold a native array, a JSON-encoded string or null
/// depending on which release wrote the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub features: JsonValue,
    pub specifications: JsonValue,
    pub applications: JsonValue,
    pub benefits: JsonValue,
    pub is_featured: bool,
    pub is_active: bool,
    pub price: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductRecord {
    /// Decode list columns, substituting an empty list for anything unreadable
    pub fn normalize(self) -> Product {
        Product {
            features: parse_json_array(&self.features),
            specifications: parse_json_array(&self.specifications),
            applications: parse_json_array(&self.applications),
            benefits: parse_json_array(&self.benefits),
            id: self.id,
            name: self.name,
            slug: self.slug,
            description: self.description,
            image: self.image,
            category: self.category,
            is_featured: self.is_featured,
            is_active: self.is_active,
            price: self.price,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Product as handed to page rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub features: Vec<String>,
    pub specifications: Vec<SpecEntry>,
    pub applications: Vec<String>,
    pub benefits: Vec<String>,
    pub is_featured: bool,
    pub is_active: bool,
    pub price: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Admin create-or-update payload for a product. `id: None` inserts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub id: Option<u64>,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub specifications: Vec<SpecEntry>,
    #[serde(default)]
    pub applications: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub price: Option<Decimal>,
}

/// Detailed specification page content, at most one per product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSpecification {
    pub id: u64,
    pub product_id: u64,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Application showcase content, at most one per product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductApplication {
    pub id: u64,
    pub product_id: u64,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub media_url: Option<String>,
    pub media_type: Option<String>,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Upsert payload shared by specification and application children.
/// `media_*` fields are ignored for specifications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductChildInput {
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub media_url: Option<String>,
    pub media_type: Option<String>,
    pub content: Option<String>,
}

fn default_true() -> bool {
    true
}
