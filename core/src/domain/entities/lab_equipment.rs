//! Laboratory equipment entity (test benches, climate chambers, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use es_shared::json::parse_json_array;

use super::product::SpecEntry;

/// Lab equipment row with the raw `specifications` column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabEquipmentRecord {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub specifications: JsonValue,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LabEquipmentRecord {
    pub fn normalize(self) -> LabEquipment {
        LabEquipment {
            specifications: parse_json_array(&self.specifications),
            id: self.id,
            name: self.name,
            slug: self.slug,
            description: self.description,
            image: self.image,
            category: self.category,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabEquipment {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub specifications: Vec<SpecEntry>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
