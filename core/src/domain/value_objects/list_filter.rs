//! Filter shared by every list-producing read.

use serde::{Deserialize, Serialize};

/// Page size of [`ListFilter::active`], the public list default
pub const DEFAULT_LIST_LIMIT: u32 = 100;

/// Filter for list reads.
///
/// `active_only` maps to `is_active` or `is_published` depending on the entity.
/// With `active_only = false` both active and inactive rows are returned.
/// `limit: None` means no limit at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFilter {
    pub category: Option<String>,
    pub active_only: bool,
    /// Only meaningful for products
    pub featured: Option<bool>,
    pub limit: Option<u32>,
}

impl Default for ListFilter {
    fn default() -> Self {
        Self::active()
    }
}

impl ListFilter {
    /// Active (or published) rows only, first [`DEFAULT_LIST_LIMIT`] of them
    pub fn active() -> Self {
        Self {
            category: None,
            active_only: true,
            featured: None,
            limit: Some(DEFAULT_LIST_LIMIT),
        }
    }

    /// Every row, active and inactive, without a limit
    pub fn all() -> Self {
        Self {
            category: None,
            active_only: false,
            featured: None,
            limit: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_optional_category(mut self, category: Option<&str>) -> Self {
        self.category = category.map(str::to_string);
        self
    }

    pub fn with_featured(mut self, featured: Option<bool>) -> Self {
        self.featured = featured;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Copy of this filter with the featured flag cleared, for entities
    /// without an `is_featured` column
    pub fn without_featured(&self) -> Self {
        Self {
            featured: None,
            ..self.clone()
        }
    }

    /// In-memory equivalent of the SQL filter clauses
    pub fn matches(&self, category: Option<&str>, is_active: bool, is_featured: bool) -> bool {
        if self.active_only && !is_active {
            return false;
        }
        if let Some(wanted) = self.category.as_deref() {
            if category != Some(wanted) {
                return false;
            }
        }
        if let Some(featured) = self.featured {
            if featured != is_featured {
                return false;
            }
        }
        true
    }

    /// Truncate an already filtered list to the limit
    pub fn take<T>(&self, mut items: Vec<T>) -> Vec<T> {
        if let Some(limit) = self.limit {
            items.truncate(limit as usize);
        }
        items
    }
}
