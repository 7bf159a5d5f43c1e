//! List query composition.
//!
//! Every list read follows the same shape: a fixed select, an optional
//! visibility flag, optional category and featured filters, an ordering and an
//! optional limit. Filter values are always bound through `push_bind`; only the
//! static column and ordering fragments are pushed as SQL text.

use sqlx::{MySql, QueryBuilder};

use es_core::domain::value_objects::ListFilter;

/// Builder for filtered list selects
#[derive(Debug, Clone)]
pub struct ListQuery {
    select: &'static str,
    visibility_column: Option<&'static str>,
    visible_only: bool,
    category: Option<String>,
    featured: Option<bool>,
    order_by: &'static str,
    limit: Option<u32>,
}

impl ListQuery {
    /// Start from a `SELECT ... FROM table` fragment without a `WHERE`
    pub fn new(select: &'static str) -> Self {
        Self {
            select,
            visibility_column: None,
            visible_only: false,
            category: None,
            featured: None,
            order_by: "id ASC",
            limit: None,
        }
    }

    /// Build from a [`ListFilter`]. `visibility_column` is the boolean column
    /// `filter.active_only` applies to (`is_active` or `is_published`).
    pub fn from_filter(
        select: &'static str,
        visibility_column: &'static str,
        filter: &ListFilter,
    ) -> Self {
        let mut query = Self::new(select).visibility(visibility_column, filter.active_only);

        if let Some(category) = &filter.category {
            query = query.category(category.clone());
        }
        if let Some(featured) = filter.featured {
            query = query.featured(featured);
        }
        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }
        query
    }

    pub fn visibility(mut self, column: &'static str, visible_only: bool) -> Self {
        self.visibility_column = Some(column);
        self.visible_only = visible_only;
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    pub fn order_by(mut self, order_by: &'static str) -> Self {
        self.order_by = order_by;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Assemble the statement with its bound arguments
    pub fn build(&self) -> QueryBuilder<'static, MySql> {
        let mut builder = QueryBuilder::new(self.select.trim());

        match self.visibility_column {
            Some(column) if self.visible_only => {
                builder.push(" WHERE ");
                builder.push(column);
                builder.push(" = TRUE");
            }
            _ => {
                builder.push(" WHERE 1=1");
            }
        }

        if let Some(category) = &self.category {
            builder.push(" AND category = ");
            builder.push_bind(category.clone());
        }

        if let Some(featured) = self.featured {
            builder.push(" AND is_featured = ");
            builder.push_bind(featured);
        }

        builder.push(" ORDER BY ");
        builder.push(self.order_by);

        if let Some(limit) = self.limit {
            builder.push(" LIMIT ");
            builder.push_bind(u64::from(limit));
        }

        builder
    }
}

/// Single-row lookup by slug, restricted to visible rows
pub fn visible_by_slug(
    select: &'static str,
    visibility_column: &'static str,
    slug: &str,
) -> QueryBuilder<'static, MySql> {
    let mut builder = QueryBuilder::new(select.trim());
    builder.push(" WHERE slug = ");
    builder.push_bind(slug.to_string());
    builder.push(" AND ");
    builder.push(visibility_column);
    builder.push(" = TRUE LIMIT 1");
    builder
}
