//! First-boot content for the hero carousel and the site navigation.

use sqlx::{MySqlPool, Row};

use es_core::services::content::fixtures;

use crate::InfrastructureError;

/// Rows inserted per table by [`seed_defaults`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub hero_slides: usize,
    pub navigation: usize,
}

/// Insert the built-in hero slides and navigation entries into whichever of
/// the two tables is empty. Tables that already hold rows are left alone.
pub async fn seed_defaults(pool: &MySqlPool) -> Result<SeedReport, InfrastructureError> {
    let mut report = SeedReport::default();

    if table_is_empty(pool, "hero_slides").await? {
        for slide in fixtures::hero_slides() {
            sqlx::query(
                r#"
                    INSERT INTO hero_slides (
                        title, description, cta_label, cta_link, image, category, position, is_active
                    ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&slide.title)
            .bind(&slide.description)
            .bind(&slide.cta_label)
            .bind(&slide.cta_link)
            .bind(&slide.image)
            .bind(&slide.category)
            .bind(slide.position)
            .bind(slide.is_active)
            .execute(pool)
            .await?;
            report.hero_slides += 1;
        }
        tracing::info!("Seeded {} hero slides", report.hero_slides);
    }

    if table_is_empty(pool, "navigation").await? {
        // Explicit ids keep the parent references of the built-in tree intact
        for item in fixtures::navigation_items() {
            sqlx::query(
                r#"
                    INSERT INTO navigation (
                        id, label, href, parent_id, position, is_external, is_active
                    ) VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(item.id)
            .bind(&item.label)
            .bind(&item.href)
            .bind(item.parent_id)
            .bind(item.position)
            .bind(item.is_external)
            .bind(item.is_active)
            .execute(pool)
            .await?;
            report.navigation += 1;
        }
        tracing::info!("Seeded {} navigation entries", report.navigation);
    }

    Ok(report)
}

async fn table_is_empty(pool: &MySqlPool, table: &str) -> Result<bool, InfrastructureError> {
    let row = sqlx::query(&format!("SELECT COUNT(*) AS total FROM {}", table))
        .fetch_one(pool)
        .await?;
    let total: i64 = row.try_get("total")?;
    Ok(total == 0)
}
