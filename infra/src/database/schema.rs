//! Table definitions for the content store.
//!
//! Tables are listed in dependency order: a table referenced by a foreign key
//! is always created before the table holding the key.

use sqlx::MySqlPool;

use crate::InfrastructureError;

const TABLE_OPTIONS: &str = "ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_unicode_ci";

/// `(table name, column and key definitions)` in creation order
pub const TABLES: &[(&str, &str)] = &[
    (
        "products",
        r#"
            id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            slug VARCHAR(255) NOT NULL,
            description TEXT NULL,
            image VARCHAR(500) NULL,
            category VARCHAR(100) NULL,
            features JSON NULL,
            specifications JSON NULL,
            applications JSON NULL,
            benefits JSON NULL,
            is_featured BOOLEAN NOT NULL DEFAULT FALSE,
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            price DECIMAL(12, 2) NULL,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP,
            UNIQUE KEY uk_products_slug (slug),
            KEY idx_products_category (category),
            KEY idx_products_active (is_active)
        "#,
    ),
    (
        "pages",
        r#"
            id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            slug VARCHAR(255) NOT NULL,
            content LONGTEXT NULL,
            meta_description VARCHAR(500) NULL,
            is_published BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP,
            UNIQUE KEY uk_pages_slug (slug)
        "#,
    ),
    (
        "product_specifications",
        r#"
            id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
            product_id BIGINT UNSIGNED NOT NULL,
            title VARCHAR(255) NOT NULL,
            description TEXT NULL,
            image VARCHAR(500) NULL,
            content LONGTEXT NULL,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP,
            UNIQUE KEY uk_product_specifications_product (product_id),
            CONSTRAINT fk_product_specifications_product FOREIGN KEY (product_id)
                REFERENCES products (id) ON DELETE CASCADE
        "#,
    ),
    (
        "product_applications",
        r#"
            id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
            product_id BIGINT UNSIGNED NOT NULL,
            title VARCHAR(255) NOT NULL,
            description TEXT NULL,
            image VARCHAR(500) NULL,
            media_url VARCHAR(500) NULL,
            media_type VARCHAR(50) NULL,
            content LONGTEXT NULL,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP,
            UNIQUE KEY uk_product_applications_product (product_id),
            CONSTRAINT fk_product_applications_product FOREIGN KEY (product_id)
                REFERENCES products (id) ON DELETE CASCADE
        "#,
    ),
    (
        "content_blocks",
        r#"
            id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
            page_id BIGINT UNSIGNED NOT NULL,
            block_type VARCHAR(50) NOT NULL,
            content LONGTEXT NULL,
            position INT NOT NULL DEFAULT 0,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP,
            KEY idx_content_blocks_page (page_id, position),
            CONSTRAINT fk_content_blocks_page FOREIGN KEY (page_id)
                REFERENCES pages (id) ON DELETE CASCADE
        "#,
    ),
    (
        "solutions",
        r#"
            id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            slug VARCHAR(255) NOT NULL,
            summary TEXT NULL,
            content LONGTEXT NULL,
            image VARCHAR(500) NULL,
            category VARCHAR(100) NULL,
            features JSON NULL,
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP,
            UNIQUE KEY uk_solutions_slug (slug),
            KEY idx_solutions_category (category)
        "#,
    ),
    (
        "news",
        r#"
            id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            slug VARCHAR(255) NOT NULL,
            excerpt TEXT NULL,
            content LONGTEXT NULL,
            image VARCHAR(500) NULL,
            category VARCHAR(100) NULL,
            author VARCHAR(255) NULL,
            published_at TIMESTAMP NULL DEFAULT NULL,
            is_published BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP,
            UNIQUE KEY uk_news_slug (slug),
            KEY idx_news_published (is_published, published_at)
        "#,
    ),
    (
        "case_studies",
        r#"
            id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            slug VARCHAR(255) NOT NULL,
            client VARCHAR(255) NULL,
            location VARCHAR(255) NULL,
            summary TEXT NULL,
            content LONGTEXT NULL,
            image VARCHAR(500) NULL,
            category VARCHAR(100) NULL,
            is_published BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP,
            UNIQUE KEY uk_case_studies_slug (slug)
        "#,
    ),
    (
        "lab_equipment",
        r#"
            id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            slug VARCHAR(255) NOT NULL,
            description TEXT NULL,
            image VARCHAR(500) NULL,
            category VARCHAR(100) NULL,
            specifications JSON NULL,
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP,
            UNIQUE KEY uk_lab_equipment_slug (slug),
            KEY idx_lab_equipment_category (category)
        "#,
    ),
    (
        "hero_slides",
        r#"
            id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            description TEXT NULL,
            cta_label VARCHAR(100) NULL,
            cta_link VARCHAR(500) NULL,
            image VARCHAR(500) NULL,
            category VARCHAR(100) NULL,
            position INT NOT NULL DEFAULT 0,
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP,
            KEY idx_hero_slides_position (position)
        "#,
    ),
    (
        "navigation",
        r#"
            id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
            label VARCHAR(100) NOT NULL,
            href VARCHAR(500) NOT NULL,
            parent_id BIGINT UNSIGNED NULL,
            position INT NOT NULL DEFAULT 0,
            is_external BOOLEAN NOT NULL DEFAULT FALSE,
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP,
            KEY idx_navigation_parent (parent_id, position)
        "#,
    ),
    (
        "contact_submissions",
        r#"
            id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL,
            phone VARCHAR(50) NULL,
            company VARCHAR(255) NULL,
            subject VARCHAR(255) NULL,
            message TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            KEY idx_contact_submissions_created (created_at)
        "#,
    ),
    (
        "newsletter_subscriptions",
        r#"
            id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
            email VARCHAR(255) NOT NULL,
            subscribed_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP,
            UNIQUE KEY uk_newsletter_subscriptions_email (email)
        "#,
    ),
    (
        "schema_migrations",
        r#"
            id VARCHAR(191) NOT NULL PRIMARY KEY,
            applied_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        "#,
    ),
];

/// `CREATE TABLE IF NOT EXISTS` statement for one table
pub fn create_table_statement(table: &str, definition: &str) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {} ({}) {}",
        table,
        definition.trim(),
        TABLE_OPTIONS
    )
}

/// Create every missing table. Existing tables are left untouched.
pub async fn initialize_schema(pool: &MySqlPool) -> Result<(), InfrastructureError> {
    tracing::info!("Ensuring {} content tables exist", TABLES.len());

    for (table, definition) in TABLES {
        sqlx::query(&create_table_statement(table, definition))
            .execute(pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create table {}: {}", table, e);
                InfrastructureError::Database(e)
            })?;
        tracing::debug!("Table {} ready", table);
    }

    tracing::info!("Database schema initialized");
    Ok(())
}
