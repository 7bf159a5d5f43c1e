//! Prepare the content store and report what the site would serve.
//!
//! Loads `.env`, creates missing tables and columns, seeds first-boot content
//! and prints a short summary of each content section.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use es_core::domain::value_objects::ListFilter;
use es_infra::config::{AppConfig, LogFormat, LoggingConfig};

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.filter_directive()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(logging.source_location)
        .with_line_number(logging.source_location);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Compact => builder.compact().init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging);

    tracing::info!("Bootstrapping site content ({})", config.environment);

    let service =
        es_infra::initialize(&config.database).context("failed to set up the content store")?;

    if service.initialize().await {
        tracing::info!("Content store ready");
    } else if service.is_database_enabled() {
        tracing::warn!("Content store could not be prepared; reads will use built-in content");
    }

    let products = service.get_products(None, 10, None).await;
    let featured = service.get_products(None, 10, Some(true)).await;
    let slides = service.get_hero_slides().await;
    let navigation = service.get_navigation().await;
    let news = service.get_news(&ListFilter::active()).await;
    let solutions = service.get_solutions(&ListFilter::active()).await;

    tracing::info!(
        products = products.len(),
        featured = featured.len(),
        hero_slides = slides.len(),
        navigation_sections = navigation.len(),
        news = news.len(),
        solutions = solutions.len(),
        "Content summary"
    );

    if config.database.use_database {
        if let Ok(pool) = es_infra::database::DatabasePool::global(&config.database) {
            tracing::info!("{}", pool.get_statistics());
            pool.close().await;
        }
    }

    Ok(())
}
