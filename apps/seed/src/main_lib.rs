use std::sync::Arc;

use chrono::NaiveDate;
use etf_tracker_core::seed::{SeedCatalog, SeedOutcome, SeedService, SeedServiceTrait};
use etf_tracker_storage_sqlite::db;
use etf_tracker_storage_sqlite::seed::SeedRepository;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, LogFormat};

pub fn init_tracing(format: &LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init(),
    }
}

pub fn load_catalog(config: &Config) -> etf_tracker_core::Result<SeedCatalog> {
    match &config.catalog_path {
        Some(path) => {
            tracing::info!("Loading seed catalog from {}", path.display());
            SeedCatalog::from_path(path)
        }
        None => SeedCatalog::embedded(),
    }
}

/// Opens (and migrates) the database, then seeds it unless it already holds
/// ETFs. Dividend dates are scheduled relative to `today`.
pub async fn run_seed(config: &Config, today: NaiveDate) -> anyhow::Result<SeedOutcome> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone())?;

    let catalog = load_catalog(config)?;
    let service = SeedService::new(Arc::new(SeedRepository::new(writer)), catalog);

    Ok(service.seed_sample_data(today).await?)
}
