use async_trait::async_trait;
use chrono::NaiveDate;
use log::{info, warn};
use std::sync::Arc;

use super::seed_catalog::SeedCatalog;
use super::seed_plan::SeedPlan;
use super::seed_traits::{SeedOutcome, SeedRepositoryTrait, SeedServiceTrait};
use crate::errors::Result;

/// Seeds an empty store from a [`SeedCatalog`].
pub struct SeedService {
    repository: Arc<dyn SeedRepositoryTrait>,
    catalog: SeedCatalog,
}

impl SeedService {
    pub fn new(repository: Arc<dyn SeedRepositoryTrait>, catalog: SeedCatalog) -> Self {
        Self {
            repository,
            catalog,
        }
    }
}

#[async_trait]
impl SeedServiceTrait for SeedService {
    async fn seed_sample_data(&self, today: NaiveDate) -> Result<SeedOutcome> {
        let plan = SeedPlan::build(&self.catalog, today);
        info!(
            "Seeding sample data: {} ETFs, {} holdings, {} dividend events",
            plan.etfs.len(),
            plan.holdings.len(),
            plan.dividends.len()
        );

        let outcome = self.repository.apply_plan(plan).await?;
        match &outcome {
            SeedOutcome::AlreadySeeded { existing_etfs } => {
                warn!(
                    "Sample data already present ({} ETFs); nothing written",
                    existing_etfs
                );
            }
            SeedOutcome::Seeded(summary) => {
                info!("Created {} ETF records", summary.etfs);
                info!("Created {} portfolio records", summary.portfolios);
                info!("Created {} dividend records", summary.dividends);
            }
        }
        Ok(outcome)
    }
}
