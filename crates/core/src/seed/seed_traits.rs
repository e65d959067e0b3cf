use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::seed_plan::SeedPlan;
use crate::errors::Result;

/// Row counts written by a successful seed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSummary {
    pub etfs: usize,
    pub portfolios: usize,
    pub dividends: usize,
}

/// Result of a seed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeedOutcome {
    /// The store already held ETFs; nothing was written.
    AlreadySeeded { existing_etfs: i64 },
    Seeded(SeedSummary),
}

/// Storage side of seeding.
#[async_trait]
pub trait SeedRepositoryTrait: Send + Sync {
    /// Writes `plan` as a single unit of work.
    ///
    /// Implementations must count existing ETFs inside the same transaction
    /// and return [`SeedOutcome::AlreadySeeded`] without writing when the
    /// count is non-zero. Holdings and dividends are linked to the ids
    /// assigned to `plan.etfs[etf_index]`. Any failure leaves the store as it
    /// was before the call.
    async fn apply_plan(&self, plan: SeedPlan) -> Result<SeedOutcome>;
}

#[async_trait]
pub trait SeedServiceTrait: Send + Sync {
    /// Seeds an empty store with the sample catalog, dating the dividend
    /// schedule from `today`.
    async fn seed_sample_data(&self, today: NaiveDate) -> Result<SeedOutcome>;
}
