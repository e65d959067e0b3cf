//! Seed module - sample catalog, plan derivation and the seeding service.

mod seed_catalog;
mod seed_plan;
mod seed_service;
mod seed_traits;


pub use seed_catalog::{SeedCatalog, SeedHolding, CATALOG_VERSION};
pub use seed_plan::{
    dividend_schedule, frequency_for_yield, monthly_dividend_per_share, PlannedDividend,
    PlannedHolding, SeedPlan, EX_DIVIDEND_BASE_OFFSETS_DAYS, EX_DIVIDEND_STAGGER_DAYS,
    MONTHLY_YIELD_THRESHOLD, PAYMENT_LAG_DAYS,
};
pub use seed_service::SeedService;
pub use seed_traits::{SeedOutcome, SeedRepositoryTrait, SeedServiceTrait, SeedSummary};
