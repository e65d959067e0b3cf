mod config;
mod main_lib;

use config::Config;
use etf_tracker_core::seed::SeedOutcome;
use main_lib::{init_tracing, run_seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing(&config.log_format);

    let today = chrono::Local::now().date_naive();
    match run_seed(&config, today).await {
        Ok(SeedOutcome::Seeded(summary)) => {
            tracing::info!(
                etfs = summary.etfs,
                portfolios = summary.portfolios,
                dividends = summary.dividends,
                "Sample data initialized"
            );
            Ok(())
        }
        Ok(SeedOutcome::AlreadySeeded { existing_etfs }) => {
            tracing::info!(existing_etfs, "Database already contains ETFs; skipped seeding");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Seeding failed: {:#}", e);
            Err(e)
        }
    }
}
