use async_trait::async_trait;

use super::portfolios_model::{NewPortfolio, Portfolio, PortfolioWithEtf};
use crate::errors::Result;

/// Trait for portfolio holding repository operations.
#[async_trait]
pub trait PortfolioRepositoryTrait: Send + Sync {
    /// Records a holding. The referenced ETF must already exist.
    async fn create(&self, new_holding: NewPortfolio) -> Result<Portfolio>;

    /// Removes a closed position. Returns the number of deleted records.
    async fn delete(&self, holding_id: i32) -> Result<usize>;

    fn list(&self) -> Result<Vec<Portfolio>>;

    fn list_with_etf(&self) -> Result<Vec<PortfolioWithEtf>>;
}
