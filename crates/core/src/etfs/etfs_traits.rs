//! ETF repository trait.
//!
//! Defines the contract for ETF persistence without any database-specific
//! types, allowing for different storage implementations.

use async_trait::async_trait;

use super::etfs_model::{Etf, EtfQuoteUpdate, EtfRanking, NewEtf, ReturnPeriod};
use crate::errors::Result;

/// Trait defining the contract for ETF repository operations.
#[async_trait]
pub trait EtfRepositoryTrait: Send + Sync {
    /// Inserts a new ETF and returns it with its assigned id and timestamps.
    ///
    /// Fails with a unique violation when the ticker already exists.
    async fn create(&self, new_etf: NewEtf) -> Result<Etf>;

    /// Applies a price/performance update and refreshes `updated_at`.
    async fn update_quote(&self, etf_id: i32, update: EtfQuoteUpdate) -> Result<Etf>;

    /// Number of stored ETFs.
    fn count(&self) -> Result<i64>;

    fn get_by_id(&self, etf_id: i32) -> Result<Etf>;

    /// Looks up an ETF by its exact (case-sensitive) ticker.
    fn get_by_ticker(&self, ticker: &str) -> Result<Etf>;

    /// Lists all ETFs in insertion order.
    fn list(&self) -> Result<Vec<Etf>>;

    /// Lists ranking rows for `period`, best return first.
    ///
    /// # Arguments
    /// * `period` - Which return column to surface and sort by
    /// * `limit` - If Some, caps the number of rows returned
    fn list_rankings(&self, period: ReturnPeriod, limit: Option<i64>) -> Result<Vec<EtfRanking>>;
}
