use async_trait::async_trait;
use chrono::NaiveDate;

use super::dividends_model::{Dividend, DividendCalendarItem, NewDividend};
use crate::errors::Result;

/// Trait for dividend repository operations.
#[async_trait]
pub trait DividendRepositoryTrait: Send + Sync {
    /// Records a dividend event. The referenced ETF must already exist.
    async fn create(&self, new_dividend: NewDividend) -> Result<Dividend>;

    /// Dividends of one ETF ordered by ex-dividend date.
    fn list_for_etf(&self, etf_id: i32) -> Result<Vec<Dividend>>;

    /// Calendar rows whose ex-dividend date falls in `[from, to]`, earliest first.
    fn list_calendar(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<DividendCalendarItem>>;
}
