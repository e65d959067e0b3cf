//! Database models for ETFs.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use etf_tracker_core::etfs::{Etf, EtfQuoteUpdate, NewEtf, TopHolding};

use crate::errors::StorageError;

/// Database model for ETFs
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::etfs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EtfDB {
    pub id: i32,
    pub ticker: String,
    pub name: String,
    pub current_price: f64,
    pub previous_price: f64,
    pub dividend_yield: f64,
    pub expense_ratio: f64,
    pub aum: f64,
    pub volume: i64,
    pub sector: String,
    pub region: String,
    pub return_1d: f64,
    pub return_1w: f64,
    pub return_1m: f64,
    pub return_1y: f64,
    pub investment_strategy: Option<String>,
    /// JSON array of `{name, weight}` objects.
    pub top_holdings: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new ETF
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::etfs)]
pub struct NewEtfDB {
    pub ticker: String,
    pub name: String,
    pub current_price: f64,
    pub previous_price: f64,
    pub dividend_yield: f64,
    pub expense_ratio: f64,
    pub aum: f64,
    pub volume: i64,
    pub sector: String,
    pub region: String,
    pub return_1d: f64,
    pub return_1w: f64,
    pub return_1m: f64,
    pub return_1y: f64,
    pub investment_strategy: Option<String>,
    pub top_holdings: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Changeset for quote refreshes. `None` fields are left untouched.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::etfs)]
pub struct EtfQuoteUpdateDB {
    pub current_price: Option<f64>,
    pub previous_price: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub aum: Option<f64>,
    pub volume: Option<i64>,
    pub return_1d: Option<f64>,
    pub return_1w: Option<f64>,
    pub return_1m: Option<f64>,
    pub return_1y: Option<f64>,
    pub updated_at: NaiveDateTime,
}

impl EtfQuoteUpdateDB {
    pub fn new(update: EtfQuoteUpdate, updated_at: NaiveDateTime) -> Self {
        Self {
            current_price: update.current_price,
            previous_price: update.previous_price,
            dividend_yield: update.dividend_yield,
            aum: update.aum,
            volume: update.volume,
            return_1d: update.return_1d,
            return_1w: update.return_1w,
            return_1m: update.return_1m,
            return_1y: update.return_1y,
            updated_at,
        }
    }
}

impl NewEtfDB {
    /// Builds an insertable row stamped with `now` for both timestamps.
    pub fn from_domain(domain: NewEtf, now: NaiveDateTime) -> Result<Self, StorageError> {
        let top_holdings = domain
            .top_holdings
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        Ok(Self {
            ticker: domain.ticker,
            name: domain.name,
            current_price: domain.current_price,
            previous_price: domain.previous_price,
            dividend_yield: domain.dividend_yield,
            expense_ratio: domain.expense_ratio,
            aum: domain.aum,
            volume: domain.volume,
            sector: domain.sector,
            region: domain.region,
            return_1d: domain.return_1d,
            return_1w: domain.return_1w,
            return_1m: domain.return_1m,
            return_1y: domain.return_1y,
            investment_strategy: domain.investment_strategy,
            top_holdings,
            created_at: now,
            updated_at: now,
        })
    }
}

impl TryFrom<EtfDB> for Etf {
    type Error = StorageError;

    fn try_from(db: EtfDB) -> Result<Self, Self::Error> {
        let top_holdings = db
            .top_holdings
            .as_deref()
            .map(serde_json::from_str::<Vec<TopHolding>>)
            .transpose()?;

        Ok(Self {
            id: db.id,
            ticker: db.ticker,
            name: db.name,
            current_price: db.current_price,
            previous_price: db.previous_price,
            dividend_yield: db.dividend_yield,
            expense_ratio: db.expense_ratio,
            aum: db.aum,
            volume: db.volume,
            sector: db.sector,
            region: db.region,
            return_1d: db.return_1d,
            return_1w: db.return_1w,
            return_1m: db.return_1m,
            return_1y: db.return_1y,
            investment_strategy: db.investment_strategy,
            top_holdings,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}
