//! Database models for portfolio holdings.

use diesel::prelude::*;
use etf_tracker_core::portfolios::{NewPortfolio, Portfolio, PortfolioWithEtf};

use crate::etfs::EtfDB;

#[derive(Queryable, Identifiable, Associations, Selectable, PartialEq, Debug, Clone)]
#[diesel(belongs_to(EtfDB, foreign_key = etf_id))]
#[diesel(table_name = crate::schema::portfolios)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PortfolioDB {
    pub id: i32,
    pub etf_id: i32,
    pub shares: f64,
    pub avg_price: f64,
    pub total_invested: f64,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::portfolios)]
pub struct NewPortfolioDB {
    pub etf_id: i32,
    pub shares: f64,
    pub avg_price: f64,
    pub total_invested: f64,
}

impl From<PortfolioDB> for Portfolio {
    fn from(db: PortfolioDB) -> Self {
        Self {
            id: db.id,
            etf_id: db.etf_id,
            shares: db.shares,
            avg_price: db.avg_price,
            total_invested: db.total_invested,
        }
    }
}

impl From<NewPortfolio> for NewPortfolioDB {
    fn from(domain: NewPortfolio) -> Self {
        Self {
            etf_id: domain.etf_id,
            shares: domain.shares,
            avg_price: domain.avg_price,
            total_invested: domain.total_invested,
        }
    }
}

/// Row shape of the holdings/ETF join: the holding plus
/// `(ticker, name, current_price, dividend_yield)` from its ETF.
pub(crate) type PortfolioWithEtfRow = (PortfolioDB, String, String, f64, f64);

pub(crate) fn portfolio_with_etf(row: PortfolioWithEtfRow) -> PortfolioWithEtf {
    let (holding, ticker, name, current_price, dividend_yield) = row;
    PortfolioWithEtf {
        id: holding.id,
        etf_id: holding.etf_id,
        shares: holding.shares,
        avg_price: holding.avg_price,
        total_invested: holding.total_invested,
        ticker,
        name,
        current_price,
        dividend_yield,
    }
}
