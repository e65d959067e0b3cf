//! Portfolio holding models.

use serde::{Deserialize, Serialize};

/// A recorded holding of one ETF.
///
/// `total_invested` is supplied by the caller and is only expected to be close
/// to `shares * avg_price`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Portfolio {
    pub id: i32,
    pub etf_id: i32,
    pub shares: f64,
    pub avg_price: f64,
    pub total_invested: f64,
}

/// Input model for recording a new holding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPortfolio {
    pub etf_id: i32,
    pub shares: f64,
    pub avg_price: f64,
    pub total_invested: f64,
}

/// Holding joined with the identifying and pricing fields of its ETF.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioWithEtf {
    pub id: i32,
    pub etf_id: i32,
    pub shares: f64,
    pub avg_price: f64,
    pub total_invested: f64,
    pub ticker: String,
    pub name: String,
    pub current_price: f64,
    pub dividend_yield: f64,
}
