//! ETF domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

/// One entry of an ETF's top holdings list. Weight is a percentage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopHolding {
    pub name: String,
    pub weight: f64,
}

/// Domain model representing a stored ETF.
///
/// This is the response shape: field names are serialized verbatim and the
/// optional narrative fields serialize as `null` when absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Etf {
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
    pub top_holdings: Option<Vec<TopHolding>>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new ETF.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewEtf {
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
    #[serde(default)]
    pub investment_strategy: Option<String>,
    #[serde(default)]
    pub top_holdings: Option<Vec<TopHolding>>,
}

/// Price and performance fields that may change after an ETF is created.
///
/// `None` leaves the stored value untouched. Applying any update refreshes
/// `updated_at`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EtfQuoteUpdate {
    pub current_price: Option<f64>,
    pub previous_price: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub aum: Option<f64>,
    pub volume: Option<i64>,
    pub return_1d: Option<f64>,
    pub return_1w: Option<f64>,
    pub return_1m: Option<f64>,
    pub return_1y: Option<f64>,
}

/// Which return figure a ranking surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReturnPeriod {
    #[serde(rename = "1d")]
    Day,
    #[serde(rename = "1w")]
    Week,
    #[serde(rename = "1m")]
    Month,
    #[serde(rename = "1y")]
    Year,
}

impl ReturnPeriod {
    pub const ALL: [ReturnPeriod; 4] = [
        ReturnPeriod::Day,
        ReturnPeriod::Week,
        ReturnPeriod::Month,
        ReturnPeriod::Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReturnPeriod::Day => "1d",
            ReturnPeriod::Week => "1w",
            ReturnPeriod::Month => "1m",
            ReturnPeriod::Year => "1y",
        }
    }

    /// Picks the return for this period out of an ETF.
    pub fn select(&self, etf: &Etf) -> f64 {
        match self {
            ReturnPeriod::Day => etf.return_1d,
            ReturnPeriod::Week => etf.return_1w,
            ReturnPeriod::Month => etf.return_1m,
            ReturnPeriod::Year => etf.return_1y,
        }
    }
}

impl fmt::Display for ReturnPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReturnPeriod {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "1d" => Ok(ReturnPeriod::Day),
            "1w" => Ok(ReturnPeriod::Week),
            "1m" => Ok(ReturnPeriod::Month),
            "1y" => Ok(ReturnPeriod::Year),
            _ => Err(ValidationError::InvalidInput(format!(
                "Unknown return period: {}",
                s
            ))),
        }
    }
}

/// Leaderboard projection of an ETF.
///
/// Carries a single caller-selected return as `return_value`. The projection
/// itself imposes no ordering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EtfRanking {
    pub ticker: String,
    pub name: String,
    pub return_value: f64,
    pub dividend_yield: Option<f64>,
}

impl EtfRanking {
    pub fn from_etf(etf: &Etf, period: ReturnPeriod) -> Self {
        Self {
            ticker: etf.ticker.clone(),
            name: etf.name.clone(),
            return_value: period.select(etf),
            dividend_yield: Some(etf.dividend_yield),
        }
    }
}
