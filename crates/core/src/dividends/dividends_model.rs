//! Dividend event models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const FREQUENCY_MONTHLY: &str = "monthly";
pub const FREQUENCY_QUARTERLY: &str = "quarterly";
pub const FREQUENCY_SEMI_ANNUAL: &str = "semi_annual";
pub const FREQUENCY_ANNUAL: &str = "annual";

/// Payment cadence of a dividend.
///
/// Values outside the known set are kept verbatim in `Other` so rows written
/// by other tools survive a read/write cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DividendFrequency {
    Monthly,
    Quarterly,
    SemiAnnual,
    Annual,
    Other(String),
}

impl DividendFrequency {
    pub fn as_str(&self) -> &str {
        match self {
            DividendFrequency::Monthly => FREQUENCY_MONTHLY,
            DividendFrequency::Quarterly => FREQUENCY_QUARTERLY,
            DividendFrequency::SemiAnnual => FREQUENCY_SEMI_ANNUAL,
            DividendFrequency::Annual => FREQUENCY_ANNUAL,
            DividendFrequency::Other(value) => value,
        }
    }
}

impl From<String> for DividendFrequency {
    fn from(value: String) -> Self {
        match value.as_str() {
            FREQUENCY_MONTHLY => DividendFrequency::Monthly,
            FREQUENCY_QUARTERLY => DividendFrequency::Quarterly,
            FREQUENCY_SEMI_ANNUAL => DividendFrequency::SemiAnnual,
            FREQUENCY_ANNUAL => DividendFrequency::Annual,
            _ => DividendFrequency::Other(value),
        }
    }
}

impl From<DividendFrequency> for String {
    fn from(value: DividendFrequency) -> Self {
        match value {
            DividendFrequency::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for DividendFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scheduled or historical dividend event for one ETF.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dividend {
    pub id: i32,
    pub etf_id: i32,
    pub ex_dividend_date: NaiveDate,
    pub payment_date: NaiveDate,
    pub dividend_per_share: f64,
    pub frequency: DividendFrequency,
}

/// Input model for recording a dividend event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewDividend {
    pub etf_id: i32,
    pub ex_dividend_date: NaiveDate,
    pub payment_date: NaiveDate,
    pub dividend_per_share: f64,
    pub frequency: DividendFrequency,
}

/// Dividend event joined with its ETF, as shown on a dividend calendar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DividendCalendarItem {
    pub id: i32,
    pub ticker: String,
    pub name: String,
    pub ex_dividend_date: NaiveDate,
    pub payment_date: NaiveDate,
    pub dividend_per_share: f64,
    pub frequency: DividendFrequency,
    pub dividend_yield: Option<f64>,
}
