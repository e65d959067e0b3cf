//! Database models for dividend events.

use chrono::NaiveDate;
use diesel::prelude::*;
use etf_tracker_core::dividends::{Dividend, DividendCalendarItem, NewDividend};

use crate::etfs::EtfDB;

#[derive(Queryable, Identifiable, Associations, Selectable, PartialEq, Debug, Clone)]
#[diesel(belongs_to(EtfDB, foreign_key = etf_id))]
#[diesel(table_name = crate::schema::dividends)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DividendDB {
    pub id: i32,
    pub etf_id: i32,
    pub ex_dividend_date: NaiveDate,
    pub payment_date: NaiveDate,
    pub dividend_per_share: f64,
    pub frequency: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::dividends)]
pub struct NewDividendDB {
    pub etf_id: i32,
    pub ex_dividend_date: NaiveDate,
    pub payment_date: NaiveDate,
    pub dividend_per_share: f64,
    pub frequency: String,
}

impl From<DividendDB> for Dividend {
    fn from(db: DividendDB) -> Self {
        Self {
            id: db.id,
            etf_id: db.etf_id,
            ex_dividend_date: db.ex_dividend_date,
            payment_date: db.payment_date,
            dividend_per_share: db.dividend_per_share,
            frequency: db.frequency.into(),
        }
    }
}

impl From<NewDividend> for NewDividendDB {
    fn from(domain: NewDividend) -> Self {
        Self {
            etf_id: domain.etf_id,
            ex_dividend_date: domain.ex_dividend_date,
            payment_date: domain.payment_date,
            dividend_per_share: domain.dividend_per_share,
            frequency: domain.frequency.into(),
        }
    }
}

/// Dividend row joined with `(ticker, name, dividend_yield)` of its ETF.
pub(crate) type CalendarRow = (DividendDB, String, String, f64);

pub(crate) fn calendar_item(row: CalendarRow) -> DividendCalendarItem {
    let (dividend, ticker, name, dividend_yield) = row;
    DividendCalendarItem {
        id: dividend.id,
        ticker,
        name,
        ex_dividend_date: dividend.ex_dividend_date,
        payment_date: dividend.payment_date,
        dividend_per_share: dividend.dividend_per_share,
        frequency: dividend.frequency.into(),
        dividend_yield: Some(dividend_yield),
    }
}
