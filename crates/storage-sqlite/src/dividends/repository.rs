use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;

use etf_tracker_core::dividends::{
    Dividend, DividendCalendarItem, DividendRepositoryTrait, NewDividend,
};
use etf_tracker_core::Result;

use super::model::{calendar_item, CalendarRow, DividendDB, NewDividendDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{dividends, etfs};

pub struct DividendRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl DividendRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        DividendRepository { pool, writer }
    }
}

pub(crate) fn insert_dividend(
    conn: &mut SqliteConnection,
    new_dividend: NewDividend,
) -> Result<DividendDB> {
    let row: NewDividendDB = new_dividend.into();
    Ok(diesel::insert_into(dividends::table)
        .values(&row)
        .returning(DividendDB::as_returning())
        .get_result(conn)
        .map_err(StorageError::from)?)
}

#[async_trait]
impl DividendRepositoryTrait for DividendRepository {
    async fn create(&self, new_dividend: NewDividend) -> Result<Dividend> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Dividend> {
                Ok(Dividend::from(insert_dividend(conn, new_dividend)?))
            })
            .await
    }

    fn list_for_etf(&self, etf_id: i32) -> Result<Vec<Dividend>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = dividends::table
            .filter(dividends::etf_id.eq(etf_id))
            .select(DividendDB::as_select())
            .order((dividends::ex_dividend_date.asc(), dividends::id.asc()))
            .load::<DividendDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Dividend::from).collect())
    }

    fn list_calendar(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<DividendCalendarItem>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = dividends::table
            .inner_join(etfs::table)
            .filter(dividends::ex_dividend_date.ge(from))
            .filter(dividends::ex_dividend_date.le(to))
            .select((
                DividendDB::as_select(),
                etfs::ticker,
                etfs::name,
                etfs::dividend_yield,
            ))
            .order((dividends::ex_dividend_date.asc(), dividends::id.asc()))
            .load::<CalendarRow>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(calendar_item).collect())
    }
}
