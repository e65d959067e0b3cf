use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;

use etf_tracker_core::portfolios::{
    NewPortfolio, Portfolio, PortfolioRepositoryTrait, PortfolioWithEtf,
};
use etf_tracker_core::Result;

use super::model::{portfolio_with_etf, NewPortfolioDB, PortfolioDB, PortfolioWithEtfRow};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{etfs, portfolios};

pub struct PortfolioRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl PortfolioRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        PortfolioRepository { pool, writer }
    }
}

pub(crate) fn insert_portfolio(
    conn: &mut SqliteConnection,
    new_holding: NewPortfolio,
) -> Result<PortfolioDB> {
    let row: NewPortfolioDB = new_holding.into();
    Ok(diesel::insert_into(portfolios::table)
        .values(&row)
        .returning(PortfolioDB::as_returning())
        .get_result(conn)
        .map_err(StorageError::from)?)
}

#[async_trait]
impl PortfolioRepositoryTrait for PortfolioRepository {
    async fn create(&self, new_holding: NewPortfolio) -> Result<Portfolio> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Portfolio> {
                Ok(Portfolio::from(insert_portfolio(conn, new_holding)?))
            })
            .await
    }

    async fn delete(&self, holding_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(portfolios::table.find(holding_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }

    fn list(&self) -> Result<Vec<Portfolio>> {
        let mut conn = get_connection(&self.pool)?;
        let holdings = portfolios::table
            .select(PortfolioDB::as_select())
            .order(portfolios::id.asc())
            .load::<PortfolioDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(holdings.into_iter().map(Portfolio::from).collect())
    }

    fn list_with_etf(&self) -> Result<Vec<PortfolioWithEtf>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = portfolios::table
            .inner_join(etfs::table)
            .select((
                PortfolioDB::as_select(),
                etfs::ticker,
                etfs::name,
                etfs::current_price,
                etfs::dividend_yield,
            ))
            .order(portfolios::id.asc())
            .load::<PortfolioWithEtfRow>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(portfolio_with_etf).collect())
    }
}
