use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;

use etf_tracker_core::etfs::{
    Etf, EtfQuoteUpdate, EtfRanking, EtfRepositoryTrait, NewEtf, ReturnPeriod,
};
use etf_tracker_core::Result;

use super::model::{EtfDB, EtfQuoteUpdateDB, NewEtfDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::etfs;

pub struct EtfRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl EtfRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        EtfRepository { pool, writer }
    }
}

/// Inserts one ETF on an existing connection. Shared with the seed writer so
/// both paths stamp and encode rows the same way.
pub(crate) fn insert_etf(conn: &mut SqliteConnection, new_etf: NewEtf) -> Result<EtfDB> {
    let row = NewEtfDB::from_domain(new_etf, Utc::now().naive_utc())?;
    Ok(diesel::insert_into(etfs::table)
        .values(&row)
        .returning(EtfDB::as_returning())
        .get_result(conn)
        .map_err(StorageError::from)?)
}

#[async_trait]
impl EtfRepositoryTrait for EtfRepository {
    async fn create(&self, new_etf: NewEtf) -> Result<Etf> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Etf> {
                let etf_db = insert_etf(conn, new_etf)?;
                Ok(Etf::try_from(etf_db)?)
            })
            .await
    }

    async fn update_quote(&self, etf_id: i32, update: EtfQuoteUpdate) -> Result<Etf> {
        let changeset = EtfQuoteUpdateDB::new(update, Utc::now().naive_utc());

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Etf> {
                let etf_db = diesel::update(etfs::table.find(etf_id))
                    .set(&changeset)
                    .returning(EtfDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Etf::try_from(etf_db)?)
            })
            .await
    }

    fn count(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        Ok(etfs::table
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(StorageError::from)?)
    }

    fn get_by_id(&self, etf_id: i32) -> Result<Etf> {
        let mut conn = get_connection(&self.pool)?;
        let etf_db = etfs::table
            .find(etf_id)
            .select(EtfDB::as_select())
            .first::<EtfDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Etf::try_from(etf_db)?)
    }

    fn get_by_ticker(&self, ticker: &str) -> Result<Etf> {
        let mut conn = get_connection(&self.pool)?;
        let etf_db = etfs::table
            .filter(etfs::ticker.eq(ticker))
            .select(EtfDB::as_select())
            .first::<EtfDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Etf::try_from(etf_db)?)
    }

    fn list(&self) -> Result<Vec<Etf>> {
        let mut conn = get_connection(&self.pool)?;
        let etfs_db = etfs::table
            .select(EtfDB::as_select())
            .order(etfs::id.asc())
            .load::<EtfDB>(&mut conn)
            .map_err(StorageError::from)?;

        etfs_db
            .into_iter()
            .map(|row| -> Result<Etf> { Ok(Etf::try_from(row)?) })
            .collect()
    }

    fn list_rankings(&self, period: ReturnPeriod, limit: Option<i64>) -> Result<Vec<EtfRanking>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = etfs::table.select(EtfDB::as_select()).into_boxed();
        query = match period {
            ReturnPeriod::Day => query.order((etfs::return_1d.desc(), etfs::id.asc())),
            ReturnPeriod::Week => query.order((etfs::return_1w.desc(), etfs::id.asc())),
            ReturnPeriod::Month => query.order((etfs::return_1m.desc(), etfs::id.asc())),
            ReturnPeriod::Year => query.order((etfs::return_1y.desc(), etfs::id.asc())),
        };
        if let Some(max_rows) = limit {
            query = query.limit(max_rows);
        }

        let etfs_db = query
            .load::<EtfDB>(&mut conn)
            .map_err(StorageError::from)?;

        etfs_db
            .into_iter()
            .map(|row| -> Result<EtfRanking> {
                let etf = Etf::try_from(row)?;
                Ok(EtfRanking::from_etf(&etf, period))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_etf, setup_test_db};
    use etf_tracker_core::errors::{DatabaseError, Error};
    use etf_tracker_core::etfs::TopHolding;

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamps() {
        let (pool, writer, _dir) = setup_test_db();
        let repo = EtfRepository::new(pool, writer);

        let created = repo.create(sample_etf("JEPQ", 12.0)).await.unwrap();

        assert!(created.id > 0);
        assert_eq!(created.ticker, "JEPQ");
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(repo.get_by_id(created.id).unwrap(), created);
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_get_by_ticker_is_case_sensitive() {
        let (pool, writer, _dir) = setup_test_db();
        let repo = EtfRepository::new(pool, writer);
        repo.create(sample_etf("SCHD", 5.0)).await.unwrap();

        assert_eq!(repo.get_by_ticker("SCHD").unwrap().ticker, "SCHD");
        assert!(matches!(
            repo.get_by_ticker("schd"),
            Err(Error::Database(DatabaseError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_duplicate_ticker_is_unique_violation() {
        let (pool, writer, _dir) = setup_test_db();
        let repo = EtfRepository::new(pool, writer);
        repo.create(sample_etf("QYLD", 3.0)).await.unwrap();

        let err = repo.create(sample_etf("QYLD", 4.0)).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Database(DatabaseError::UniqueViolation(_))
        ));
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found() {
        let (pool, writer, _dir) = setup_test_db();
        let repo = EtfRepository::new(pool, writer);

        assert!(matches!(
            repo.get_by_id(999),
            Err(Error::Database(DatabaseError::NotFound(_)))
        ));
        assert!(matches!(
            repo.update_quote(999, EtfQuoteUpdate::default()).await,
            Err(Error::Database(DatabaseError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_top_holdings_and_strategy_survive_storage() {
        let (pool, writer, _dir) = setup_test_db();
        let repo = EtfRepository::new(pool, writer);

        let mut new_etf = sample_etf("SCHD", 8.0);
        new_etf.investment_strategy = Some("Dividend growth".to_string());
        new_etf.top_holdings = Some(vec![
            TopHolding {
                name: "Broadcom".to_string(),
                weight: 4.5,
            },
            TopHolding {
                name: "AbbVie".to_string(),
                weight: 4.2,
            },
        ]);
        let created = repo.create(new_etf).await.unwrap();

        let stored = repo.get_by_ticker("SCHD").unwrap();
        let holdings = stored.top_holdings.clone().unwrap();
        assert_eq!(holdings[0].name, "Broadcom");
        assert_eq!(holdings[1].weight, 4.2);
        assert_eq!(stored.investment_strategy.as_deref(), Some("Dividend growth"));

        let json = serde_json::to_string(&stored).unwrap();
        let decoded: Etf = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, created);
    }

    #[tokio::test]
    async fn test_optional_fields_stay_absent() {
        let (pool, writer, _dir) = setup_test_db();
        let repo = EtfRepository::new(pool, writer);
        let created = repo.create(sample_etf("VYM", 1.0)).await.unwrap();

        assert!(created.investment_strategy.is_none());
        assert!(created.top_holdings.is_none());

        let value = serde_json::to_value(&created).unwrap();
        assert!(value["top_holdings"].is_null());
    }

    #[tokio::test]
    async fn test_update_quote_changes_only_given_fields() {
        let (pool, writer, _dir) = setup_test_db();
        let repo = EtfRepository::new(pool, writer);
        let created = repo.create(sample_etf("JEPI", 6.0)).await.unwrap();

        std::thread::sleep(std::time::Duration::from_millis(20));
        let updated = repo
            .update_quote(
                created.id,
                EtfQuoteUpdate {
                    current_price: Some(61000.0),
                    return_1d: Some(-0.4),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.current_price, 61000.0);
        assert_eq!(updated.return_1d, -0.4);
        assert_eq!(updated.previous_price, created.previous_price);
        assert_eq!(updated.return_1y, created.return_1y);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let (pool, writer, _dir) = setup_test_db();
        let repo = EtfRepository::new(pool, writer);
        for ticker in ["JEPQ", "QYLD", "SDIV"] {
            repo.create(sample_etf(ticker, 1.0)).await.unwrap();
        }

        let tickers: Vec<String> = repo.list().unwrap().into_iter().map(|e| e.ticker).collect();
        assert_eq!(tickers, vec!["JEPQ", "QYLD", "SDIV"]);
    }

    #[tokio::test]
    async fn test_rankings_sort_by_period_and_respect_limit() {
        let (pool, writer, _dir) = setup_test_db();
        let repo = EtfRepository::new(pool, writer);
        repo.create(sample_etf("LOW", -3.0)).await.unwrap();
        repo.create(sample_etf("HIGH", 25.0)).await.unwrap();
        repo.create(sample_etf("MID", 9.5)).await.unwrap();

        let all = repo.list_rankings(ReturnPeriod::Year, None).unwrap();
        let tickers: Vec<&str> = all.iter().map(|r| r.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["HIGH", "MID", "LOW"]);
        assert_eq!(all[0].return_value, 25.0);
        assert!(all[0].dividend_yield.is_some());

        let top = repo.list_rankings(ReturnPeriod::Year, Some(2)).unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[1].ticker, "MID");
    }
}
