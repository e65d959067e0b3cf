use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;

use etf_tracker_core::errors::{DatabaseError, Error};
use etf_tracker_core::seed::{SeedOutcome, SeedPlan, SeedRepositoryTrait, SeedSummary};
use etf_tracker_core::Result;

use crate::db::WriteHandle;
use crate::dividends::insert_dividend;
use crate::errors::StorageError;
use crate::etfs::insert_etf;
use crate::portfolios::insert_portfolio;
use crate::schema::etfs;

/// Applies seed plans through the writer, one transaction per plan.
pub struct SeedRepository {
    writer: WriteHandle,
}

impl SeedRepository {
    pub fn new(writer: WriteHandle) -> Self {
        SeedRepository { writer }
    }
}

fn etf_id_at(etf_ids: &[i32], etf_index: usize) -> Result<i32> {
    etf_ids.get(etf_index).copied().ok_or_else(|| {
        Error::Database(DatabaseError::Internal(format!(
            "Seed plan references ETF #{} but only {} were inserted",
            etf_index,
            etf_ids.len()
        )))
    })
}

fn apply_plan_on(conn: &mut SqliteConnection, plan: SeedPlan) -> Result<SeedOutcome> {
    let existing_etfs = etfs::table
        .count()
        .get_result::<i64>(conn)
        .map_err(StorageError::from)?;
    if existing_etfs > 0 {
        return Ok(SeedOutcome::AlreadySeeded { existing_etfs });
    }

    // One insert per row so each id is tied to its catalog position.
    let mut etf_ids = Vec::with_capacity(plan.etfs.len());
    for new_etf in plan.etfs {
        etf_ids.push(insert_etf(conn, new_etf)?.id);
    }
    debug!("Inserted {} seed ETFs", etf_ids.len());

    let mut portfolios = 0;
    for holding in plan.holdings {
        let etf_id = etf_id_at(&etf_ids, holding.etf_index)?;
        insert_portfolio(conn, holding.into_new_portfolio(etf_id))?;
        portfolios += 1;
    }

    let mut dividends = 0;
    for dividend in plan.dividends {
        let etf_id = etf_id_at(&etf_ids, dividend.etf_index)?;
        insert_dividend(conn, dividend.into_new_dividend(etf_id))?;
        dividends += 1;
    }

    Ok(SeedOutcome::Seeded(SeedSummary {
        etfs: etf_ids.len(),
        portfolios,
        dividends,
    }))
}

#[async_trait]
impl SeedRepositoryTrait for SeedRepository {
    async fn apply_plan(&self, plan: SeedPlan) -> Result<SeedOutcome> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<SeedOutcome> {
                apply_plan_on(conn, plan)
            })
            .await
    }
}
