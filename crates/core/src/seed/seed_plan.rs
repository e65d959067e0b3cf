//! Pure derivation of the sample data written by a seed run.
//!
//! A [`SeedPlan`] holds everything that will be inserted. Holdings and
//! dividends reference ETFs by their position in the catalog because the
//! store assigns ids only when the ETFs are inserted.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::seed_catalog::SeedCatalog;
use crate::dividends::{DividendFrequency, NewDividend};
use crate::etfs::NewEtf;
use crate::portfolios::NewPortfolio;

/// Days from the seed-run date to each scheduled ex-dividend date.
pub const EX_DIVIDEND_BASE_OFFSETS_DAYS: [i64; 3] = [10, 40, 70];

/// Extra days added per ETF position so schedules do not collide.
pub const EX_DIVIDEND_STAGGER_DAYS: i64 = 7;

/// Days between ex-dividend date and payment date.
pub const PAYMENT_LAG_DAYS: i64 = 14;

/// Yields strictly above this percentage are paid monthly.
pub const MONTHLY_YIELD_THRESHOLD: f64 = 5.0;

const MONTHS_PER_YEAR: f64 = 12.0;

/// Per-share amount of one distribution: the annual dividend implied by the
/// yield, spread evenly over twelve months regardless of actual cadence.
pub fn monthly_dividend_per_share(current_price: f64, dividend_yield: f64) -> f64 {
    current_price * dividend_yield / 100.0 / MONTHS_PER_YEAR
}

pub fn frequency_for_yield(dividend_yield: f64) -> DividendFrequency {
    if dividend_yield > MONTHLY_YIELD_THRESHOLD {
        DividendFrequency::Monthly
    } else {
        DividendFrequency::Quarterly
    }
}

/// Holding that will be linked to the ETF at `etf_index` once it has an id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlannedHolding {
    pub etf_index: usize,
    pub shares: f64,
    pub avg_price: f64,
    pub total_invested: f64,
}

impl PlannedHolding {
    pub fn into_new_portfolio(self, etf_id: i32) -> NewPortfolio {
        NewPortfolio {
            etf_id,
            shares: self.shares,
            avg_price: self.avg_price,
            total_invested: self.total_invested,
        }
    }
}

/// Dividend event that will be linked to the ETF at `etf_index`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlannedDividend {
    pub etf_index: usize,
    pub ex_dividend_date: NaiveDate,
    pub payment_date: NaiveDate,
    pub dividend_per_share: f64,
    pub frequency: DividendFrequency,
}

impl PlannedDividend {
    pub fn into_new_dividend(self, etf_id: i32) -> NewDividend {
        NewDividend {
            etf_id,
            ex_dividend_date: self.ex_dividend_date,
            payment_date: self.payment_date,
            dividend_per_share: self.dividend_per_share,
            frequency: self.frequency,
        }
    }
}

/// Three dividend events for the ETF at `position` among the scheduled ETFs.
pub fn dividend_schedule(etf: &NewEtf, position: usize, today: NaiveDate) -> Vec<PlannedDividend> {
    let stagger = EX_DIVIDEND_STAGGER_DAYS * position as i64;
    let dividend_per_share = monthly_dividend_per_share(etf.current_price, etf.dividend_yield);
    let frequency = frequency_for_yield(etf.dividend_yield);

    EX_DIVIDEND_BASE_OFFSETS_DAYS
        .iter()
        .map(|base| {
            let ex_dividend_date = today + Duration::days(base + stagger);
            PlannedDividend {
                etf_index: position,
                ex_dividend_date,
                payment_date: ex_dividend_date + Duration::days(PAYMENT_LAG_DAYS),
                dividend_per_share,
                frequency: frequency.clone(),
            }
        })
        .collect()
}

/// Everything a seed run inserts, in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeedPlan {
    pub etfs: Vec<NewEtf>,
    pub holdings: Vec<PlannedHolding>,
    pub dividends: Vec<PlannedDividend>,
}

impl SeedPlan {
    /// Builds the plan for a run on `today`.
    ///
    /// Holdings go to the leading catalog ETFs in order, and those same ETFs
    /// get a dividend schedule.
    pub fn build(catalog: &SeedCatalog, today: NaiveDate) -> Self {
        let holdings: Vec<PlannedHolding> = catalog
            .holdings
            .iter()
            .enumerate()
            .map(|(etf_index, holding)| PlannedHolding {
                etf_index,
                shares: holding.shares,
                avg_price: holding.avg_price,
                total_invested: holding.total_invested,
            })
            .collect();

        let dividends = catalog
            .etfs
            .iter()
            .take(holdings.len())
            .enumerate()
            .flat_map(|(position, etf)| dividend_schedule(etf, position, today))
            .collect();

        Self {
            etfs: catalog.etfs.clone(),
            holdings,
            dividends,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn etf_with(ticker: &str, current_price: f64, dividend_yield: f64) -> NewEtf {
        NewEtf {
            ticker: ticker.to_string(),
            name: format!("{} Fund", ticker),
            current_price,
            previous_price: current_price,
            dividend_yield,
            expense_ratio: 0.1,
            aum: 100.0,
            volume: 1_000,
            sector: "Diversified".to_string(),
            region: "US".to_string(),
            return_1d: 0.0,
            return_1w: 0.0,
            return_1m: 0.0,
            return_1y: 0.0,
            investment_strategy: None,
            top_holdings: None,
        }
    }

    fn run_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_schd_dividend_amount_and_frequency() {
        let schd = etf_with("SCHD", 28000.0, 3.8);
        let schedule = dividend_schedule(&schd, 0, run_date());

        assert_eq!(schedule.len(), 3);
        for event in &schedule {
            assert!((event.dividend_per_share - 88.666_666).abs() < 1e-3);
            assert_eq!(event.frequency, DividendFrequency::Quarterly);
        }
    }

    #[test]
    fn test_threshold_is_strict() {
        assert_eq!(frequency_for_yield(5.0), DividendFrequency::Quarterly);
        assert_eq!(frequency_for_yield(5.01), DividendFrequency::Monthly);
        assert_eq!(frequency_for_yield(0.0), DividendFrequency::Quarterly);
        assert_eq!(frequency_for_yield(11.4), DividendFrequency::Monthly);
    }

    #[test]
    fn test_schedule_dates_for_position() {
        let etf = etf_with("QYLD", 21000.0, 11.4);
        let schedule = dividend_schedule(&etf, 2, run_date());

        let ex_dates: Vec<_> = schedule.iter().map(|d| d.ex_dividend_date).collect();
        assert_eq!(
            ex_dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 1, 25).unwrap(),
                NaiveDate::from_ymd_opt(2024, 2, 24).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 25).unwrap(),
            ]
        );
        assert_eq!(
            schedule[0].payment_date,
            NaiveDate::from_ymd_opt(2024, 2, 8).unwrap()
        );
        assert!(schedule.iter().all(|d| d.etf_index == 2));
    }

    #[test]
    fn test_plan_from_embedded_catalog() {
        let catalog = SeedCatalog::embedded().unwrap();
        let plan = SeedPlan::build(&catalog, run_date());

        assert_eq!(plan.etfs.len(), 50);
        assert_eq!(plan.holdings.len(), 5);
        assert_eq!(plan.dividends.len(), 15);

        for position in 0..5 {
            let count = plan
                .dividends
                .iter()
                .filter(|d| d.etf_index == position)
                .count();
            assert_eq!(count, 3);
        }
        assert!(plan.dividends.iter().all(|d| d.etf_index < 5));

        // JEPQ: 58000 * 10.2 / 100 / 12
        let jepq = &plan.dividends[0];
        assert!((jepq.dividend_per_share - 493.0).abs() < 1e-9);
        assert_eq!(jepq.frequency, DividendFrequency::Monthly);
    }

    #[test]
    fn test_holdings_are_taken_verbatim() {
        let catalog = SeedCatalog::embedded().unwrap();
        let plan = SeedPlan::build(&catalog, run_date());

        for (index, (planned, literal)) in plan.holdings.iter().zip(&catalog.holdings).enumerate() {
            assert_eq!(planned.etf_index, index);
            assert_eq!(planned.shares, literal.shares);
            assert_eq!(planned.avg_price, literal.avg_price);
            assert_eq!(planned.total_invested, literal.total_invested);
        }

        let portfolio = plan.holdings[1].clone().into_new_portfolio(42);
        assert_eq!(portfolio.etf_id, 42);
        assert_eq!(portfolio.shares, 15.0);
        assert_eq!(portfolio.avg_price, 60000.0);
    }

    #[test]
    fn test_catalog_without_holdings_plans_no_dividends() {
        let catalog = SeedCatalog {
            version: 1,
            etfs: vec![etf_with("AAA", 10.0, 9.0)],
            holdings: vec![],
        };
        let plan = SeedPlan::build(&catalog, run_date());
        assert_eq!(plan.etfs.len(), 1);
        assert!(plan.holdings.is_empty());
        assert!(plan.dividends.is_empty());
    }

    proptest! {
        #[test]
        fn prop_schedule_invariants(
            price in 1.0f64..500_000.0,
            dividend_yield in 0.0f64..20.0,
            position in 0usize..5,
            day_offset in 0i64..3650,
        ) {
            let today = run_date() + Duration::days(day_offset);
            let etf = etf_with("PROP", price, dividend_yield);
            let schedule = dividend_schedule(&etf, position, today);

            prop_assert_eq!(schedule.len(), 3);
            for pair in schedule.windows(2) {
                prop_assert!(pair[0].ex_dividend_date < pair[1].ex_dividend_date);
            }
            for (event, base) in schedule.iter().zip(EX_DIVIDEND_BASE_OFFSETS_DAYS) {
                prop_assert_eq!(
                    event.ex_dividend_date,
                    today + Duration::days(base + 7 * position as i64)
                );
                prop_assert_eq!(event.payment_date, event.ex_dividend_date + Duration::days(14));

                let expected = price * dividend_yield / 100.0 / 12.0;
                prop_assert!((event.dividend_per_share - expected).abs() <= 1e-9 * expected.max(1.0));

                let monthly = event.frequency == DividendFrequency::Monthly;
                prop_assert_eq!(monthly, dividend_yield > 5.0);
                if !monthly {
                    prop_assert_eq!(&event.frequency, &DividendFrequency::Quarterly);
                }
            }
        }
    }
}
