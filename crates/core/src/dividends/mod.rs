//! Dividends module - dividend event models and repository trait.

mod dividends_model;
mod dividends_traits;

pub use dividends_model::{
    Dividend, DividendCalendarItem, DividendFrequency, NewDividend, FREQUENCY_ANNUAL,
    FREQUENCY_MONTHLY, FREQUENCY_QUARTERLY, FREQUENCY_SEMI_ANNUAL,
};
pub use dividends_traits::DividendRepositoryTrait;
