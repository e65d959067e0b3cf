//! SQLite storage implementation for dividend events.

mod model;
mod repository;

pub use model::{DividendDB, NewDividendDB};
pub(crate) use repository::insert_dividend;
pub use repository::DividendRepository;
