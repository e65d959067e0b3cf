//! SQLite storage implementation for ETFs.

mod model;
mod repository;

pub use model::{EtfDB, EtfQuoteUpdateDB, NewEtfDB};
pub(crate) use repository::insert_etf;
pub use repository::EtfRepository;
