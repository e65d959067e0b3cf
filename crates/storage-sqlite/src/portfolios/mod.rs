//! SQLite storage implementation for portfolio holdings.

mod model;
mod repository;

pub use model::{NewPortfolioDB, PortfolioDB};
pub(crate) use repository::insert_portfolio;
pub use repository::PortfolioRepository;
