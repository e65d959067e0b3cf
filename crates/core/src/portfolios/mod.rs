//! Portfolios module - holding models and repository trait.

mod portfolios_model;
mod portfolios_traits;

pub use portfolios_model::{NewPortfolio, Portfolio, PortfolioWithEtf};
pub use portfolios_traits::PortfolioRepositoryTrait;
