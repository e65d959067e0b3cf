//! ETFs module - domain models and repository trait.

mod etfs_model;
mod etfs_traits;


pub use etfs_model::{Etf, EtfQuoteUpdate, EtfRanking, NewEtf, ReturnPeriod, TopHolding};
pub use etfs_traits::EtfRepositoryTrait;
