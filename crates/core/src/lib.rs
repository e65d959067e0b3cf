//! ETF Tracker Core - domain entities, seed derivation, and storage traits.
//!
//! This crate is database-agnostic. It defines the ETF, portfolio and
//! dividend models together with repository traits that are implemented by
//! the `storage-sqlite` crate.

pub mod dividends;
pub mod errors;
pub mod etfs;
pub mod portfolios;
pub mod seed;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
