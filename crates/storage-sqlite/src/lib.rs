//! SQLite storage implementation for the ETF tracker.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `etf-tracker-core` and contains:
//! - Database connection pooling and the single-writer actor
//! - Diesel migrations
//! - Repository implementations for ETFs, portfolio holdings and dividends
//! - The transactional writer behind sample-data seeding
//!
//! # Architecture
//!
//! This crate is the only place in the workspace where Diesel dependencies exist.
//! `core` and the `seed` binary work with the traits only.
//!
//! ```text
//! apps/seed ──► core (domain, seed plan)
//!     │              ▲
//!     └──────► storage-sqlite (this crate)
//!                    │
//!                    ▼
//!                SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod dividends;
pub mod etfs;
pub mod portfolios;
pub mod seed;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

pub use errors::StorageError;

// Re-export from etf-tracker-core for convenience
pub use etf_tracker_core::errors::{DatabaseError, Error, Result};
