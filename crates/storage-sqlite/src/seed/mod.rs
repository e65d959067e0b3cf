//! SQLite storage implementation for sample-data seeding.

mod repository;

pub use repository::SeedRepository;
