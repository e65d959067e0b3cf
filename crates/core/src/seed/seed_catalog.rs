//! Static sample catalog used to bootstrap an empty store.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::errors::{CatalogError, Result};
use crate::etfs::NewEtf;

const EMBEDDED_CATALOG: &str = include_str!("../../data/etf_catalog.json");

/// Format version assumed when a catalog file does not state one.
pub const CATALOG_VERSION: u32 = 1;

fn default_version() -> u32 {
    CATALOG_VERSION
}

/// Literal holding values for one catalog ETF.
///
/// Holdings are matched to ETFs by position: the first holding belongs to the
/// first catalog ETF, and so on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeedHolding {
    pub shares: f64,
    pub avg_price: f64,
    pub total_invested: f64,
}

/// Catalog of sample ETFs and holdings. `version` is optional in the file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeedCatalog {
    #[serde(default = "default_version")]
    pub version: u32,
    pub etfs: Vec<NewEtf>,
    #[serde(default)]
    pub holdings: Vec<SeedHolding>,
}

impl SeedCatalog {
    /// Catalog compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json_str(EMBEDDED_CATALOG)
    }

    /// Loads a catalog override from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| CatalogError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let catalog: SeedCatalog = serde_json::from_str(raw).map_err(CatalogError::Parse)?;
        catalog.validate()?;
        debug!(
            "Loaded seed catalog v{} with {} ETFs and {} holdings",
            catalog.version,
            catalog.etfs.len(),
            catalog.holdings.len()
        );
        Ok(catalog)
    }

    /// Checks the structural rules a catalog must satisfy before seeding.
    pub fn validate(&self) -> std::result::Result<(), CatalogError> {
        if self.etfs.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(self.etfs.len());
        for etf in &self.etfs {
            if !seen.insert(etf.ticker.as_str()) {
                return Err(CatalogError::DuplicateTicker(etf.ticker.clone()));
            }
        }

        if self.holdings.len() > self.etfs.len() {
            return Err(CatalogError::TooManyHoldings {
                holdings: self.holdings.len(),
                etfs: self.etfs.len(),
            });
        }

        Ok(())
    }
}
