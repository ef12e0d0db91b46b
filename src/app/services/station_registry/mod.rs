//! Station registry service for MSN station lookups
//!
//! This module loads station detail records from a Master Station Names file
//! and provides linear-scan lookups by CRS code, TIPLOC code, or name
//! substring. The registry is the in-memory hand-off between the parse stage
//! and the query stage; the JSON snapshot is an optional persisted artifact.

use crate::app::models::StationRecord;
use std::path::PathBuf;

pub mod loader;
pub mod metadata;
pub mod parser;
pub mod query;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use metadata::LoadStats;

/// In-memory registry of decoded MSN station detail records.
///
/// Records keep their file order; stations with several TIPLOCs contribute
/// one record per TIPLOC, all sharing the principal CRS code.
#[derive(Debug, Clone)]
pub struct StationRegistry {
    /// Decoded records in file order
    pub(crate) records: Vec<StationRecord>,

    /// Path the registry was loaded from (MSN file or snapshot)
    pub(crate) source_path: PathBuf,
}

impl StationRegistry {
    /// Create a new empty registry for the given source path
    pub fn new(source_path: PathBuf) -> Self {
        Self {
            records: Vec::new(),
            source_path,
        }
    }

    /// All records in file order
    pub fn records(&self) -> &[StationRecord] {
        &self.records
    }

    /// Total number of records in the registry
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Path this registry was loaded from
    pub fn source_path(&self) -> &std::path::Path {
        &self.source_path
    }
}
