//! JSON snapshot persistence
//!
//! A parse run can be written out as a pretty-printed JSON array of station
//! records and loaded back later, so the `lookup` command does not need to
//! re-decode the MSN file on every invocation. The snapshot is overwritten
//! on each parse run and treated as read-only reference data by readers.

use super::StationRegistry;
use crate::app::models::StationRecord;
use crate::{Error, Result};
use std::path::Path;
use tracing::info;

impl StationRegistry {
    /// Write the registry to a JSON snapshot file, overwriting any previous
    /// snapshot at that path.
    pub fn write_snapshot(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.records)
            .map_err(|e| Error::snapshot(path.display().to_string(), "serialization failed", Some(e)))?;

        std::fs::write(path, json).map_err(|e| {
            Error::io(
                format!("failed to write snapshot {}", path.display()),
                e,
            )
        })?;

        info!(
            "Wrote {} station records to {}",
            self.records.len(),
            path.display()
        );
        Ok(())
    }

    /// Load a registry from a JSON snapshot produced by `write_snapshot`
    pub fn load_snapshot(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("failed to read snapshot {}", path.display()),
                e,
            )
        })?;

        let records: Vec<StationRecord> = serde_json::from_str(&content).map_err(|e| {
            Error::snapshot(
                path.display().to_string(),
                "deserialization failed",
                Some(e),
            )
        })?;

        info!(
            "Loaded {} station records from snapshot {}",
            records.len(),
            path.display()
        );

        Ok(Self {
            records,
            source_path: path.to_path_buf(),
        })
    }
}
