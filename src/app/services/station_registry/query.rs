//! Station lookup functionality
//!
//! Linear-scan predicate lookups over the registry. Each query returns all
//! matching records; a miss is an empty vector, never an error. Callers
//! handle the multi-match case explicitly (the interactive CLI prompts the
//! user to disambiguate).

use super::StationRegistry;
use crate::app::models::StationRecord;

impl StationRegistry {
    /// Find stations by 3-alpha (CRS) code.
    ///
    /// Matches against both the principal and the subsidiary code, so a
    /// multi-TIPLOC station is findable via either. Matching is exact but
    /// case-insensitive.
    pub fn find_by_crs(&self, code: &str) -> Vec<&StationRecord> {
        self.records
            .iter()
            .filter(|record| record.matches_crs(code))
            .collect()
    }

    /// Find stations by TIPLOC code (exact, case-insensitive)
    pub fn find_by_tiploc(&self, tiploc: &str) -> Vec<&StationRecord> {
        self.records
            .iter()
            .filter(|record| record.tiploc.eq_ignore_ascii_case(tiploc))
            .collect()
    }

    /// Find stations whose name contains the given pattern.
    ///
    /// The search is case-insensitive and supports partial matches, so
    /// "coventry" finds a record stored as "COVENTRY".
    pub fn find_by_name(&self, pattern: &str) -> Vec<&StationRecord> {
        let pattern_lower = pattern.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.station_name.to_lowercase().contains(&pattern_lower))
            .collect()
    }
}
