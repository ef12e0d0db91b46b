//! Data models for MSN processing
//!
//! This module contains the core data structures representing station detail
//! records from the Master Station Names file, following the RSPS5041
//! timetable data specification.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

// =============================================================================
// Interchange Status
// =============================================================================

/// Categorical rank of a station's importance as a transfer point.
///
/// The MSN CATE field uses a closed set of single-character codes. Code 9
/// marks a subsidiary TIPLOC at a station with more than one TIPLOC; such
/// stations always share the same principal CRS code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterchangeStatus {
    /// Code 0: not an interchange point
    None,
    /// Code 1: small interchange point
    Small,
    /// Code 2: medium interchange point
    Medium,
    /// Code 3: large interchange point
    Large,
    /// Code 9: subsidiary TIPLOC of a multi-TIPLOC station
    Subsidiary,
}

impl InterchangeStatus {
    /// Decode the CATE field value.
    ///
    /// Any code outside {0,1,2,3,9} is a fatal format error carrying the
    /// offending code and line number, never a silent default.
    pub fn from_code(code: &str, line: usize) -> Result<Self> {
        match code {
            "0" => Ok(Self::None),
            "1" => Ok(Self::Small),
            "2" => Ok(Self::Medium),
            "3" => Ok(Self::Large),
            "9" => Ok(Self::Subsidiary),
            other => Err(Error::unknown_interchange_code(other, line)),
        }
    }

    /// The single-character code this status is stored as in the MSN file
    pub fn code(&self) -> char {
        match self {
            Self::None => '0',
            Self::Small => '1',
            Self::Medium => '2',
            Self::Large => '3',
            Self::Subsidiary => '9',
        }
    }

    /// Short description of this status for human-readable output
    pub fn description(&self) -> &'static str {
        match self {
            Self::None => "not an interchange",
            Self::Small => "small interchange",
            Self::Medium => "medium interchange",
            Self::Large => "large interchange",
            Self::Subsidiary => "subsidiary TIPLOC",
        }
    }
}

// =============================================================================
// Station Record
// =============================================================================

/// Principal and subsidiary 3-alpha (CRS) codes of a station.
///
/// Where a station has more than one TIPLOC (e.g. Tamworth), the secondary
/// code differs from the principal code; normally the two are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrsPair {
    pub main: String,
    pub secondary: String,
}

/// National grid position in units of 100 m.
///
/// Stations outside the mapped range (Channel Islands, Orkneys, west of
/// Carrick on Shannon) carry the (0,0) sentinel for both ordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCoordinates {
    /// Easting in 100 m units; in-range values run 10000..=18690
    pub easting: u32,
    /// Northing in 100 m units; in-range values run 60126..=69703
    pub northing: u32,
    /// True when the MSN estimate marker ('E') was set for this station
    pub is_estimate: bool,
}

impl GridCoordinates {
    /// Whether this station carries the out-of-mapped-range sentinel
    pub fn is_out_of_range(&self) -> bool {
        self.easting == 0 && self.northing == 0
    }
}

/// A decoded MSN station detail ('A') record.
///
/// One record exists per TIPLOC; stations with several TIPLOCs appear as
/// several records sharing the same principal CRS code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    /// Station name, trimmed of the fixed-width padding
    pub station_name: String,

    /// Interchange status decoded from the CATE field
    pub interchange_status: InterchangeStatus,

    /// Location code as held in the CIF timetable data, at most 7 characters
    #[serde(rename = "TIPLOC")]
    pub tiploc: String,

    /// Principal and subsidiary 3-alpha codes
    #[serde(rename = "CRS")]
    pub crs: CrsPair,

    /// Grid position and estimate flag
    pub coordinates: GridCoordinates,

    /// Recommended change time at this station, in minutes
    pub change_time: u32,
}

impl StationRecord {
    /// Create a new StationRecord with validation
    pub fn new(
        station_name: String,
        interchange_status: InterchangeStatus,
        tiploc: String,
        crs: CrsPair,
        coordinates: GridCoordinates,
        change_time: u32,
    ) -> Result<Self> {
        let record = Self {
            station_name,
            interchange_status,
            tiploc,
            crs,
            coordinates,
            change_time,
        };

        record.validate()?;
        Ok(record)
    }

    /// Validate record fields for consistency with the MSN specification
    pub fn validate(&self) -> Result<()> {
        if self.station_name.is_empty() {
            return Err(Error::data_validation("station name must not be empty"));
        }

        if self.tiploc.is_empty() || self.tiploc.len() > 7 {
            return Err(Error::data_validation(format!(
                "invalid TIPLOC '{}': must be 1-7 characters",
                self.tiploc
            )));
        }

        if self.crs.main.len() != 3 {
            return Err(Error::data_validation(format!(
                "invalid principal CRS code '{}': must be 3 characters",
                self.crs.main
            )));
        }

        if self.crs.secondary.len() != 3 {
            return Err(Error::data_validation(format!(
                "invalid subsidiary CRS code '{}': must be 3 characters",
                self.crs.secondary
            )));
        }

        Ok(())
    }

    /// Whether the given 3-alpha code identifies this record, either as the
    /// principal or the subsidiary CRS code. Comparison is case-insensitive.
    pub fn matches_crs(&self, code: &str) -> bool {
        self.crs.main.eq_ignore_ascii_case(code) || self.crs.secondary.eq_ignore_ascii_case(code)
    }
}
