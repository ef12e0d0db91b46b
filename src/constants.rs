//! Application constants for MSN processor
//!
//! This module contains the record tags, API endpoints, default values,
//! and filter tables used throughout the MSN processor application.

// =============================================================================
// MSN File Format
// =============================================================================

/// Record type tag for station detail records (matched case-insensitively).
/// Other RSPS5041 record types (header, aliases, groups, connections,
/// trailer) are skipped.
pub const STATION_DETAIL_TAG: char = 'A';

/// Documented length of an MSN record line in characters
pub const MSN_RECORD_LEN: usize = 82;

/// Default file name for the station snapshot produced by the parse command
pub const DEFAULT_SNAPSHOT_FILE_NAME: &str = "stations.json";

// =============================================================================
// External APIs
// =============================================================================

/// Base URL for the transportapi.com train data endpoints
pub const TRANSPORT_API_BASE_URL: &str = "https://fcc.transportapi.com";

/// Base URL for the TfL unified API
pub const TFL_BASE_URL: &str = "https://api.tfl.gov.uk";

/// Default TfL application credentials (public demo key pair), overridable
/// via the TFL_APP_ID / TFL_APP_KEY environment variables
pub const DEFAULT_TFL_APP_ID: &str = "03a0c519";
pub const DEFAULT_TFL_APP_KEY: &str = "9f418ee21efced9b919d6da9bef9f88b";

/// Default HTTP request timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Default number of services requested from the live departures endpoint
pub const DEFAULT_DEPARTURE_LIMIT: u32 = 10;

// =============================================================================
// TfL Status Interpretation
// =============================================================================

/// Severity codes that count as "good service" when filtering for
/// disruptions. Everything else is reported as disrupted.
pub const SEVERITY_OK_CODES: &[i64] = &[10, 18, 19];

/// Rail-style transport modes checked by default when no mode list is given
pub const DEFAULT_TRAIN_MODES: &[&str] = &[
    "dlr",
    "national-rail",
    "overground",
    "tflrail",
    "tram",
    "tube",
];
