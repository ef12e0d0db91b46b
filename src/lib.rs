//! MSN Processor Library
//!
//! A Rust library for working with the UK rail Master Station Names (MSN)
//! reference file and the public transport APIs that consume its codes.
//!
//! This library provides tools for:
//! - Parsing MSN fixed-width station detail records by byte offset
//! - Loading station records into an in-memory registry for fast lookups
//! - Querying stations by CRS code, TIPLOC code, or name substring
//! - Persisting a parse run as a JSON snapshot for later lookups
//! - Querying live departures and timetables from transportapi.com
//! - Querying line status and disruption data from the TfL API

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod station_registry;
        pub mod transport_api;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::{InterchangeStatus, StationRecord};
pub use app::services::station_registry::StationRegistry;
pub use config::Config;

/// Result type alias for the MSN processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for MSN processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Fixed-width record format error
    #[error("MSN format error at line {line}: {message}")]
    RecordFormat { line: usize, message: String },

    /// Interchange code outside the documented {0,1,2,3,9} set
    #[error("unknown interchange code '{code}' at line {line}")]
    UnknownInterchangeCode { code: String, line: usize },

    /// Snapshot serialization/deserialization error
    #[error("snapshot error for '{path}': {message}")]
    Snapshot {
        path: String,
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("data validation error: {message}")]
    DataValidation { message: String },

    /// Invalid interactive user input
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// HTTP transport failure
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-success status returned by an external API
    #[error("API returned status {status}: {body}")]
    ApiStatus { status: u16, body: String },

    /// Response body could not be decoded as the expected JSON shape
    #[error("JSON decode error: {message}")]
    JsonDecode {
        message: String,
        body: Option<String>,
    },

    /// Processing interrupted (e.g. by Ctrl+C)
    #[error("processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a record format error with its 1-based line number
    pub fn record_format(line: usize, message: impl Into<String>) -> Self {
        Self::RecordFormat {
            line,
            message: message.into(),
        }
    }

    /// Create an unknown interchange code error
    pub fn unknown_interchange_code(code: impl Into<String>, line: usize) -> Self {
        Self::UnknownInterchangeCode {
            code: code.into(),
            line,
        }
    }

    /// Create a snapshot error
    pub fn snapshot(
        path: impl Into<String>,
        message: impl Into<String>,
        source: Option<serde_json::Error>,
    ) -> Self {
        Self::Snapshot {
            path: path.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an API status error
    pub fn api_status(status: u16, body: impl Into<String>) -> Self {
        Self::ApiStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a JSON decode error, keeping a bounded body snippet for context
    pub fn json_decode(message: impl Into<String>, body: Option<&str>) -> Self {
        Self::JsonDecode {
            message: message.into(),
            body: body.map(|b| b.chars().take(500).collect()),
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Http {
            message: "HTTP request failed".to_string(),
            source: error,
        }
    }
}
