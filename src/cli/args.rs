//! Command-line argument definitions for MSN processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::constants::{DEFAULT_DEPARTURE_LIMIT, DEFAULT_TRAIN_MODES};
use crate::{Error, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the MSN processor
///
/// Parses the UK rail Master Station Names file into a queryable station
/// snapshot, and queries live UK transport APIs using the codes it decodes.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "msn-processor",
    version,
    about = "Parse the UK rail Master Station Names file and query live transport APIs",
    long_about = "Decodes station detail records from the fixed-width Master Station Names \
                  (MSN) file distributed with UK timetable data, persists them as a JSON \
                  snapshot, and provides lookups by CRS code, TIPLOC code, or station name. \
                  Lookups can chain into live departure boards from transportapi.com, and a \
                  separate command family queries TfL line status and disruption data."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands for the MSN processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse an MSN file into a JSON station snapshot
    Parse(ParseArgs),
    /// Look up stations by CRS code, TIPLOC code, or name (interactive without flags)
    Lookup(LookupArgs),
    /// Show the live departure board for a station
    Departures(DeparturesArgs),
    /// Show the timetable for a train service
    Timetable(TimetableArgs),
    /// Query the TfL API for modes, routes, status, and disruptions
    Tfl(TflArgs),
    /// Explain the station and train code systems used by these commands
    Describe,
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// Input path to the Master Station Names file
    ///
    /// The .msn file distributed with the timetable data download,
    /// e.g. data/ttis074/ttisf074.msn.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Path to the .msn Master Station Names file"
    )]
    pub input_path: PathBuf,

    /// Output path for the JSON station snapshot
    ///
    /// Overwritten on every run. If not specified, the snapshot is written
    /// to the default location under the user cache directory.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output path for the JSON station snapshot"
    )]
    pub output_path: Option<PathBuf>,
}

impl ParseArgs {
    /// Validate the parse command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.exists() {
            return Err(Error::configuration(format!(
                "Input path does not exist: {}",
                self.input_path.display()
            )));
        }

        if !self.input_path.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.input_path.display()
            )));
        }

        Ok(())
    }
}

/// Arguments for the lookup command
///
/// With a selector flag the matching records are printed and the command
/// exits; with no selector an interactive menu runs instead.
#[derive(Debug, Clone, Parser)]
pub struct LookupArgs {
    /// Look up by 3-alpha (CRS) code, matching principal and subsidiary codes
    #[arg(long = "crs", value_name = "CODE", conflicts_with_all = ["tiploc", "name"])]
    pub crs: Option<String>,

    /// Look up by TIPLOC location code
    #[arg(long = "tiploc", value_name = "CODE", conflicts_with = "name")]
    pub tiploc: Option<String>,

    /// Look up by case-insensitive name substring
    #[arg(long = "name", value_name = "TEXT")]
    pub name: Option<String>,

    /// Station snapshot to query
    ///
    /// If not specified, the default snapshot location is used. Run the
    /// parse command first to produce a snapshot.
    #[arg(
        short = 's',
        long = "snapshot",
        value_name = "FILE",
        help = "Station snapshot to query"
    )]
    pub snapshot_path: Option<PathBuf>,

    /// Output format for matching records
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for matching records"
    )]
    pub output_format: OutputFormat,
}

/// The lookup predicate selected on the command line
#[derive(Debug, Clone)]
pub enum LookupSelector {
    Crs(String),
    Tiploc(String),
    Name(String),
}

impl LookupArgs {
    /// The selector given on the command line, or None for interactive mode
    pub fn selector(&self) -> Option<LookupSelector> {
        if let Some(crs) = &self.crs {
            Some(LookupSelector::Crs(crs.clone()))
        } else if let Some(tiploc) = &self.tiploc {
            Some(LookupSelector::Tiploc(tiploc.clone()))
        } else {
            self.name.clone().map(LookupSelector::Name)
        }
    }
}

/// Arguments for the departures command
#[derive(Debug, Clone, Parser)]
pub struct DeparturesArgs {
    /// CRS code of the station, e.g. ZFD
    #[arg(value_name = "CRS")]
    pub crs: String,

    /// Number of services to return
    #[arg(
        short = 'c',
        long = "count",
        value_name = "N",
        default_value_t = DEFAULT_DEPARTURE_LIMIT,
        help = "Number of services to return"
    )]
    pub count: u32,
}

impl DeparturesArgs {
    /// Validate the departures command arguments
    pub fn validate(&self) -> Result<()> {
        validate_crs_argument(&self.crs)
    }
}

/// Arguments for the timetable command
#[derive(Debug, Clone, Parser)]
pub struct TimetableArgs {
    /// Train UID identifying the service, e.g. W64533
    #[arg(value_name = "TRAIN_UID")]
    pub train_uid: String,

    /// Running date (YYYY-MM-DD); defaults to today
    #[arg(short = 'd', long = "date", value_name = "DATE")]
    pub date: Option<NaiveDate>,
}

impl TimetableArgs {
    /// Validate the timetable command arguments
    pub fn validate(&self) -> Result<()> {
        if self.train_uid.trim().is_empty() {
            return Err(Error::configuration("Train UID must not be empty"));
        }
        Ok(())
    }

    /// The running date to query, defaulting to today
    pub fn query_date(&self) -> NaiveDate {
        self.date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

/// Arguments for the TfL command family
#[derive(Debug, Clone, Parser)]
pub struct TflArgs {
    #[command(subcommand)]
    pub command: TflCommands,
}

/// TfL API subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum TflCommands {
    /// List all transport modes
    Modes,
    /// Show severity level definitions grouped by mode
    Severity,
    /// Show all lines and their regular routes for the given modes
    Routes(TflModesArgs),
    /// Show the current status of every line on the given modes
    Status(TflStatusArgs),
    /// Show disrupted stop points for one mode
    Disruption(TflDisruptionArgs),
    /// Search stop points by name
    Search(TflSearchArgs),
}

/// Mode selection shared by the routes command
#[derive(Debug, Clone, Parser)]
pub struct TflModesArgs {
    /// Comma-separated list of modes; defaults to the rail-style modes
    #[arg(short = 'm', long = "modes", value_name = "LIST")]
    pub modes: Option<ModeList>,
}

impl TflModesArgs {
    /// The modes to query, falling back to the default rail-style set
    pub fn get_modes(&self) -> Vec<String> {
        match &self.modes {
            Some(list) => list.modes.clone(),
            None => DEFAULT_TRAIN_MODES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Arguments for the TfL status command
#[derive(Debug, Clone, Parser)]
pub struct TflStatusArgs {
    /// Comma-separated list of modes; defaults to the rail-style modes
    #[arg(short = 'm', long = "modes", value_name = "LIST")]
    pub modes: Option<ModeList>,

    /// Only show lines with a non-good-service status
    #[arg(long = "disrupted-only", help = "Only show disrupted lines")]
    pub disrupted_only: bool,
}

impl TflStatusArgs {
    /// The modes to query, falling back to the default rail-style set
    pub fn get_modes(&self) -> Vec<String> {
        match &self.modes {
            Some(list) => list.modes.clone(),
            None => DEFAULT_TRAIN_MODES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Arguments for the TfL disruption command
#[derive(Debug, Clone, Parser)]
pub struct TflDisruptionArgs {
    /// Transport mode to check
    #[arg(
        short = 'm',
        long = "mode",
        value_name = "MODE",
        default_value = "national-rail"
    )]
    pub mode: String,
}

/// Arguments for the TfL stop search command
#[derive(Debug, Clone, Parser)]
pub struct TflSearchArgs {
    /// Stop name to search for, e.g. "st albans"
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Output format options for lookup results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Wrapper for parsing comma-separated transport mode lists
#[derive(Debug, Clone)]
pub struct ModeList {
    pub modes: Vec<String>,
}

impl FromStr for ModeList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let modes: Vec<String> = s
            .split(',')
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .collect();

        if modes.is_empty() {
            return Err(Error::data_validation("Mode list cannot be empty"));
        }

        Ok(ModeList { modes })
    }
}

/// Validate a CRS code argument: exactly three ASCII letters
fn validate_crs_argument(crs: &str) -> Result<()> {
    if crs.len() != 3 || !crs.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(Error::configuration(format!(
            "Invalid CRS code '{}': expected three letters, e.g. ZFD",
            crs
        )));
    }
    Ok(())
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if progress bars should be shown (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}
