//! Lookup command implementation
//!
//! With a selector flag this is a one-shot query against the snapshot; with
//! no flags it runs an interactive menu that can chain a matched station
//! into a live departure board.

use crate::cli::args::{LookupArgs, LookupSelector, OutputFormat};
use crate::cli::commands::{describe, shared};
use crate::cli::input::{self, LookupChoice};
use crate::constants::DEFAULT_DEPARTURE_LIMIT;
use crate::{Config, Error, Result, StationRecord, StationRegistry};
use colored::Colorize;
use std::path::PathBuf;
use tracing::{debug, info};

/// Run the lookup command
pub async fn run_lookup(args: LookupArgs, config: &Config) -> Result<()> {
    let snapshot_path = resolve_snapshot_path(&args, config);
    let registry = load_registry(&snapshot_path)?;
    info!(
        snapshot = %snapshot_path.display(),
        records = registry.record_count(),
        "Loaded station snapshot"
    );

    match args.selector() {
        Some(selector) => {
            let matches = query(&registry, &selector);
            print_matches(&matches, args.output_format)
        }
        None => run_interactive(&registry, config).await,
    }
}

fn resolve_snapshot_path(args: &LookupArgs, config: &Config) -> PathBuf {
    args.snapshot_path
        .clone()
        .unwrap_or_else(|| config.snapshot_path.clone())
}

fn load_registry(snapshot_path: &PathBuf) -> Result<StationRegistry> {
    if !snapshot_path.exists() {
        return Err(Error::configuration(format!(
            "Station snapshot not found at {}. Run 'msn-processor parse' first.",
            snapshot_path.display()
        )));
    }
    StationRegistry::load_snapshot(snapshot_path)
}

fn query<'a>(registry: &'a StationRegistry, selector: &LookupSelector) -> Vec<&'a StationRecord> {
    match selector {
        LookupSelector::Crs(code) => registry.find_by_crs(code),
        LookupSelector::Tiploc(code) => registry.find_by_tiploc(code),
        LookupSelector::Name(pattern) => registry.find_by_name(pattern),
    }
}

fn print_matches(matches: &[&StationRecord], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => shared::print_json(&matches),
        OutputFormat::Human => {
            if matches.is_empty() {
                println!("{}", "No matching stations found.".yellow());
                return Ok(());
            }
            for record in matches {
                print_record(record);
            }
            println!(
                "{}",
                format!("{} matching record(s)", matches.len()).dimmed()
            );
            Ok(())
        }
    }
}

fn print_record(record: &StationRecord) {
    println!(
        "{} {}",
        record.station_name.bold(),
        format!("[{}]", record.interchange_status.description()).dimmed()
    );
    println!(
        "  TIPLOC: {}  CRS: {}/{}",
        record.tiploc, record.crs.main, record.crs.secondary
    );
    if record.coordinates.is_out_of_range() {
        println!("  Grid: outside mapped range");
    } else {
        let estimate = if record.coordinates.is_estimate {
            " (estimated)"
        } else {
            ""
        };
        println!(
            "  Grid: E{} N{} in 100 m units{}",
            record.coordinates.easting, record.coordinates.northing, estimate
        );
    }
    println!("  Change time: {} min", record.change_time);
}

async fn run_interactive(registry: &StationRegistry, config: &Config) -> Result<()> {
    let choice = input::prompt_lookup_choice()?;

    let selector = match choice {
        LookupChoice::Describe => {
            describe::run_describe();
            return Ok(());
        }
        LookupChoice::Crs => LookupSelector::Crs(input::prompt_line("Enter CRS code: ")?),
        LookupChoice::Tiploc => LookupSelector::Tiploc(input::prompt_line("Enter TIPLOC code: ")?),
        LookupChoice::Name => LookupSelector::Name(input::prompt_line("Enter station name: ")?),
    };

    let matches = query(registry, &selector);
    print_matches(&matches, OutputFormat::Human)?;

    if matches.is_empty() {
        return Ok(());
    }

    if !input::prompt_confirmation("Show the live departure board for this station?", false)? {
        return Ok(());
    }

    let record = select_record(&matches)?;
    debug!(crs = %record.crs.main, "Querying live departures");

    let client = config.transport_api_client()?;
    let departures = client
        .live_departures(&record.crs.main, DEFAULT_DEPARTURE_LIMIT)
        .await?;
    shared::print_json(&departures)
}

fn select_record<'a>(matches: &[&'a StationRecord]) -> Result<&'a StationRecord> {
    if matches.len() == 1 {
        return Ok(matches[0]);
    }

    println!();
    println!("Several records matched. Which station?");
    for (index, record) in matches.iter().enumerate() {
        println!(
            "  {}. {} (TIPLOC {}, CRS {})",
            index + 1,
            record.station_name,
            record.tiploc,
            record.crs.main
        );
    }
    let index = input::prompt_index_selection(matches.len())?;
    Ok(matches[index])
}
