//! MSN Processor CLI
//!
//! Command-line tool for decoding the UK rail Master Station Names file and
//! querying live transport APIs with the codes it contains.

use clap::Parser;
use colored::Colorize;
use msn_processor::Error;
use msn_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to create async runtime: {e}");
            process::exit(1);
        }
    };

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            _ = tokio::signal::ctrl_c() => {
                eprintln!();
                eprintln!("Received Ctrl+C, shutting down...");
                Err(Error::processing_interrupted("cancelled by user"))
            }
        }
    });

    match result {
        Ok(()) => process::exit(0),
        Err(Error::ProcessingInterrupted { .. }) => process::exit(130),
        Err(error) => {
            eprintln!("{} {error}", "Error:".red().bold());
            process::exit(1);
        }
    }
}

fn show_help_and_commands() {
    println!(
        "{}",
        "MSN Processor - UK rail station reference data tool"
            .bold()
            .cyan()
    );
    println!();
    println!("Decodes the Master Station Names (MSN) fixed-width file into a JSON");
    println!("station snapshot, answers station lookups against it, and queries live");
    println!("departure, timetable, and disruption data from public transport APIs.");
    println!();
    println!("{}", "Commands:".bold());
    println!("  parse       Parse an MSN file into a JSON station snapshot");
    println!("  lookup      Look up stations by CRS code, TIPLOC code, or name");
    println!("  departures  Show the live departure board for a station");
    println!("  timetable   Show the timetable for a train service");
    println!("  tfl         Query TfL modes, routes, line status, and disruptions");
    println!("  describe    Explain the station and train code systems");
    println!();
    println!("{}", "Examples:".bold());
    println!("  msn-processor parse -i data/ttisf074.msn");
    println!("  msn-processor lookup --crs ZFD");
    println!("  msn-processor lookup --name tamworth --format json");
    println!("  msn-processor departures COV --count 5");
    println!("  msn-processor timetable W64533 --date 2026-08-30");
    println!("  msn-processor tfl status --disrupted-only");
    println!();
    println!("Run 'msn-processor <command> --help' for details on a command.");
}
