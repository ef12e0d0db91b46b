//! Command implementations for the MSN processor CLI

pub mod departures;
pub mod describe;
pub mod lookup;
pub mod parse;
pub mod shared;
pub mod tfl;
pub mod timetable;

use crate::cli::args::{Args, Commands};
use crate::{Config, Result};

/// Dispatch the parsed command line to its implementation
pub async fn run(args: Args) -> Result<()> {
    shared::setup_logging(args.get_log_level())?;

    let config = Config::from_env();
    config.validate()?;

    let show_progress = args.show_progress();

    match args.get_command() {
        Commands::Parse(parse_args) => parse::run_parse(parse_args, &config, show_progress).await,
        Commands::Lookup(lookup_args) => lookup::run_lookup(lookup_args, &config).await,
        Commands::Departures(departures_args) => {
            departures::run_departures(departures_args, &config).await
        }
        Commands::Timetable(timetable_args) => {
            timetable::run_timetable(timetable_args, &config).await
        }
        Commands::Tfl(tfl_args) => tfl::run_tfl(tfl_args, &config).await,
        Commands::Describe => {
            describe::run_describe();
            Ok(())
        }
    }
}
