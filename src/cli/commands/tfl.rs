//! TfL command family implementation

use crate::app::services::transport_api::tfl::{Line, disrupted_only};
use crate::cli::args::{TflArgs, TflCommands};
use crate::cli::commands::shared;
use crate::{Config, Result};
use colored::Colorize;
use tracing::info;

/// Run one of the TfL subcommands
pub async fn run_tfl(args: TflArgs, config: &Config) -> Result<()> {
    let client = config.tfl_client()?;

    match args.command {
        TflCommands::Modes => {
            let modes = client.modes().await?;
            shared::print_json(&modes)
        }
        TflCommands::Severity => {
            let by_mode = client.severity_by_mode().await?;
            shared::print_json(&by_mode)
        }
        TflCommands::Routes(mode_args) => {
            let modes = mode_args.get_modes();
            info!(modes = %modes.join(","), "Querying lines and routes");
            let routes = client.lines_and_routes(&modes).await?;
            shared::print_json(&routes)
        }
        TflCommands::Status(status_args) => {
            let modes = status_args.get_modes();
            info!(modes = %modes.join(","), "Querying line status");
            let lines = client.line_status(&modes).await?;
            print_line_status(&lines, status_args.disrupted_only);
            Ok(())
        }
        TflCommands::Disruption(disruption_args) => {
            info!(mode = %disruption_args.mode, "Querying stop point disruption");
            let disruption = client.stop_disruption(&disruption_args.mode).await?;
            shared::print_json(&disruption)
        }
        TflCommands::Search(search_args) => {
            info!(name = %search_args.name, "Searching stop points");
            let results = client.search_stops(&search_args.name).await?;
            shared::print_json(&results)
        }
    }
}

fn print_line_status(lines: &[Line], disrupted_filter: bool) {
    if disrupted_filter {
        let disrupted = disrupted_only(lines);
        if disrupted.is_empty() {
            println!("{}", "Good service on all queried lines.".green());
            return;
        }
        for line in disrupted {
            print_line(line);
        }
        return;
    }

    for line in lines {
        print_line(line);
    }
}

fn print_line(line: &Line) {
    let heading = format!("{} [{}]", line.name, line.mode_name);
    if line.is_disrupted() {
        println!("{}", heading.red().bold());
        for status in line.disrupted_statuses() {
            println!(
                "  {} (severity {})",
                status.status_severity_description, status.status_severity
            );
            if let Some(reason) = &status.reason {
                println!("    {reason}");
            }
        }
    } else {
        println!("{} {}", heading.green(), "good service".dimmed());
    }
}
