//! Departures command implementation

use crate::cli::args::DeparturesArgs;
use crate::cli::commands::shared;
use crate::{Config, Result};
use tracing::info;

/// Run the departures command: print the live departure board as JSON
pub async fn run_departures(args: DeparturesArgs, config: &Config) -> Result<()> {
    args.validate()?;

    info!(crs = %args.crs, count = args.count, "Querying live departure board");

    let client = config.transport_api_client()?;
    let board = client.live_departures(&args.crs, args.count).await?;
    shared::print_json(&board)
}
