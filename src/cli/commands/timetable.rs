//! Timetable command implementation

use crate::cli::args::TimetableArgs;
use crate::cli::commands::shared;
use crate::{Config, Result};
use tracing::info;

/// Run the timetable command: print the service timetable as JSON
pub async fn run_timetable(args: TimetableArgs, config: &Config) -> Result<()> {
    args.validate()?;

    let date = args.query_date();
    info!(train_uid = %args.train_uid, %date, "Querying service timetable");

    let client = config.transport_api_client()?;
    let timetable = client.train_timetable(&args.train_uid, date).await?;
    shared::print_json(&timetable)
}
