//! Shared utilities for command implementations

use crate::{Error, Result};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Set up logging with the specified level
///
/// Log output goes to stderr so that JSON written to stdout stays pipeable.
pub fn setup_logging(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(format!("msn_processor={log_level}"))
        .map_err(|e| Error::configuration(format!("Invalid log level '{log_level}': {e}")))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    Ok(())
}

/// Pretty-print a serializable value as JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| Error::json_decode(format!("Failed to render JSON output: {e}"), None))?;
    println!("{rendered}");
    Ok(())
}
