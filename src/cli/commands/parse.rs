//! Parse command implementation

use crate::cli::args::ParseArgs;
use crate::{Config, Error, Result, StationRegistry};
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

/// Run the parse command: decode an MSN file and write the JSON snapshot
pub async fn run_parse(args: ParseArgs, config: &Config, show_progress: bool) -> Result<()> {
    args.validate()?;

    let snapshot_path = resolve_snapshot_path(&args, config);
    info!(
        input = %args.input_path.display(),
        output = %snapshot_path.display(),
        "Starting MSN parse"
    );

    let (registry, stats) = StationRegistry::load_from_msn(&args.input_path, show_progress).await?;

    if let Some(parent) = snapshot_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::io(
                    format!("Failed to create snapshot directory {}", parent.display()),
                    e,
                )
            })?;
        }
    }

    registry.write_snapshot(&snapshot_path)?;

    if show_progress {
        println!();
        println!(
            "{} Decoded {} station records from {}",
            "✓".green().bold(),
            registry.record_count(),
            args.input_path.display()
        );
        println!("  {}", stats.summary());
        println!("  Snapshot written to {}", snapshot_path.display());
    }

    Ok(())
}

fn resolve_snapshot_path(args: &ParseArgs, config: &Config) -> PathBuf {
    args.output_path
        .clone()
        .unwrap_or_else(|| config.snapshot_path.clone())
}
