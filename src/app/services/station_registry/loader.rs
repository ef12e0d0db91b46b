//! Station registry loading from MSN files
//!
//! Reads the Master Station Names file line by line, decodes station detail
//! records, and collects them into a registry. The first format error aborts
//! the load; other record types are skipped without comment.

use super::StationRegistry;
use super::metadata::LoadStats;
use super::parser::parse_station_line;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

impl StationRegistry {
    /// Load station records from a Master Station Names file.
    ///
    /// Every line whose first character is the station detail tag is decoded
    /// at fixed byte offsets; all other record types (header, aliases,
    /// groups, connections, trailers) are skipped. A malformed detail record
    /// (truncated line, non-numeric ordinate, or an interchange code outside
    /// the documented set) aborts the load with the offending line number.
    ///
    /// # Arguments
    /// * `msn_path` - Path to the .msn file
    /// * `show_progress` - Whether to display a progress bar
    pub async fn load_from_msn(
        msn_path: &Path,
        show_progress: bool,
    ) -> Result<(Self, LoadStats)> {
        info!("Loading station registry from {}", msn_path.display());

        let start_time = Instant::now();
        let mut registry = Self::new(msn_path.to_path_buf());
        let mut stats = LoadStats::new();

        let content = tokio::fs::read_to_string(msn_path).await.map_err(|e| {
            Error::io(format!("failed to read MSN file {}", msn_path.display()), e)
        })?;

        let line_count = content.lines().count();
        debug!("MSN file contains {} lines", line_count);

        let progress_bar = if show_progress {
            let pb = ProgressBar::new(line_count as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .unwrap()
                    .progress_chars("#>-"),
            );
            pb.set_message("Decoding station records...");
            Some(pb)
        } else {
            None
        };

        for (index, line) in content.lines().enumerate() {
            let line_number = index + 1;
            stats.lines_read += 1;

            if let Some(pb) = &progress_bar {
                pb.set_position(line_number as u64);
            }

            match parse_station_line(line, line_number)? {
                Some(record) => {
                    registry.records.push(record);
                    stats.records_loaded += 1;
                }
                None => stats.lines_skipped += 1,
            }
        }

        if let Some(pb) = &progress_bar {
            pb.finish_with_message(format!("Decoded {} station records", stats.records_loaded));
        }

        stats.load_duration = start_time.elapsed();
        info!("{}", stats.summary());

        Ok((registry, stats))
    }
}
