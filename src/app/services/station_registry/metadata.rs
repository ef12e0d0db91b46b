//! Load statistics for a registry parse run

/// Statistics about one MSN parse run
#[derive(Debug, Clone)]
pub struct LoadStats {
    /// Lines read from the input file, including skipped record types
    pub lines_read: usize,

    /// Station detail records decoded into the registry
    pub records_loaded: usize,

    /// Lines skipped because their tag is not the station detail tag
    pub lines_skipped: usize,

    /// Time taken to load the registry
    pub load_duration: std::time::Duration,
}

impl LoadStats {
    /// Create new empty load statistics
    pub fn new() -> Self {
        Self {
            lines_read: 0,
            records_loaded: 0,
            lines_skipped: 0,
            load_duration: std::time::Duration::ZERO,
        }
    }

    /// Loading rate in records per second
    pub fn loading_rate(&self) -> f64 {
        if self.load_duration.is_zero() {
            0.0
        } else {
            self.records_loaded as f64 / self.load_duration.as_secs_f64()
        }
    }

    /// One-line summary of the parse run
    pub fn summary(&self) -> String {
        format!(
            "Read {} lines, decoded {} station records ({} other record types skipped) in {:.2}s",
            self.lines_read,
            self.records_loaded,
            self.lines_skipped,
            self.load_duration.as_secs_f64()
        )
    }
}

impl Default for LoadStats {
    fn default() -> Self {
        Self::new()
    }
}
