//! Configuration management.
//!
//! Runtime options for a processing run. The sampling interval and target
//! time zone are fixed in [`crate::constants`] and are not configurable.

use serde::{Deserialize, Serialize};

/// Options controlling a single transformation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorConfig {
    /// Field delimiter for both input and output files
    pub delimiter: u8,

    /// Show a progress spinner while rows are processed
    pub show_progress: bool,

    /// Rows between progress message refreshes
    pub progress_update_interval: usize,

    /// Print the coloured summary block after the run
    pub print_summary: bool,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            show_progress: true,
            progress_update_interval: 10_000,
            print_summary: true,
        }
    }
}

impl ProcessorConfig {
    /// Use a different field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Disable the progress spinner
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Set the progress refresh interval (clamped to at least one row)
    pub fn with_progress_update_interval(mut self, rows: usize) -> Self {
        self.progress_update_interval = rows.max(1);
        self
    }

    /// Disable the summary block (the two count lines are always printed)
    pub fn without_summary(mut self) -> Self {
        self.print_summary = false;
        self
    }

    /// Configuration for non-interactive runs: no spinner, no summary block
    pub fn quiet() -> Self {
        Self::default().without_progress().without_summary()
    }
}
