//! Main processing engine.
//!
//! Runs the single-pass transformation: open the input, write the output
//! header, enrich each row in input order, and report read/written counts.
//! Row-level failures are logged against the trip id and never stop the run;
//! only failures to open or write the files are returned as errors.

pub mod writer;

#[cfg(test)]
mod tests;

use crate::config::ProcessorConfig;
use crate::constants::{UNKNOWN_TRIP_ID, input_columns};
use crate::enrichment::{enrich_record, trip_id_for_error};
use crate::error::{Result, TripError};
use crate::header::ColumnMapping;
use crate::models::{ProcessingStats, RowOutcome};

use colored::*;
use csv::StringRecord;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, trace, warn};

pub use writer::TripWriter;

/// Processor for one input/output file pair
#[derive(Debug)]
pub struct TripProcessor {
    input_path: PathBuf,
    output_path: PathBuf,
    config: ProcessorConfig,
}

impl TripProcessor {
    /// Create a new processor. The input file must exist.
    pub fn new(input_path: PathBuf, output_path: PathBuf) -> Result<Self> {
        if !input_path.is_file() {
            return Err(TripError::InputNotFound { path: input_path });
        }

        Ok(Self {
            input_path,
            output_path,
            config: ProcessorConfig::default(),
        })
    }

    /// Configure the processor
    pub fn with_config(mut self, config: ProcessorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn input_path(&self) -> &PathBuf {
        &self.input_path
    }

    pub fn output_path(&self) -> &PathBuf {
        &self.output_path
    }

    /// Main processing entry point
    pub fn process(&self) -> Result<ProcessingStats> {
        let start_time = Instant::now();
        info!(
            "Transforming {} -> {}",
            self.input_path.display(),
            self.output_path.display()
        );

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .flexible(true)
            .from_path(&self.input_path)
            .map_err(|source| TripError::InputOpen {
                path: self.input_path.clone(),
                source,
            })?;

        let mut writer = TripWriter::create(&self.output_path, self.config.delimiter)?;

        let headers = reader.headers().map_err(TripError::from_csv)?.clone();
        let mapping = ColumnMapping::from_headers(&headers);
        if mapping.is_empty() {
            warn!("Input {} has no header row", self.input_path.display());
        }
        let missing = mapping.missing_columns(input_columns::REQUIRED);
        if !missing.is_empty() {
            warn!(
                "Input header is missing columns {:?}; affected rows will be reported as errors",
                missing
            );
        }

        let pb = self.create_progress_bar();
        let mut stats = ProcessingStats::new(self.output_path.clone());
        let mut record = StringRecord::new();

        loop {
            match reader.read_record(&mut record) {
                Ok(false) => break,
                Ok(true) => {
                    stats.rows_read += 1;
                    self.handle_record(&record, &mapping, &mut writer, &mut stats, &pb)?;
                }
                Err(e) => {
                    let error = TripError::from_csv(e);
                    if error.is_fatal() {
                        pb.abandon();
                        return Err(error);
                    }
                    stats.rows_read += 1;
                    stats.rows_failed += 1;
                    report_row_error(&pb, UNKNOWN_TRIP_ID, &error);
                }
            }

            if stats.rows_read % self.config.progress_update_interval.max(1) == 0 {
                pb.set_position(stats.rows_read as u64);
                pb.set_message(format!("{} written", stats.rows_written));
            }
        }

        let flushed = writer.finish()?;
        debug_assert_eq!(flushed, stats.rows_written);
        pb.finish_and_clear();

        stats.processing_time_ms = start_time.elapsed().as_millis();
        debug!("{}", stats.summary());

        self.report(&stats);
        Ok(stats)
    }

    /// Enrich and write one row, updating counters. Only fatal write errors
    /// are returned.
    fn handle_record(
        &self,
        record: &StringRecord,
        mapping: &ColumnMapping,
        writer: &mut TripWriter,
        stats: &mut ProcessingStats,
        pb: &ProgressBar,
    ) -> Result<()> {
        let output = match enrich_record(record, mapping) {
            Ok(RowOutcome::Transformed(output)) => output,
            Ok(RowOutcome::Skipped(reason)) => {
                trace!(
                    "Skipped trip {}: {:?}",
                    trip_id_for_error(record, mapping),
                    reason
                );
                stats.rows_skipped += 1;
                return Ok(());
            }
            Err(e) => {
                stats.rows_failed += 1;
                report_row_error(pb, trip_id_for_error(record, mapping), &e);
                return Ok(());
            }
        };

        match writer.write(&output) {
            Ok(()) => {
                stats.rows_written += 1;
                Ok(())
            }
            Err(e) if e.is_fatal() => {
                pb.abandon();
                Err(e)
            }
            Err(e) => {
                stats.rows_failed += 1;
                report_row_error(pb, &output.trip_id, &e);
                Ok(())
            }
        }
    }

    fn create_progress_bar(&self) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {pos} rows read ({per_sec}) {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("0 written");
        pb
    }

    /// Print the run summary. The two count lines are always printed.
    fn report(&self, stats: &ProcessingStats) {
        if self.config.print_summary {
            println!("\n{}", "Processing Summary".bright_green().bold());
            println!(
                "  {} {}ms",
                "Time elapsed:".bright_cyan(),
                stats.processing_time_ms.to_string().bright_white()
            );
            println!(
                "  {} {}",
                "Skipped (no path):".bright_cyan(),
                stats.rows_skipped.to_string().bright_white()
            );
            if stats.rows_failed > 0 {
                println!(
                    "  {} {}",
                    "Failed:".bright_red(),
                    stats.rows_failed.to_string().bright_red().bold()
                );
            }
            println!(
                "  {} {}",
                "Output:".bright_cyan(),
                stats.output_path.display()
            );
        }

        println!("Input rows: {}", stats.rows_read);
        println!("Output rows: {}", stats.rows_written);
    }
}

/// Console line for a row dropped with an error
pub fn row_error_line(trip_id: &str, error: &TripError) -> String {
    format!("[Error] Trip {} - {}", trip_id, error)
}

/// Print the per-row error line above the progress bar
fn report_row_error(pb: &ProgressBar, trip_id: &str, error: &TripError) {
    debug!("Row error for trip {}: {:?}", trip_id, error);
    pb.suspend(|| println!("{}", row_error_line(trip_id, error)));
}
