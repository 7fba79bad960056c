//! Trip Processor Library
//!
//! Converts raw taxi trip CSV records (Porto taxi-service format) into an
//! enriched CSV ready for bulk loading into a spatial database.
//!
//! This library provides tools for:
//! - Header-driven reading of the raw trip CSV
//! - Decoding the JSON polyline into a WKT `LINESTRING`
//! - Deriving per-point UTC timestamps at a fixed 15 second sampling interval
//! - Converting trip start/end to Europe/Lisbon local time
//! - Writing the enriched rows in input order with per-row error logging

pub mod cli;
pub mod config;
pub mod constants;
pub mod enrichment;
pub mod error;
pub mod header;
pub mod models;
pub mod polyline;
pub mod processor;
pub mod timing;

// Re-export commonly used types
pub use config::ProcessorConfig;
pub use error::{Result, TripError};
pub use models::{OutputRecord, ProcessingStats};
pub use processor::TripProcessor;

use std::path::PathBuf;

/// Transform `input` into `output` with the default configuration.
///
/// Prints the summary and per-row error lines to stdout just like the
/// command-line tool. Returns the row counts on success.
pub fn transform(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Result<ProcessingStats> {
    TripProcessor::new(input.into(), output.into())?.process()
}
