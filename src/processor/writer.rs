//! Output CSV writer for enriched trips.
//!
//! The header row is written on creation, so an input with no surviving rows
//! still produces a file with the full column list.

use crate::constants::OUTPUT_COLUMNS;
use crate::error::{Result, TripError};
use crate::models::OutputRecord;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// CSV writer with the fixed output header
#[derive(Debug)]
pub struct TripWriter {
    inner: csv::Writer<File>,
    output_path: PathBuf,
    rows_written: usize,
}

impl TripWriter {
    /// Create or truncate the output file and write the header row
    pub fn create(output_path: &Path, delimiter: u8) -> Result<Self> {
        let mut inner = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_path(output_path)
            .map_err(|source| TripError::OutputCreate {
                path: output_path.to_path_buf(),
                source,
            })?;

        inner
            .write_record(OUTPUT_COLUMNS)
            .map_err(TripError::from_csv)?;

        debug!("Created output file: {}", output_path.display());

        Ok(Self {
            inner,
            output_path: output_path.to_path_buf(),
            rows_written: 0,
        })
    }

    /// Append one enriched row
    pub fn write(&mut self, record: &OutputRecord) -> Result<()> {
        self.inner.serialize(record).map_err(TripError::from_csv)?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush buffered rows to disk and return the number written
    pub fn finish(mut self) -> Result<usize> {
        self.inner.flush()?;
        debug!(
            "Flushed {} rows to {}",
            self.rows_written,
            self.output_path.display()
        );
        Ok(self.rows_written)
    }
}
