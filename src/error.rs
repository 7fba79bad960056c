//! Error handling for trip processing operations.
//!
//! Row-level variants are caught by the processor loop and logged against the
//! trip id; file-level variants abort the run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TripError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Failed to open input file {path}: {source}")]
    InputOpen {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to create output file {path}: {source}")]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Missing required field '{field}'")]
    MissingField { field: String },

    #[error("Invalid polyline: {source}")]
    PolylineDecode {
        #[source]
        source: serde_json::Error,
    },

    #[error("Polyline must be a list of coordinate pairs, found {found}")]
    PolylineNotList { found: String },

    #[error("Invalid coordinate at index {index}: {reason}")]
    InvalidCoordinate { index: usize, reason: String },

    #[error("Invalid timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Timestamp {seconds} is outside the representable range")]
    TimestampOutOfRange { seconds: i64 },
}

impl TripError {
    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid coordinate error
    pub fn invalid_coordinate(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            index,
            reason: reason.into(),
        }
    }

    /// Convert a csv error, lifting underlying I/O failures to [`TripError::Io`]
    pub fn from_csv(error: csv::Error) -> Self {
        if error.is_io_error() {
            Self::Io(std::io::Error::from(error))
        } else {
            Self::Csv(error)
        }
    }

    /// Whether this error aborts the whole run rather than a single row
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Io(_)
                | Self::InputNotFound { .. }
                | Self::InputOpen { .. }
                | Self::OutputCreate { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, TripError>;
