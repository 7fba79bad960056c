//! Core data structures for trip processing.
//!
//! Defines the passthrough input record, the enriched output row, per-row
//! outcomes, and run statistics.

use crate::constants::input_columns;
use crate::error::Result;
use crate::header::ColumnMapping;
use csv::StringRecord;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Identifier fields copied verbatim from an input row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRecord<'r> {
    pub trip_id: &'r str,
    pub call_type: &'r str,
    pub origin_call: &'r str,
    pub origin_stand: &'r str,
    pub taxi_id: &'r str,
    pub day_type: &'r str,
    pub missing_data: &'r str,
}

impl<'r> TripRecord<'r> {
    /// Read the passthrough fields of a row
    pub fn from_record(record: &'r StringRecord, mapping: &ColumnMapping) -> Result<Self> {
        Ok(Self {
            trip_id: mapping.field(record, input_columns::TRIP_ID)?,
            call_type: mapping.field(record, input_columns::CALL_TYPE)?,
            origin_call: mapping.field(record, input_columns::ORIGIN_CALL)?,
            origin_stand: mapping.field(record, input_columns::ORIGIN_STAND)?,
            taxi_id: mapping.field(record, input_columns::TAXI_ID)?,
            day_type: mapping.field(record, input_columns::DAY_TYPE)?,
            missing_data: mapping.field(record, input_columns::MISSING_DATA)?,
        })
    }
}

/// One enriched output row. Field order is the output column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub trip_id: String,
    pub call_type: String,
    pub origin_call: String,
    pub origin_stand: String,
    pub taxi_id: String,
    pub day_type: String,
    pub missing_data: String,
    /// WKT `LINESTRING(lon lat, ...)`
    pub polyline: String,
    /// PostgreSQL array literal of per-point UTC timestamps
    pub timestamps: String,
    /// Seconds from first to last point
    pub total_travel_time: i64,
    pub start_local_time: String,
    pub end_local_time: String,
    pub hour_of_day: u32,
    pub point_count: usize,
}

/// Why a row was dropped without an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Path field missing, empty or `[]`
    EmptyPolyline,
    /// Path decoded to fewer than two points
    TooFewPoints { points: usize },
}

/// Result of transforming one input row
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Transformed(Box<OutputRecord>),
    Skipped(SkipReason),
}

/// Processing statistics for one run
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProcessingStats {
    /// Every data row encountered, including skipped and failed ones
    pub rows_read: usize,
    pub rows_written: usize,
    /// Rows dropped silently (empty or short paths)
    pub rows_skipped: usize,
    /// Rows dropped with a logged error
    pub rows_failed: usize,
    pub output_path: PathBuf,
    pub processing_time_ms: u128,
}

impl ProcessingStats {
    /// Create empty statistics for a run writing to `output_path`
    pub fn new(output_path: PathBuf) -> Self {
        Self {
            output_path,
            ..Default::default()
        }
    }

    /// Percentage of read rows that were written
    pub fn success_rate(&self) -> f64 {
        if self.rows_read == 0 {
            100.0
        } else {
            (self.rows_written as f64 / self.rows_read as f64) * 100.0
        }
    }

    /// Every read row is accounted for as written, skipped or failed
    pub fn is_balanced(&self) -> bool {
        self.rows_read == self.rows_written + self.rows_skipped + self.rows_failed
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        format!(
            "{} rows read -> {} written ({:.1}%) | skipped: {} | failed: {}",
            self.rows_read,
            self.rows_written,
            self.success_rate(),
            self.rows_skipped,
            self.rows_failed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::OUTPUT_COLUMNS;

    fn sample_output() -> OutputRecord {
        OutputRecord {
            trip_id: "1372636858620000589".to_string(),
            call_type: "C".to_string(),
            origin_call: String::new(),
            origin_stand: String::new(),
            taxi_id: "20000589".to_string(),
            day_type: "A".to_string(),
            missing_data: "False".to_string(),
            polyline: "LINESTRING(-8.6 41.1, -8.61 41.11)".to_string(),
            timestamps: "{\"2021-01-01T00:00:00Z\",\"2021-01-01T00:00:15Z\"}".to_string(),
            total_travel_time: 15,
            start_local_time: "2021-01-01 00:00:00".to_string(),
            end_local_time: "2021-01-01 00:00:15".to_string(),
            hour_of_day: 0,
            point_count: 2,
        }
    }

    #[test]
    fn test_output_record_field_order_matches_header() {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(sample_output()).unwrap();
        let data = String::from_utf8(writer.into_inner().unwrap()).unwrap();

        let header = data.lines().next().unwrap();
        assert_eq!(header, OUTPUT_COLUMNS.join(","));
    }

    #[test]
    fn test_trip_record_from_row() {
        let headers = StringRecord::from(vec![
            "TRIP_ID",
            "CALL_TYPE",
            "ORIGIN_CALL",
            "ORIGIN_STAND",
            "TAXI_ID",
            "DAY_TYPE",
            "TIMESTAMP",
            "MISSING_DATA",
            "POLYLINE",
        ]);
        let mapping = ColumnMapping::from_headers(&headers);
        let row = StringRecord::from(vec![
            "T1", "B", "", "7", "20000596", "A", "1372637303", "False", "[]",
        ]);

        let trip = TripRecord::from_record(&row, &mapping).unwrap();
        assert_eq!(trip.trip_id, "T1");
        assert_eq!(trip.origin_call, "");
        assert_eq!(trip.origin_stand, "7");
        assert_eq!(trip.missing_data, "False");
    }

    #[test]
    fn test_stats_accounting() {
        let stats = ProcessingStats {
            rows_read: 10,
            rows_written: 7,
            rows_skipped: 2,
            rows_failed: 1,
            ..Default::default()
        };

        assert!(stats.is_balanced());
        assert!((stats.success_rate() - 70.0).abs() < 1e-9);
        assert_eq!(
            stats.summary(),
            "10 rows read -> 7 written (70.0%) | skipped: 2 | failed: 1"
        );
    }

    #[test]
    fn test_empty_stats() {
        let stats = ProcessingStats::new(PathBuf::from("out.csv"));
        assert!(stats.is_balanced());
        assert_eq!(stats.success_rate(), 100.0);
        assert_eq!(stats.output_path, PathBuf::from("out.csv"));
    }
}
