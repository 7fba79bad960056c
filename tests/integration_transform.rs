//! End-to-end tests for the public transform API
//!
//! These tests drive `trip_processor::transform` against small CSV files in
//! the raw Porto taxi-trip layout and check the enriched output byte for byte
//! where the format matters.

use std::fs;
use tempfile::TempDir;
use trip_processor::constants::OUTPUT_COLUMNS;
use trip_processor::{OutputRecord, TripError, transform};

const HEADER: &str = "\"TRIP_ID\",\"CALL_TYPE\",\"ORIGIN_CALL\",\"ORIGIN_STAND\",\"TAXI_ID\",\"TIMESTAMP\",\"DAY_TYPE\",\"MISSING_DATA\",\"POLYLINE\"";

fn read_records(path: &std::path::Path) -> Vec<OutputRecord> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader.deserialize().map(|r| r.unwrap()).collect()
}

/// First trip of the public Porto taxi dataset
#[test]
fn test_reference_trip() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("train.csv");
    let output = temp_dir.path().join("train_preprocessed.csv");
    fs::write(
        &input,
        format!(
            "{}\n\"1372636858620000589\",\"C\",\"\",\"\",\"20000589\",\"1372636858\",\"A\",\"False\",\"[[-8.618643,41.141412],[-8.618499,41.141376],[-8.620326,41.14251]]\"\n",
            HEADER
        ),
    )
    .unwrap();

    let stats = transform(&input, &output).unwrap();
    assert_eq!(stats.rows_read, 1);
    assert_eq!(stats.rows_written, 1);

    let content = fs::read_to_string(&output).unwrap();
    let mut lines = content.split("\r\n");
    assert_eq!(lines.next().unwrap(), OUTPUT_COLUMNS.join(","));

    let records = read_records(&output);
    assert_eq!(records.len(), 1);

    let trip = &records[0];
    assert_eq!(trip.trip_id, "1372636858620000589");
    assert_eq!(trip.call_type, "C");
    assert_eq!(trip.origin_call, "");
    assert_eq!(trip.taxi_id, "20000589");
    assert_eq!(
        trip.polyline,
        "LINESTRING(-8.618643 41.141412, -8.618499 41.141376, -8.620326 41.14251)"
    );
    assert_eq!(
        trip.timestamps,
        "{\"2013-07-01T00:00:58Z\",\"2013-07-01T00:01:13Z\",\"2013-07-01T00:01:28Z\"}"
    );
    assert_eq!(trip.total_travel_time, 30);
    // July is WEST (UTC+1) in Lisbon
    assert_eq!(trip.start_local_time, "2013-07-01 01:00:58");
    assert_eq!(trip.end_local_time, "2013-07-01 01:01:28");
    assert_eq!(trip.hour_of_day, 1);
    assert_eq!(trip.point_count, 3);
}

#[test]
fn test_bad_row_does_not_stop_later_rows() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("train.csv");
    let output = temp_dir.path().join("out.csv");
    fs::write(
        &input,
        format!(
            "{h}\n\
             \"A1\",\"B\",\"\",\"7\",\"20000001\",\"1380000000\",\"A\",\"False\",\"not json\"\n\
             \"A2\",\"B\",\"\",\"7\",\"20000001\",\"1380000000\",\"A\",\"False\",\"[]\"\n\
             \"A3\",\"B\",\"\",\"7\",\"20000001\",\"1380000000\",\"A\",\"False\",\"[[-8.6,41],[-8.7,41.2]]\"\n",
            h = HEADER
        ),
    )
    .unwrap();

    let stats = transform(&input, &output).unwrap();
    assert_eq!(stats.rows_read, 3);
    assert_eq!(stats.rows_written, 1);
    assert_eq!(stats.rows_failed, 1);
    assert_eq!(stats.rows_skipped, 1);

    let records = read_records(&output);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].trip_id, "A3");
    assert_eq!(records[0].origin_stand, "7");
    // Integer coordinates keep their integer spelling
    assert_eq!(records[0].polyline, "LINESTRING(-8.6 41, -8.7 41.2)");
}

#[test]
fn test_missing_input_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out.csv");

    let err = transform(temp_dir.path().join("absent.csv"), &output).unwrap_err();
    assert!(matches!(err, TripError::InputNotFound { .. }));
    assert!(err.is_fatal());
    assert!(!output.exists());
}
