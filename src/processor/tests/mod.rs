//! Integration tests for the processor module
//!
//! Tests the complete single-pass pipeline against small trip CSV files.


use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub(crate) const INPUT_HEADER: &str =
    "\"TRIP_ID\",\"CALL_TYPE\",\"ORIGIN_CALL\",\"ORIGIN_STAND\",\"TAXI_ID\",\"TIMESTAMP\",\"DAY_TYPE\",\"MISSING_DATA\",\"POLYLINE\"";

/// Build one input line in the column order of [`INPUT_HEADER`]
pub(crate) fn trip_line(trip_id: &str, timestamp: &str, polyline: &str) -> String {
    format!(
        "\"{}\",\"C\",\"\",\"\",\"20000589\",\"{}\",\"A\",\"False\",\"{}\"",
        trip_id, timestamp, polyline
    )
}

/// Write an input file and return (input_path, output_path)
pub(crate) fn create_input(temp_dir: &TempDir, lines: &[String]) -> (PathBuf, PathBuf) {
    let input_path = temp_dir.path().join("train.csv");
    let output_path = temp_dir.path().join("train_preprocessed.csv");

    let mut content = String::from(INPUT_HEADER);
    for line in lines {
        content.push('\n');
        content.push_str(line);
    }
    content.push('\n');

    fs::write(&input_path, content).unwrap();
    (input_path, output_path)
}

/// Read the output file back as header plus string records
pub(crate) fn read_output(path: &PathBuf) -> (csv::StringRecord, Vec<csv::StringRecord>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers = reader.headers().unwrap().clone();
    let rows = reader.records().map(|r| r.unwrap()).collect();
    (headers, rows)
}
