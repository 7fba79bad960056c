//! Application constants for the trip processor
//!
//! Column names, the fixed sampling interval, the target civil time zone,
//! and default file names used throughout the crate.

use chrono_tz::Tz;

// =============================================================================
// Sampling and Time Zone
// =============================================================================

/// Seconds between consecutive GPS points in a trip path
pub const SAMPLE_INTERVAL_SECS: i64 = 15;

/// Civil time zone that local start/end times are expressed in
pub const LOCAL_TIMEZONE: Tz = chrono_tz::Europe::Lisbon;

/// Minimum number of decoded points for a trip to be written
pub const MIN_PATH_POINTS: usize = 2;

/// Format of each entry in the per-point timestamp array (UTC)
pub const UTC_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Format of local start/end times (no offset suffix)
pub const LOCAL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Prefix of the WKT geometry text
pub const WKT_LINESTRING_PREFIX: &str = "LINESTRING(";

/// Raw path values that mean "no path" and are skipped without logging
pub const EMPTY_POLYLINE_VALUES: &[&str] = &["", "[]", "\"\""];

/// Placeholder trip id for errors on rows whose id cannot be read
pub const UNKNOWN_TRIP_ID: &str = "UNKNOWN";

// =============================================================================
// Input Columns
// =============================================================================

/// Input column names (case-sensitive)
pub mod input_columns {
    pub const TRIP_ID: &str = "TRIP_ID";
    pub const CALL_TYPE: &str = "CALL_TYPE";
    pub const ORIGIN_CALL: &str = "ORIGIN_CALL";
    pub const ORIGIN_STAND: &str = "ORIGIN_STAND";
    pub const TAXI_ID: &str = "TAXI_ID";
    pub const DAY_TYPE: &str = "DAY_TYPE";
    pub const MISSING_DATA: &str = "MISSING_DATA";
    pub const POLYLINE: &str = "POLYLINE";
    pub const TIMESTAMP: &str = "TIMESTAMP";

    /// Columns the processor reads from every row
    pub const REQUIRED: &[&str] = &[
        TRIP_ID,
        CALL_TYPE,
        ORIGIN_CALL,
        ORIGIN_STAND,
        TAXI_ID,
        DAY_TYPE,
        MISSING_DATA,
        POLYLINE,
        TIMESTAMP,
    ];
}

// =============================================================================
// Output Columns
// =============================================================================

/// Output header, in write order
pub const OUTPUT_COLUMNS: &[&str] = &[
    "trip_id",
    "call_type",
    "origin_call",
    "origin_stand",
    "taxi_id",
    "day_type",
    "missing_data",
    "polyline",
    "timestamps",
    "total_travel_time",
    "start_local_time",
    "end_local_time",
    "hour_of_day",
    "point_count",
];

// =============================================================================
// File Names
// =============================================================================

/// Input file used when none is given on the command line
pub const DEFAULT_INPUT_FILE: &str = "train.csv";

/// Suffix appended to the input file stem to form the default output name
pub const OUTPUT_FILE_SUFFIX: &str = "_preprocessed";

/// Build the default output file name for an input stem
pub fn get_output_filename(input_stem: &str) -> String {
    format!("{}{}.csv", input_stem, OUTPUT_FILE_SUFFIX)
}
