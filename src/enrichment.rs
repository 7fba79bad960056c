//! Per-row trip enrichment.
//!
//! [`enrich_record`] is a pure function from an input row to a
//! [`RowOutcome`]. It performs no I/O; the processor loop owns logging,
//! counting and writing.

use crate::constants::{UNKNOWN_TRIP_ID, input_columns};
use crate::error::Result;
use crate::header::ColumnMapping;
use crate::models::{OutputRecord, RowOutcome, SkipReason, TripRecord};
use crate::polyline::{DecodedPolyline, decode_polyline};
use crate::timing::{TripTiming, parse_start_timestamp};
use csv::StringRecord;

/// Transform one input row.
///
/// Empty or short paths give `Ok(RowOutcome::Skipped)`; every other problem
/// is returned as an error for the caller to log against the trip id.
pub fn enrich_record(record: &StringRecord, mapping: &ColumnMapping) -> Result<RowOutcome> {
    let raw_polyline = mapping.field(record, input_columns::POLYLINE)?;

    let path = match decode_polyline(raw_polyline)? {
        DecodedPolyline::Empty => return Ok(RowOutcome::Skipped(SkipReason::EmptyPolyline)),
        DecodedPolyline::TooShort { points } => {
            return Ok(RowOutcome::Skipped(SkipReason::TooFewPoints { points }));
        }
        DecodedPolyline::Path(path) => path,
    };
    debug_assert!(!path.is_empty());

    let start_utc = parse_start_timestamp(mapping.field(record, input_columns::TIMESTAMP)?)?;
    let timing = TripTiming::derive(start_utc, path.len())?;
    let trip = TripRecord::from_record(record, mapping)?;

    Ok(RowOutcome::Transformed(Box::new(OutputRecord {
        trip_id: trip.trip_id.to_string(),
        call_type: trip.call_type.to_string(),
        origin_call: trip.origin_call.to_string(),
        origin_stand: trip.origin_stand.to_string(),
        taxi_id: trip.taxi_id.to_string(),
        day_type: trip.day_type.to_string(),
        missing_data: trip.missing_data.to_string(),
        polyline: path.to_wkt(),
        timestamps: timing.timestamp_array(),
        total_travel_time: timing.total_travel_time,
        start_local_time: timing.start_local_time(),
        end_local_time: timing.end_local_time(),
        hour_of_day: timing.hour_of_day(),
        point_count: path.len(),
    })))
}

/// Trip id used when reporting an error for this row
pub fn trip_id_for_error<'r>(record: &'r StringRecord, mapping: &ColumnMapping) -> &'r str {
    mapping
        .optional_field(record, input_columns::TRIP_ID)
        .unwrap_or(UNKNOWN_TRIP_ID)
}
