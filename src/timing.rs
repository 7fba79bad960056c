//! Trip timing derivation.
//!
//! Points are sampled every [`SAMPLE_INTERVAL_SECS`] seconds from the trip
//! start. UTC instants are kept naive; local times are produced by attaching
//! UTC and re-expressing the instant in [`LOCAL_TIMEZONE`], so daylight-saving
//! transitions are applied by the zone rules rather than a fixed offset.

use crate::constants::{
    LOCAL_TIME_FORMAT, LOCAL_TIMEZONE, SAMPLE_INTERVAL_SECS, UTC_TIMESTAMP_FORMAT,
};
use crate::error::{Result, TripError};
use chrono::{DateTime, NaiveDateTime, TimeDelta, TimeZone, Timelike};
use chrono_tz::Tz;

/// Parse a raw `TIMESTAMP` field (seconds since the Unix epoch) into a naive
/// UTC instant. Surrounding whitespace is ignored.
pub fn parse_start_timestamp(raw: &str) -> Result<NaiveDateTime> {
    let value = raw.trim();
    let seconds: i64 = value
        .parse()
        .map_err(|source| TripError::InvalidTimestamp {
            value: raw.to_string(),
            source,
        })?;

    DateTime::from_timestamp(seconds, 0)
        .map(|dt| dt.naive_utc())
        .ok_or(TripError::TimestampOutOfRange { seconds })
}

/// Total travel time for a path of `point_count` points
pub fn total_travel_seconds(point_count: usize) -> i64 {
    (point_count.saturating_sub(1) as i64) * SAMPLE_INTERVAL_SECS
}

/// Offset `start` by a number of seconds
pub fn offset_seconds(start: NaiveDateTime, seconds: i64) -> Result<NaiveDateTime> {
    TimeDelta::try_seconds(seconds)
        .and_then(|delta| start.checked_add_signed(delta))
        .ok_or(TripError::TimestampOutOfRange {
            seconds: start.and_utc().timestamp().saturating_add(seconds),
        })
}

/// UTC instant of every point in the path, in order
pub fn point_timestamps(start: NaiveDateTime, point_count: usize) -> Result<Vec<NaiveDateTime>> {
    (0..point_count)
        .map(|i| offset_seconds(start, i as i64 * SAMPLE_INTERVAL_SECS))
        .collect()
}

/// Render point instants as a PostgreSQL array literal:
/// `{"2021-01-01T00:00:00Z","2021-01-01T00:00:15Z"}`
pub fn format_timestamp_array(timestamps: &[NaiveDateTime]) -> String {
    let entries = timestamps
        .iter()
        .map(|ts| format!("\"{}\"", ts.format(UTC_TIMESTAMP_FORMAT)))
        .collect::<Vec<_>>()
        .join(",");
    format!("{{{}}}", entries)
}

/// Express a naive UTC instant as wall-clock time in the local zone
pub fn to_local(utc: NaiveDateTime) -> DateTime<Tz> {
    LOCAL_TIMEZONE.from_utc_datetime(&utc)
}

/// Format a local time as `YYYY-MM-DD HH:MM:SS`
pub fn format_local(local: &DateTime<Tz>) -> String {
    local.format(LOCAL_TIME_FORMAT).to_string()
}

/// Derived timing fields for one trip
#[derive(Debug, Clone, PartialEq)]
pub struct TripTiming {
    pub start_utc: NaiveDateTime,
    pub end_utc: NaiveDateTime,
    pub total_travel_time: i64,
    pub point_timestamps: Vec<NaiveDateTime>,
    pub start_local: DateTime<Tz>,
    pub end_local: DateTime<Tz>,
}

impl TripTiming {
    /// Derive all timing fields from the start instant and path length
    pub fn derive(start_utc: NaiveDateTime, point_count: usize) -> Result<Self> {
        let total_travel_time = total_travel_seconds(point_count);
        let end_utc = offset_seconds(start_utc, total_travel_time)?;
        let point_timestamps = point_timestamps(start_utc, point_count)?;

        Ok(Self {
            start_utc,
            end_utc,
            total_travel_time,
            point_timestamps,
            start_local: to_local(start_utc),
            end_local: to_local(end_utc),
        })
    }

    /// Local hour of the trip start (0-23)
    pub fn hour_of_day(&self) -> u32 {
        self.start_local.hour()
    }

    pub fn timestamp_array(&self) -> String {
        format_timestamp_array(&self.point_timestamps)
    }

    pub fn start_local_time(&self) -> String {
        format_local(&self.start_local)
    }

    pub fn end_local_time(&self) -> String {
        format_local(&self.end_local)
    }
}
