//! Trip path decoding and WKT rendering.
//!
//! The raw `POLYLINE` field holds a JSON list of `[longitude, latitude]`
//! pairs. Coordinates keep their decoded JSON number form, so an integer
//! renders as `-8` and a float as `-8.6` or `41.0`, with no rounding.

use crate::constants::{EMPTY_POLYLINE_VALUES, MIN_PATH_POINTS, WKT_LINESTRING_PREFIX};
use crate::error::{Result, TripError};
use serde_json::{Number, Value};
use std::fmt;

/// A single path point in (longitude, latitude) order
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    pub longitude: Number,
    pub latitude: Number,
}

impl Coordinate {
    fn from_value(index: usize, value: Value) -> Result<Self> {
        let pair = match value {
            Value::Array(pair) => pair,
            other => {
                return Err(TripError::invalid_coordinate(
                    index,
                    format!(
                        "expected a [longitude, latitude] list, found {}",
                        value_kind(&other)
                    ),
                ));
            }
        };

        let [longitude, latitude]: [Value; 2] = pair.try_into().map_err(|pair: Vec<Value>| {
            TripError::invalid_coordinate(index, format!("expected 2 values, found {}", pair.len()))
        })?;

        Ok(Self {
            longitude: as_number(index, longitude)?,
            latitude: as_number(index, latitude)?,
        })
    }
}

fn as_number(index: usize, value: Value) -> Result<Number> {
    match value {
        Value::Number(n) => Ok(n),
        other => Err(TripError::invalid_coordinate(
            index,
            format!("expected a number, found {}", value_kind(&other)),
        )),
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.longitude, self.latitude)
    }
}

/// Ordered trip path with at least [`MIN_PATH_POINTS`] points
#[derive(Debug, Clone, PartialEq)]
pub struct TripPath {
    points: Vec<Coordinate>,
}

impl TripPath {
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Render as WKT, e.g. `LINESTRING(-8.6 41.1, -8.61 41.11)`
    pub fn to_wkt(&self) -> String {
        let body = self
            .points
            .iter()
            .map(Coordinate::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}{})", WKT_LINESTRING_PREFIX, body)
    }
}

/// Result of decoding a raw polyline field
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedPolyline {
    /// Field was empty or an empty list
    Empty,
    /// Decoded list has fewer than [`MIN_PATH_POINTS`] entries
    TooShort { points: usize },
    /// Usable path
    Path(TripPath),
}

/// Whether a raw field is one of the "no path" sentinels
pub fn is_empty_polyline(raw: &str) -> bool {
    EMPTY_POLYLINE_VALUES.contains(&raw)
}

/// Decode a raw `POLYLINE` field.
///
/// The length check runs on the outer list before any element is inspected,
/// so `[[1, 2, 3]]` is `TooShort` rather than an error.
pub fn decode_polyline(raw: &str) -> Result<DecodedPolyline> {
    if is_empty_polyline(raw) {
        return Ok(DecodedPolyline::Empty);
    }

    let value: Value =
        serde_json::from_str(raw).map_err(|source| TripError::PolylineDecode { source })?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(TripError::PolylineNotList {
                found: value_kind(&other).to_string(),
            });
        }
    };

    if items.len() < MIN_PATH_POINTS {
        return Ok(DecodedPolyline::TooShort {
            points: items.len(),
        });
    }

    let points = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| Coordinate::from_value(index, item))
        .collect::<Result<Vec<_>>>()?;

    Ok(DecodedPolyline::Path(TripPath { points }))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
