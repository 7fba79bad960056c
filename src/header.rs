//! Input header analysis and field lookup.
//!
//! Maps the input CSV header to column indices so rows can be read by name.
//! A column absent from the header is a per-row error; a value absent from a
//! short row reads as an empty string.

use crate::error::{Result, TripError};
use csv::StringRecord;
use std::collections::HashMap;
use tracing::debug;

/// Column name to index mapping for the input file
#[derive(Debug, Clone, Default)]
pub struct ColumnMapping {
    name_to_index: HashMap<String, usize>,
}

impl ColumnMapping {
    /// Build a mapping from the header record. Duplicate names resolve to the
    /// last occurrence.
    pub fn from_headers(headers: &StringRecord) -> Self {
        let name_to_index: HashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(index, name)| (name.to_string(), index))
            .collect();

        debug!("Mapped {} input columns", name_to_index.len());
        Self { name_to_index }
    }

    /// Get the index for a given column name
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }

    /// Check if a column exists in the mapping
    pub fn has_column(&self, column_name: &str) -> bool {
        self.name_to_index.contains_key(column_name)
    }

    /// Number of mapped columns
    pub fn len(&self) -> usize {
        self.name_to_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_to_index.is_empty()
    }

    /// Columns from `required` that the header does not contain
    pub fn missing_columns<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|name| !self.has_column(name))
            .collect()
    }

    /// Get a field by column name. Fails only when the column is not in the
    /// header.
    pub fn field<'r>(&self, record: &'r StringRecord, column_name: &str) -> Result<&'r str> {
        let index = self
            .get_index(column_name)
            .ok_or_else(|| TripError::missing_field(column_name))?;
        Ok(record.get(index).unwrap_or(""))
    }

    /// Get a field that is present in the row, without raising an error
    pub fn optional_field<'r>(
        &self,
        record: &'r StringRecord,
        column_name: &str,
    ) -> Option<&'r str> {
        self.get_index(column_name)
            .and_then(|index| record.get(index))
    }
}
