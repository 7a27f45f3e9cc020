//! Dataset shape validation
//!
//! Parsers hand over plain row records; this is where they become a
//! [`Dataset`] with a column list.

use crate::data::error::{DataError, DataResult};
use crate::types::{Dataset, RowRecord};

/// Confirm the records form a usable dataset and derive its columns.
///
/// Columns are the first row's keys in order. Later rows are not compared
/// against them: a row missing a column just reads as absent downstream.
pub fn validate_records(name: impl Into<String>, rows: Vec<RowRecord>) -> DataResult<Dataset> {
    let Some(first) = rows.first() else {
        return Err(DataError::shape(
            "Uploaded data is empty. Expected an array of objects.",
        ));
    };

    if first.is_empty() {
        return Err(DataError::shape(
            "Uploaded data is not in the expected format (array of objects).",
        ));
    }

    let columns: Vec<String> = first.keys().cloned().collect();

    Ok(Dataset {
        name: name.into(),
        columns,
        rows,
    })
}
