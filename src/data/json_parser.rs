//! JSON data parsing
//!
//! Parses a JSON array of objects into row records. Keys keep the order
//! they appear in the document.

use crate::data::error::{DataError, DataResult};
use crate::types::{CellValue, RowRecord};
use serde_json::Value;

const EXPECTED_SHAPE: &str = "Invalid JSON format. Expected an array of objects.";

/// Parse JSON content into row records
///
/// The document must be a non-empty array whose first element is an object.
/// Later elements that are not objects become empty records.
pub fn parse_json_content(json: &str) -> DataResult<Vec<RowRecord>> {
    let value: Value = serde_json::from_str(json)?;

    let Value::Array(array) = value else {
        return Err(DataError::format(EXPECTED_SHAPE));
    };

    match array.first() {
        Some(Value::Object(_)) => {}
        _ => return Err(DataError::format(EXPECTED_SHAPE)),
    }

    let mut non_objects = 0usize;
    let records: Vec<RowRecord> = array
        .into_iter()
        .map(|item| match item {
            Value::Object(obj) => obj
                .into_iter()
                .map(|(key, v)| (key, json_value_to_cell(v)))
                .collect(),
            _ => {
                non_objects += 1;
                RowRecord::new()
            }
        })
        .collect();

    if non_objects > 0 {
        tracing::warn!(non_objects, "JSON array contains elements that are not objects");
    }

    Ok(records)
}

/// Convert a JSON value to a CellValue
fn json_value_to_cell(value: Value) -> CellValue {
    match value {
        Value::Null => CellValue::Null,
        Value::Bool(b) => CellValue::Bool(b),
        Value::Number(n) => n.as_f64().map(CellValue::Number).unwrap_or(CellValue::Null),
        Value::String(s) => CellValue::Text(s),
        // Nested structures are kept as their JSON text
        nested @ (Value::Array(_) | Value::Object(_)) => CellValue::Text(nested.to_string()),
    }
}
