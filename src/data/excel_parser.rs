//! Excel workbook parsing
//!
//! Decodes xls/xlsx (and the other formats calamine understands) from
//! memory. Only the first sheet is read; its first row is the header.

use crate::constants::EMPTY_HEADER_NAME;
use crate::data::error::{DataError, DataResult};
use crate::types::{CellValue, RowRecord};
use calamine::{Data, Reader, open_workbook_auto_from_rs};
use std::collections::HashMap;
use std::io::Cursor;

/// Parse an in-memory workbook into row records
pub fn parse_excel_bytes(bytes: &[u8]) -> DataResult<Vec<RowRecord>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;

    let sheet_names = workbook.sheet_names();
    let Some(sheet_name) = sheet_names.first() else {
        return Err(DataError::format("Excel file contains no sheets."));
    };

    let range = workbook.worksheet_range(sheet_name)?;
    let (height, width) = range.get_size();
    tracing::debug!(sheet = %sheet_name, sheets = sheet_names.len(), height, width, "Reading first sheet");

    let mut row_iter = range.rows();
    let Some(header_row) = row_iter.next() else {
        return Err(DataError::format(format!("Sheet '{}' is empty.", sheet_name)));
    };
    let headers = header_names(header_row);

    let records: Vec<RowRecord> = row_iter
        .filter(|row| !row.iter().all(|cell| matches!(cell, Data::Empty)))
        .map(|row| {
            headers
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    let value = row.get(i).map(excel_cell_to_value).unwrap_or(CellValue::Null);
                    (name.clone(), value)
                })
                .collect()
        })
        .collect();

    if records.is_empty() {
        return Err(DataError::format(format!(
            "Sheet '{}' has a header row but no data rows.",
            sheet_name
        )));
    }

    Ok(records)
}

/// Build unique column names from the header row.
///
/// Empty cells are named `__EMPTY`, `__EMPTY_1`, ...; repeated names get a
/// numeric suffix so every column stays addressable.
fn header_names(row: &[Data]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut empty_count = 0usize;

    row.iter()
        .map(|cell| {
            let base = match cell {
                Data::Empty => {
                    let name = if empty_count == 0 {
                        EMPTY_HEADER_NAME.to_string()
                    } else {
                        format!("{}_{}", EMPTY_HEADER_NAME, empty_count)
                    };
                    empty_count += 1;
                    name
                }
                other => excel_cell_to_value(other).to_string().trim().to_string(),
            };

            let count = seen.entry(base.clone()).or_insert(0);
            let name = if *count == 0 { base } else { format!("{}_{}", base, count) };
            *count += 1;
            name
        })
        .collect()
}

/// Convert a calamine cell to a CellValue
fn excel_cell_to_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Null,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        // Date cells keep their serial number, like the raw sheet value
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(e.to_string()),
    }
}
