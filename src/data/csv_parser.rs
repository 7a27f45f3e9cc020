//! CSV file parsing
//!
//! Parses comma separated text into row records keyed by the header line.
//!
//! ## Limitations
//!
//! Fields are split on every comma: quoted fields containing commas are not
//! supported. Lines whose field count differs from the header are skipped
//! (and logged) instead of failing the whole upload.

use crate::data::error::{DataError, DataResult};
use crate::types::{CellValue, RowRecord};

/// Parse raw CSV bytes, which must be valid UTF-8
pub fn parse_csv_bytes(bytes: &[u8]) -> DataResult<Vec<RowRecord>> {
    let content = std::str::from_utf8(bytes)
        .map_err(|e| DataError::format(format!("CSV file is not valid UTF-8: {}", e)))?;
    parse_csv_content(content)
}

/// Parse CSV content from a string
///
/// The first non-blank line is the header. Every value is kept as text;
/// numeric interpretation happens later, when chart series are built.
pub fn parse_csv_content(content: &str) -> DataResult<Vec<RowRecord>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let lines: Vec<&str> = content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .collect();

    if lines.len() < 2 {
        return Err(DataError::format(
            "CSV file must contain a header row and at least one data row.",
        ));
    }

    let headers: Vec<&str> = split_csv_line(lines[0]).into_iter().map(str::trim).collect();

    let mut rows: Vec<RowRecord> = Vec::with_capacity(lines.len() - 1);
    let mut skipped = 0usize;

    for (idx, line) in lines.iter().enumerate().skip(1) {
        let fields = split_csv_line(line);
        if fields.len() != headers.len() {
            skipped += 1;
            tracing::warn!(
                line = idx + 1,
                expected = headers.len(),
                found = fields.len(),
                "Skipping CSV row with mismatched field count"
            );
            continue;
        }

        let record: RowRecord = headers
            .iter()
            .zip(fields)
            .map(|(header, value)| (header.to_string(), CellValue::text(value)))
            .collect();
        rows.push(record);
    }

    tracing::debug!(rows = rows.len(), skipped, columns = headers.len(), "Parsed CSV");

    Ok(rows)
}

/// Split a CSV line on commas
fn split_csv_line(line: &str) -> Vec<&str> {
    line.split(',').collect()
}
