//! Upload loading
//!
//! Ties format detection, the per-format parsers and validation together.
//! Reading the file is the only IO the pipeline performs.

use crate::data::csv_parser::parse_csv_bytes;
use crate::data::error::{DataError, DataResult};
use crate::data::excel_parser::parse_excel_bytes;
use crate::data::format::FileFormat;
use crate::data::json_parser::parse_json_content;
use crate::data::validate::validate_records;
use crate::types::Dataset;
use std::path::Path;

/// Parse an in-memory upload into a validated dataset
pub fn parse_upload(file_name: &str, mime: Option<&str>, bytes: &[u8]) -> DataResult<Dataset> {
    let format = FileFormat::detect(mime, file_name)?;
    let start = std::time::Instant::now();

    let rows = match format {
        FileFormat::Json => {
            let text = std::str::from_utf8(bytes).map_err(|e| {
                DataError::format(format!("JSON file is not valid UTF-8: {}", e))
            })?;
            parse_json_content(text)?
        }
        FileFormat::Csv => parse_csv_bytes(bytes)?,
        FileFormat::Excel => parse_excel_bytes(bytes)?,
    };

    let dataset = validate_records(file_name, rows)?;

    tracing::debug!(
        "Loaded {} {} with {} rows x {} cols in {:?}",
        format.label(),
        file_name,
        dataset.row_count(),
        dataset.column_count(),
        start.elapsed()
    );

    Ok(dataset)
}

/// Read a file from disk and parse it
///
/// # Memory Limits
/// Files larger than `max_size_mb` return [`DataError::TooLarge`] without
/// being read.
pub fn load_file(path: &Path, mime: Option<&str>, max_size_mb: u64) -> DataResult<Dataset> {
    const MB: u64 = 1024 * 1024;
    let metadata = std::fs::metadata(path)?;
    if metadata.len() > max_size_mb.saturating_mul(MB) {
        return Err(DataError::TooLarge {
            size_mb: metadata.len().div_ceil(MB),
            max_mb: max_size_mb,
        });
    }

    let file_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("data")
        .to_string();

    let bytes = std::fs::read(path)?;
    parse_upload(&file_name, mime, &bytes)
}
