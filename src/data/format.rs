//! Upload format detection
//!
//! The MIME type reported with an upload decides the parser. When it is
//! missing or unknown the file extension is used instead.

use crate::constants::{MIME_CSV, MIME_JSON, MIME_XLS, MIME_XLSX};
use crate::data::error::{DataError, DataResult};
use std::path::Path;

/// Supported upload formats
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Csv,
    /// Binary or XML workbook (.xls / .xlsx)
    Excel,
}

impl FileFormat {
    /// Pick a format from the upload's MIME type, falling back to its extension.
    pub fn detect(mime: Option<&str>, file_name: &str) -> DataResult<Self> {
        if let Some(format) = mime.and_then(Self::from_mime) {
            return Ok(format);
        }

        if let Some(format) = Self::from_extension(file_name) {
            tracing::debug!(file_name, ?mime, "Format detected from extension");
            return Ok(format);
        }

        let shown = match mime {
            Some(m) if !m.trim().is_empty() => m.to_string(),
            _ => file_name.to_string(),
        };
        Err(DataError::UnsupportedType(shown))
    }

    /// Match a MIME type, ignoring parameters such as `; charset=utf-8`
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or("").trim().to_lowercase();
        match essence.as_str() {
            MIME_JSON => Some(FileFormat::Json),
            MIME_CSV => Some(FileFormat::Csv),
            MIME_XLS | MIME_XLSX => Some(FileFormat::Excel),
            _ => None,
        }
    }

    pub fn from_extension(file_name: &str) -> Option<Self> {
        Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "json" => Some(FileFormat::Json),
                "csv" => Some(FileFormat::Csv),
                "xls" | "xlsx" => Some(FileFormat::Excel),
                _ => None,
            })
    }

    pub fn label(&self) -> &'static str {
        match self {
            FileFormat::Json => "JSON",
            FileFormat::Csv => "CSV",
            FileFormat::Excel => "Excel",
        }
    }
}
