//! Error types for data operations
//!
//! Provides unified error handling for all data loading and parsing operations.

use thiserror::Error;

/// Errors that can occur while loading an uploaded dataset
#[derive(Error, Debug)]
pub enum DataError {
    /// Neither the MIME type nor the file extension is one we accept
    #[error("Unsupported file type: {0}. Please upload a JSON, CSV, XLS or XLSX file.")]
    UnsupportedType(String),

    /// Malformed JSON/CSV/Excel structure
    #[error("{0}")]
    Format(String),

    /// Parsed data is not a non-empty sequence of objects
    #[error("{0}")]
    Shape(String),

    /// File is too large to load into memory
    #[error("File too large: {size_mb}MB (max {max_mb}MB)")]
    TooLarge { size_mb: u64, max_mb: u64 },

    /// IO error from std::io
    #[error("Error reading file: {0}")]
    Io(#[from] std::io::Error),
}

impl DataError {
    pub fn format(msg: impl Into<String>) -> Self {
        DataError::Format(msg.into())
    }

    pub fn shape(msg: impl Into<String>) -> Self {
        DataError::Shape(msg.into())
    }
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;

impl From<serde_json::Error> for DataError {
    fn from(e: serde_json::Error) -> Self {
        DataError::Format(format!("Error parsing JSON: {}", e))
    }
}

impl From<calamine::Error> for DataError {
    fn from(e: calamine::Error) -> Self {
        DataError::Format(format!("Error reading workbook: {}", e))
    }
}
