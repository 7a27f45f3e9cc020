//! Application-wide constants.
//!
//! Centralizes limits, MIME types and display strings so the parsers,
//! the preview and the orchestrator agree on them.

// ============================================================================
// Loading Limits
// ============================================================================

/// Default maximum upload size in megabytes
pub const DEFAULT_MAX_FILE_SIZE_MB: u64 = 100;

/// Default number of rows shown in the data preview
pub const DEFAULT_PREVIEW_ROWS: usize = 100;

// ============================================================================
// Accepted File Types
// ============================================================================

pub const MIME_JSON: &str = "application/json";
pub const MIME_CSV: &str = "text/csv";

/// Legacy binary workbook (.xls)
pub const MIME_XLS: &str = "application/vnd.ms-excel";

/// Office Open XML workbook (.xlsx)
pub const MIME_XLSX: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

// ============================================================================
// Excel Header Naming
// ============================================================================

/// Name given to header cells that are empty
pub const EMPTY_HEADER_NAME: &str = "__EMPTY";

// ============================================================================
// Notifications
// ============================================================================

/// Maximum number of toasts kept on screen at once
pub const MAX_VISIBLE_TOASTS: usize = 5;

/// Portion of a toast's lifetime spent fading out
pub const TOAST_FADE_FRACTION: f32 = 0.1;
