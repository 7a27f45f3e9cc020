//! Core types for the Chartastic pipeline.
//!
//! This module defines the data structures shared by the parsers, the
//! chart configurator and the series builder: cell values, row records,
//! datasets and chart configurations.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Data Types
// ============================================================================

/// A single scalar cell value.
///
/// Serializes untagged so a row renders as a plain JSON object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => f.write_str("null"),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Number(n) => f.write_str(&format_number(*n)),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

/// Format a number the way a spreadsheet user expects to read it:
/// whole numbers without a fractional part, non-finite values spelled out.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{:.0}", n)
    } else {
        format!("{}", n)
    }
}

/// One data row: column name to value, in the order the source listed them.
pub type RowRecord = IndexMap<String, CellValue>;

/// A validated dataset: rows plus the column list taken from the first row.
///
/// Built by [`crate::data::validate_records`]. Later rows are not checked
/// against the first row's keys; a missing key simply reads as absent.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dataset {
    /// Source file name (as uploaded)
    pub name: String,
    /// Column names, first row key order
    pub columns: Vec<String>,
    /// Row records in file order
    pub rows: Vec<RowRecord>,
}

impl Dataset {
    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Look up a single cell; `None` when the row is out of range or lacks the key
    pub fn value(&self, row: usize, column: &str) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(column))
    }
}

// ============================================================================
// Chart Types
// ============================================================================

/// Types of charts available
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Bar,
    Line,
    Pie,
}

impl ChartType {
    /// Heading shown above the rendered chart
    pub fn title(&self) -> &'static str {
        match self {
            ChartType::Bar => "Bar Chart",
            ChartType::Line => "Line Chart",
            ChartType::Pie => "Pie Chart",
        }
    }

    /// Lowercase identifier used in messages and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Pie => "pie",
        }
    }

    pub fn is_pie(&self) -> bool {
        matches!(self, ChartType::Pie)
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bar" => Ok(ChartType::Bar),
            "line" => Ok(ChartType::Line),
            "pie" => Ok(ChartType::Pie),
            other => Err(format!("unknown chart type '{}' (expected bar, line or pie)", other)),
        }
    }
}

/// A validated chart configuration.
///
/// Produced by [`crate::chart::build_config`]; `x_axis` and every entry of
/// `y_axes` name dataset columns, `y_axes` never contains `x_axis`, and a
/// pie chart carries exactly one value column.
#[derive(Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    /// Type of chart to render
    pub chart_type: ChartType,
    /// Column used for categories/labels
    pub x_axis: String,
    /// Columns used for values, in selection order
    pub y_axes: Vec<String>,
}

impl ChartConfig {
    /// The pie value column (first y-axis)
    pub fn value_column(&self) -> Option<&str> {
        self.y_axes.first().map(String::as_str)
    }
}
