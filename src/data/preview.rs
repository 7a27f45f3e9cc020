//! Data preview
//!
//! A quick look at the first rows of an upload, with every cell already
//! turned into display text.

use crate::types::Dataset;
use serde::Serialize;

/// Stringified head of a dataset
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DataPreview {
    /// Column headers
    pub headers: Vec<String>,
    /// Display text per visible row, one entry per header
    pub rows: Vec<Vec<String>>,
    /// Total number of rows in the dataset
    pub total_rows: usize,
}

impl DataPreview {
    /// Take up to `limit` rows from the dataset.
    ///
    /// Cells missing from a row show as empty text.
    pub fn from_dataset(dataset: &Dataset, limit: usize) -> Self {
        let rows = dataset
            .rows
            .iter()
            .take(limit)
            .map(|row| {
                dataset
                    .columns
                    .iter()
                    .map(|col| row.get(col).map(|v| v.to_string()).unwrap_or_default())
                    .collect()
            })
            .collect();

        Self {
            headers: dataset.columns.clone(),
            rows,
            total_rows: dataset.row_count(),
        }
    }

    /// Number of rows shown
    pub fn visible_rows(&self) -> usize {
        self.rows.len()
    }

    /// Whether rows were left out of the preview
    pub fn is_truncated(&self) -> bool {
        self.rows.len() < self.total_rows
    }

    /// Badge text such as "1.2K rows"
    pub fn row_count_label(&self) -> String {
        format_row_count(self.total_rows)
    }

    /// Render as a plain text table with padded columns
    pub fn to_text_table(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.chars().count());
                }
            }
        }

        let format_line = |cells: &[String]| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, &w)| format!("{:<width$}", cell, width = w))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_string()
        };

        let mut lines = Vec::with_capacity(self.rows.len() + 3);
        lines.push(format_line(&self.headers));
        lines.push(
            widths
                .iter()
                .map(|&w| "-".repeat(w))
                .collect::<Vec<_>>()
                .join("-+-"),
        );
        for row in &self.rows {
            lines.push(format_line(row));
        }
        if self.is_truncated() {
            lines.push(format!(
                "({} of {})",
                self.visible_rows(),
                self.row_count_label()
            ));
        }
        lines.join("\n")
    }
}

/// Format row count with a compact suffix (e.g., "1.2K rows")
pub fn format_row_count(count: usize) -> String {
    // 999,950 and up would print as "1000.0K"
    let formatted = if count >= 999_950 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    };

    if count == 1 {
        format!("{} row", formatted)
    } else {
        format!("{} rows", formatted)
    }
}
