//! Chart configuration
//!
//! [`ChartConfigForm`] holds the in-progress selections (chart type, X
//! axis, Y axes) and applies the selection rules; [`build_config`] is the
//! validation run when the form is submitted.

use crate::chart::error::{AxisRole, ConfigError, ConfigResult};
use crate::types::{ChartConfig, ChartType};

/// Validate user selections against the dataset columns.
///
/// Rules run in order and the first failure is returned:
/// 1. an X-axis must be chosen
/// 2. at least one Y-axis (pie: Value) column must be chosen
/// 3. a pie chart takes at most one Value column
/// 4. every column must exist and no Y-axis may repeat the X-axis
pub fn build_config(
    chart_type: ChartType,
    x_axis: &str,
    y_axes: &[String],
    columns: &[String],
) -> ConfigResult<ChartConfig> {
    if x_axis.is_empty() {
        return Err(ConfigError::MissingAxis(AxisRole::X));
    }

    if y_axes.is_empty() {
        let role = if chart_type.is_pie() { AxisRole::Value } else { AxisRole::Y };
        return Err(ConfigError::MissingAxis(role));
    }

    if chart_type.is_pie() && y_axes.len() > 1 {
        return Err(ConfigError::PieArity);
    }

    let known = |name: &str| columns.iter().any(|c| c == name);

    if !known(x_axis) {
        return Err(ConfigError::UnknownColumn(x_axis.to_string()));
    }

    let mut selected: Vec<String> = Vec::with_capacity(y_axes.len());
    for y in y_axes {
        if !known(y) {
            return Err(ConfigError::UnknownColumn(y.clone()));
        }
        if y == x_axis {
            return Err(ConfigError::AxisOverlap(y.clone()));
        }
        if !selected.contains(y) {
            selected.push(y.clone());
        }
    }

    Ok(ChartConfig {
        chart_type,
        x_axis: x_axis.to_string(),
        y_axes: selected,
    })
}

/// State of the chart configuration form
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfigForm {
    /// Column names for display
    columns: Vec<String>,
    /// Selected chart type
    chart_type: ChartType,
    /// Selected X axis column ("" when nothing is chosen)
    x_axis: String,
    /// Selected Y axis columns, in click order
    y_axes: Vec<String>,
    /// Message from the last failed submission
    error: Option<String>,
}

impl ChartConfigForm {
    /// Fresh form: bar chart, first column as X-axis, no Y-axes
    pub fn new(columns: Vec<String>) -> Self {
        let x_axis = columns.first().cloned().unwrap_or_default();
        Self {
            columns,
            chart_type: ChartType::default(),
            x_axis,
            y_axes: Vec::new(),
            error: None,
        }
    }

    /// Form pre-filled from a previously submitted configuration
    pub fn from_config(columns: Vec<String>, config: &ChartConfig) -> Self {
        Self {
            columns,
            chart_type: config.chart_type,
            x_axis: config.x_axis.clone(),
            y_axes: config.y_axes.clone(),
            error: None,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    pub fn x_axis(&self) -> &str {
        &self.x_axis
    }

    pub fn y_axes(&self) -> &[String] {
        &self.y_axes
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Change the chart type. Y-axis selections are always cleared.
    pub fn set_chart_type(&mut self, chart_type: ChartType) {
        self.chart_type = chart_type;
        self.y_axes.clear();
    }

    /// Choose the X-axis column. It stops being a Y-axis candidate.
    ///
    /// Returns `false` (and changes nothing) for an unknown column.
    pub fn select_x_axis(&mut self, column: &str) -> bool {
        if !self.columns.iter().any(|c| c == column) {
            tracing::debug!(column, "Ignoring unknown X-axis column");
            return false;
        }
        self.x_axis = column.to_string();
        self.y_axes.retain(|y| y != column);
        true
    }

    /// Columns that may be picked as Y-axes (every column but the X-axis)
    pub fn y_axis_candidates(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| **c != self.x_axis)
            .map(String::as_str)
            .collect()
    }

    /// Whether the Y-axis checkbox for `column` can be clicked.
    ///
    /// For pie charts, once a value column is chosen the others are disabled.
    pub fn is_y_axis_enabled(&self, column: &str) -> bool {
        if self.columns.is_empty() || column == self.x_axis {
            return false;
        }
        if self.chart_type.is_pie() && !self.y_axes.is_empty() {
            return self.y_axes.iter().any(|y| y == column);
        }
        true
    }

    pub fn is_y_axis_selected(&self, column: &str) -> bool {
        self.y_axes.iter().any(|y| y == column)
    }

    /// Toggle a Y-axis column.
    ///
    /// Bar/line: adds or removes the column. Pie: at most one column is
    /// selected; clicking it again deselects it and clicking another one
    /// while it is selected does nothing. Returns whether the selection
    /// changed.
    pub fn toggle_y_axis(&mut self, column: &str) -> bool {
        if !self.is_y_axis_enabled(column) {
            return false;
        }

        if let Some(pos) = self.y_axes.iter().position(|y| y == column) {
            self.y_axes.remove(pos);
        } else {
            self.y_axes.push(column.to_string());
        }
        true
    }

    /// Heading for the Y-axis selector
    pub fn y_axis_label(&self) -> &'static str {
        if self.chart_type.is_pie() {
            "Value Column (Select one)"
        } else {
            "Y-Axis Columns (Select one or more)"
        }
    }

    /// Validate the current selections.
    ///
    /// On failure the message is kept on the form for display; on success
    /// any previous message is cleared.
    pub fn submit(&mut self) -> ConfigResult<ChartConfig> {
        let result = build_config(self.chart_type, &self.x_axis, &self.y_axes, &self.columns);
        self.record(result)
    }

    /// Validate the selections against `columns` instead of the columns the
    /// form was opened with.
    ///
    /// A form can outlive the dataset it was built for; submitting it
    /// against the current columns rejects selections that no longer exist.
    pub fn submit_for(&mut self, columns: &[String]) -> ConfigResult<ChartConfig> {
        let result = build_config(self.chart_type, &self.x_axis, &self.y_axes, columns);
        self.record(result)
    }

    /// Record a submission failure on the form for display
    pub fn reject(&mut self, error: ConfigError) -> ConfigError {
        self.error = Some(error.to_string());
        error
    }

    fn record(&mut self, result: ConfigResult<ChartConfig>) -> ConfigResult<ChartConfig> {
        self.error = None;
        result.map_err(|e| self.reject(e))
    }

    /// Set raw selections, bypassing the click rules.
    ///
    /// Used when selections come from outside the form (command line
    /// arguments); `submit` still validates them.
    pub fn with_selection(mut self, x_axis: impl Into<String>, y_axes: Vec<String>) -> Self {
        self.x_axis = x_axis.into();
        self.y_axes = y_axes;
        self
    }
}
