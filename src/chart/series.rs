//! Chart series building
//!
//! Turns a dataset plus a chart configuration into the structure a chart
//! renderer consumes. Series are derived data: they are rebuilt from the
//! dataset on every render and never stored.

use crate::chart::color::{Hsla, palette_color};
use crate::chart::number::parse_number;
use crate::types::{CellValue, ChartConfig, ChartType, Dataset, RowRecord};
use serde::Serialize;

/// Render-ready chart data
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ChartSeries {
    /// Bar and line charts: one point per row, one series per value column
    Cartesian(CartesianData),
    /// Pie charts: one slice per row with a numeric value
    Pie(PieData),
}

/// Data for bar and line charts
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartesianData {
    pub chart_type: ChartType,
    /// Key of the category value in each point
    pub x_key: String,
    /// One entry per value column, with its color
    pub series: Vec<SeriesStyle>,
    /// One point per dataset row: the X value plus each coerced Y value
    pub points: Vec<RowRecord>,
}

/// A value column and the color it is drawn with
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeriesStyle {
    pub key: String,
    pub color: Hsla,
}

/// Data for pie charts
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieData {
    pub name_key: String,
    pub value_key: String,
    pub slices: Vec<PieSlice>,
}

/// A single pie slice
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PieSlice {
    pub name: CellValue,
    pub value: f64,
    pub color: Hsla,
}

impl ChartSeries {
    pub fn chart_type(&self) -> ChartType {
        match self {
            ChartSeries::Cartesian(data) => data.chart_type,
            ChartSeries::Pie(_) => ChartType::Pie,
        }
    }

    /// Number of points (bar/line) or slices (pie)
    pub fn len(&self) -> usize {
        match self {
            ChartSeries::Cartesian(data) => data.points.len(),
            ChartSeries::Pie(data) => data.slices.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PieData {
    /// Sum of all slice values
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    /// Slice label like `North: 25%`
    pub fn slice_label(&self, index: usize) -> Option<String> {
        let slice = self.slices.get(index)?;
        let total = self.total();
        let percent = if total == 0.0 { 0.0 } else { slice.value / total * 100.0 };
        Some(format!("{}: {:.0}%", slice.name, percent))
    }
}

/// Build the series for `config` from `dataset`.
///
/// - Bar/line: every row becomes a point. Y values that parse as numbers
///   are stored as numbers; anything else keeps its original value.
/// - Pie: every row becomes a slice valued by the first Y column; rows whose
///   value does not parse are dropped.
///
/// Rows sharing an X value are not merged.
pub fn build_series(dataset: &Dataset, config: &ChartConfig) -> ChartSeries {
    match config.chart_type {
        ChartType::Bar | ChartType::Line => ChartSeries::Cartesian(build_cartesian(dataset, config)),
        ChartType::Pie => ChartSeries::Pie(build_pie(dataset, config)),
    }
}

fn build_cartesian(dataset: &Dataset, config: &ChartConfig) -> CartesianData {
    let points = dataset
        .rows
        .iter()
        .map(|row| {
            let mut point = RowRecord::with_capacity(config.y_axes.len() + 1);
            point.insert(config.x_axis.clone(), cell_or_null(row, &config.x_axis));
            for y in &config.y_axes {
                let raw = cell_or_null(row, y);
                let value = match parse_number(&raw) {
                    Some(n) => CellValue::Number(n),
                    None => raw,
                };
                point.insert(y.clone(), value);
            }
            point
        })
        .collect();

    let series = config
        .y_axes
        .iter()
        .enumerate()
        .map(|(i, key)| SeriesStyle {
            key: key.clone(),
            color: palette_color(i),
        })
        .collect();

    CartesianData {
        chart_type: config.chart_type,
        x_key: config.x_axis.clone(),
        series,
        points,
    }
}

fn build_pie(dataset: &Dataset, config: &ChartConfig) -> PieData {
    let value_key = config.value_column().unwrap_or_default().to_string();

    let mut dropped = 0usize;
    let slices: Vec<PieSlice> = dataset
        .rows
        .iter()
        .filter_map(|row| {
            let value = row.get(&value_key).and_then(parse_number);
            if value.is_none() {
                dropped += 1;
            }
            Some((cell_or_null(row, &config.x_axis), value?))
        })
        .enumerate()
        .map(|(i, (name, value))| PieSlice {
            name,
            value,
            color: palette_color(i),
        })
        .collect();

    if dropped > 0 {
        tracing::debug!(dropped, column = %value_key, "Dropped pie rows without a numeric value");
    }

    PieData {
        name_key: config.x_axis.clone(),
        value_key,
        slices,
    }
}

fn cell_or_null(row: &RowRecord, key: &str) -> CellValue {
    row.get(key).cloned().unwrap_or(CellValue::Null)
}
