//! Chart configuration errors

use thiserror::Error;

/// Which axis selection is missing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisRole {
    /// Category/label column
    X,
    /// Value columns of a bar or line chart
    Y,
    /// Value column of a pie chart
    Value,
}

impl AxisRole {
    pub fn label(&self) -> &'static str {
        match self {
            AxisRole::X => "X-axis",
            AxisRole::Y => "Y-axis",
            AxisRole::Value => "Value",
        }
    }
}

/// Validation failures for a submitted chart configuration
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{}", missing_axis_message(.0))]
    MissingAxis(AxisRole),

    #[error("Pie charts can only have one Value column.")]
    PieArity,

    #[error("Please upload a data file first.")]
    NoDataset,

    #[error("Column '{0}' is not in the dataset.")]
    UnknownColumn(String),

    #[error("Column '{0}' cannot be both the X-axis and a Y-axis.")]
    AxisOverlap(String),
}

fn missing_axis_message(axis: &AxisRole) -> String {
    match axis {
        AxisRole::X => "Please select an X-axis column.".to_string(),
        other => format!("Please select at least one {} column.", other.label()),
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
