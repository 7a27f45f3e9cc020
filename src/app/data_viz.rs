//! Data visualization methods - configuring and building charts

use super::Chartastic;
use crate::chart::{ChartConfigForm, ChartSeries, ConfigError, ConfigResult, build_series};
use crate::notifications::Toast;
use crate::types::ChartConfig;

impl Chartastic {
    /// Configuration form for the loaded dataset.
    ///
    /// Pre-filled from the current configuration when one exists. `None`
    /// when no dataset is loaded.
    pub fn configurator(&self) -> Option<ChartConfigForm> {
        let dataset = self.state.dataset.as_ref()?;
        let columns = dataset.columns.clone();
        Some(match &self.state.config {
            Some(config) => ChartConfigForm::from_config(columns, config),
            None => ChartConfigForm::new(columns),
        })
    }

    /// Submit the form.
    ///
    /// Selections are checked against the loaded dataset's columns, not the
    /// ones the form was opened with. A valid configuration replaces the
    /// current one and shows the chart. An invalid one leaves the current
    /// configuration untouched.
    pub fn submit_config(&mut self, form: &mut ChartConfigForm) -> ConfigResult<ChartConfig> {
        let result = match &self.state.dataset {
            Some(dataset) => form.submit_for(&dataset.columns),
            None => Err(form.reject(ConfigError::NoDataset)),
        };

        match result {
            Ok(config) => {
                tracing::info!(
                    chart_type = %config.chart_type,
                    x_axis = %config.x_axis,
                    y_axes = ?config.y_axes,
                    "Chart configured"
                );
                self.toasts.push(
                    Toast::success(format!("Displaying {} chart.", config.chart_type))
                        .with_title("Chart Generated"),
                );
                self.state.config = Some(config.clone());
                self.state.show_chart = true;
                Ok(config)
            }
            Err(e) => {
                self.toasts
                    .push(Toast::error(e.to_string()).with_title("Error"));
                Err(e)
            }
        }
    }

    /// Chart data for the current dataset and configuration.
    ///
    /// Rebuilt on every call; `None` while the chart is hidden.
    pub fn chart_series(&self) -> Option<ChartSeries> {
        if !self.state.show_chart {
            return None;
        }
        let dataset = self.state.dataset.as_ref()?;
        let config = self.state.config.as_ref()?;
        Some(build_series(dataset, config))
    }
}
