//! Application state - the Chartastic struct definition.

use crate::notifications::{Toast, ToastManager};
use crate::settings::Settings;
use crate::types::{ChartConfig, Dataset};

/// Page-level pipeline state.
///
/// Every transition replaces the fields wholesale; nothing is edited in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    /// The loaded dataset, if any
    pub dataset: Option<Dataset>,
    /// The last successfully submitted configuration
    pub config: Option<ChartConfig>,
    /// Whether the chart is shown
    pub show_chart: bool,
}

impl AppState {
    /// True when nothing is loaded, configured or shown
    pub fn is_initial(&self) -> bool {
        self.dataset.is_none() && self.config.is_none() && !self.show_chart
    }

    /// Column names of the loaded dataset (empty when nothing is loaded)
    pub fn columns(&self) -> &[String] {
        self.dataset.as_ref().map(|d| d.columns.as_slice()).unwrap_or(&[])
    }

    /// Name of the loaded file
    pub fn file_name(&self) -> Option<&str> {
        self.dataset.as_ref().map(|d| d.name.as_str())
    }
}

/// The controller owning the pipeline: dataset, chart configuration,
/// notifications and settings.
pub struct Chartastic {
    pub(crate) state: AppState,
    pub(crate) toasts: ToastManager,
    pub(crate) settings: Settings,
}

impl Chartastic {
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    /// Toasts still on screen, paired with the opacity to draw them at.
    ///
    /// With `reduce_motion` set in the settings toasts never fade.
    pub fn visible_toasts(&self) -> impl Iterator<Item = (&Toast, f32)> + '_ {
        let reduce_motion = self.settings.reduce_motion;
        self.toasts
            .toasts()
            .iter()
            .filter(|toast| !toast.is_expired())
            .map(move |toast| (toast, toast.opacity(reduce_motion)))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
