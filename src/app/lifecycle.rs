//! Initialization and reset

use super::{AppState, Chartastic};
use crate::notifications::{Toast, ToastManager};
use crate::settings::Settings;

impl Chartastic {
    /// Create a controller with settings from the default location
    pub fn new() -> Self {
        Self::with_settings(Settings::load())
    }

    pub fn with_settings(settings: Settings) -> Self {
        tracing::debug!(?settings, "Starting with settings");
        Self {
            state: AppState::default(),
            toasts: ToastManager::new(),
            settings,
        }
    }

    /// Whether there is anything to reset
    pub fn can_reset(&self) -> bool {
        !self.state.is_initial()
    }

    /// Clear dataset, configuration and chart visibility
    pub fn reset(&mut self) {
        self.state = AppState::default();
        tracing::info!("State reset");
        self.toasts
            .push(Toast::info("Application state has been reset.").with_title("Reset"));
    }
}

impl Default for Chartastic {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}
