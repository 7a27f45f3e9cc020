//! User settings persisted as JSON.
//!
//! Settings live at `<config dir>/chartastic/settings.json`. A missing file
//! means defaults; a malformed one is logged and also falls back to
//! defaults so a bad edit never blocks an upload.

use crate::constants::{DEFAULT_MAX_FILE_SIZE_MB, DEFAULT_PREVIEW_ROWS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default location of the settings file
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("chartastic").join("settings.json"))
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Rows shown in the data preview
    pub preview_row_limit: usize,
    /// Uploads above this size are rejected before reading
    pub max_file_size_mb: u64,
    /// Disable toast fade animations
    pub reduce_motion: bool,
    /// Where these settings were loaded from (not serialized)
    #[serde(skip)]
    pub path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preview_row_limit: DEFAULT_PREVIEW_ROWS,
            max_file_size_mb: DEFAULT_MAX_FILE_SIZE_MB,
            reduce_motion: false,
            path: None,
        }
    }
}

impl Settings {
    /// Load from the default location
    pub fn load() -> Self {
        match default_settings_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        let mut settings = match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<Settings>(&content) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("Invalid settings file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                tracing::warn!("Failed to read settings {}: {}", path.display(), e);
                Self::default()
            }
        };
        settings.path = Some(path.to_path_buf());
        settings
    }

    /// Write to the path these settings were loaded from (or the default path)
    pub fn save(&self) -> anyhow::Result<PathBuf> {
        let path = self
            .path
            .clone()
            .or_else(default_settings_path)
            .ok_or_else(|| anyhow::anyhow!("No settings directory available"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        tracing::debug!("Saved settings to {}", path.display());
        Ok(path)
    }
}
