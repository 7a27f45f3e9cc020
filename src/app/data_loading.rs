//! Upload handling - replacing the dataset from a file

use super::{AppState, Chartastic};
use crate::data::{DataPreview, DataResult, load_file, parse_upload};
use crate::notifications::Toast;
use crate::types::Dataset;
use std::path::Path;

impl Chartastic {
    /// Load a file from disk.
    ///
    /// On failure an error toast is shown and the current state is kept.
    pub fn load_file(&mut self, path: &Path, mime: Option<&str>) -> DataResult<()> {
        let result = load_file(path, mime, self.settings.max_file_size_mb);
        self.finish_load(result)
    }

    /// Load an in-memory upload (name, reported MIME type and content)
    pub fn load_upload(&mut self, file_name: &str, mime: Option<&str>, bytes: &[u8]) -> DataResult<()> {
        let result = parse_upload(file_name, mime, bytes);
        self.finish_load(result)
    }

    fn finish_load(&mut self, result: DataResult<Dataset>) -> DataResult<()> {
        match result {
            Ok(dataset) => {
                let message = format!("{} has been loaded and parsed.", dataset.name);
                tracing::info!(
                    file = %dataset.name,
                    rows = dataset.row_count(),
                    columns = dataset.column_count(),
                    "Dataset loaded"
                );
                // A new dataset invalidates any chart built on the old one
                self.state = AppState {
                    dataset: Some(dataset),
                    config: None,
                    show_chart: false,
                };
                self.toasts
                    .push(Toast::success(message).with_title("File Loaded Successfully"));
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Upload rejected: {}", e);
                self.toasts.push(Toast::error(e.to_string()).with_title("Error"));
                Err(e)
            }
        }
    }

    /// Preview of the loaded dataset, limited to the configured row count
    pub fn preview(&self) -> Option<DataPreview> {
        self.state
            .dataset
            .as_ref()
            .map(|ds| DataPreview::from_dataset(ds, self.settings.preview_row_limit))
    }
}
