//! Application module - the Chartastic controller and its state.
//!
//! This module is organized into several submodules:
//! - `state` - The Chartastic struct definition and the pipeline state
//! - `lifecycle` - Initialization and reset
//! - `data_loading` - Upload handling and preview
//! - `data_viz` - Chart configuration and series

mod state;
mod lifecycle;
mod data_loading;
mod data_viz;

pub use state::{AppState, Chartastic};
