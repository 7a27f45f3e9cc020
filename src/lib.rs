//! Chartastic - upload a tabular dataset, preview it and turn it into chart data.
//!
//! The pipeline runs in one direction:
//!
//! ```text
//! file ──► data::parse_upload ──► Dataset ──► chart::ChartConfigForm ──► ChartConfig
//!                                    │                                       │
//!                                    └──► data::DataPreview                  ▼
//!                                                              chart::build_series
//! ```
//!
//! [`app::Chartastic`] owns the state between those steps and reports every
//! outcome through [`notifications::ToastManager`].

pub mod app;
pub mod chart;
pub mod constants;
pub mod data;
pub mod notifications;
pub mod settings;
pub mod types;
