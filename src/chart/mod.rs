//! Chart configuration and series building
//!
//! - `config` - the configuration form and its submission rules
//! - `series` - dataset + configuration to render-ready data
//! - `number` - lenient numeric parsing of cell values
//! - `color` - the chart palette

mod color;
mod config;
mod error;
mod number;
mod series;

pub use color::*;
pub use config::*;
pub use error::*;
pub use number::*;
pub use series::*;
