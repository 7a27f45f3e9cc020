//! Data parsing and handling module
//!
//! This module turns an uploaded file into a validated [`Dataset`]:
//!
//! - `format` picks the parser from the MIME type or extension
//! - `json_parser`, `csv_parser`, `excel_parser` produce row records
//! - `validate` checks the shape and derives the column list
//! - `preview` renders the first rows as display text
//!
//! ## Error Handling
//!
//! All data operations return `DataResult<T>` which uses the `DataError` type.
//! Common errors include:
//! - `UnsupportedType`: neither MIME type nor extension is accepted
//! - `Format`: malformed JSON/CSV/Excel content
//! - `Shape`: parsed data is not a non-empty array of objects
//! - `TooLarge` / `Io`: file system limits and errors
//!
//! [`Dataset`]: crate::types::Dataset

mod csv_parser;
mod error;
mod excel_parser;
mod format;
mod json_parser;
mod loader;
mod preview;
mod validate;

pub use csv_parser::*;
pub use error::*;
pub use excel_parser::*;
pub use format::*;
pub use json_parser::*;
pub use loader::*;
pub use preview::*;
pub use validate::*;
