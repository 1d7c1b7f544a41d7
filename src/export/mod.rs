//! Export module for saving sampled noise fields.
//!
//! Supports 16-bit PNG for viewing and RAW formats for engine imports.

mod png;
mod raw;

pub use png::{export_field_png, PngExportOptions, PngExportError};
pub use raw::{export_field_raw, expected_file_size, RawFormat, RawExportError};
