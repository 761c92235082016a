//! Lock file parsing
//!
//! This module provides:
//! - The line parser turning one go.sum-style line into a dependency
//! - The inverse formatter
//! - Whole-file scanning into a version index

mod line;
mod scan;

pub use line::{
    format_line, parse_line, parse_line_bytes, parse_version, trim_marker, GO_MOD_MARKER,
};
pub use scan::{scan_file, scan_reader};
