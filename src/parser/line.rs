//! Line parser for go.sum-style lock files
//!
//! Handles line formats:
//! - Plain record: `github.com/google/uuid v1.2.0`
//! - Checksum record: `cloud.google.com/go v0.26.0 h1:...=`
//! - Manifest checksum record: `cloud.google.com/go v0.26.0/go.mod h1:...=`
//!
//! Only the first two space-separated columns are read; hash columns are
//! ignored.

use crate::domain::Dependency;
use crate::error::ParseError;
use semver::Version;

/// Suffix marking a record about a module's go.mod rather than its content
pub const GO_MOD_MARKER: &str = "/go.mod";

/// Cut the line at the first `/go.mod`, or return it unchanged
pub fn trim_marker(line: &str) -> &str {
    match line.find(GO_MOD_MARKER) {
        Some(index) => &line[..index],
        None => line,
    }
}

/// Parse a version token, dropping any leading `v` characters
pub fn parse_version(token: &str) -> Result<Version, ParseError> {
    let stripped = token.trim_start_matches('v');
    Version::parse(stripped).map_err(|e| ParseError::version(token, e))
}

/// Parse one lock file line into a dependency
pub fn parse_line(line: &str) -> Result<Dependency, ParseError> {
    let trimmed = trim_marker(line);
    let mut tokens = trimmed.split(' ');

    let (name, version) = match (tokens.next(), tokens.next()) {
        (Some(name), Some(version)) => (name, version),
        _ => return Err(ParseError::split(line)),
    };
    if name.is_empty() {
        return Err(ParseError::empty_name(line));
    }

    Ok(Dependency::new(name, parse_version(version)?))
}

/// Parse one raw lock file line into a dependency
///
/// Only the name and version columns are decoded, so hash columns and
/// anything after `/go.mod` may hold arbitrary bytes.
pub fn parse_line_bytes(line: &[u8]) -> Result<Dependency, ParseError> {
    let kept = record_columns(line);
    let text = std::str::from_utf8(kept).map_err(|e| ParseError::encoding(kept, e))?;
    parse_line(text)
}

/// Bytes before the marker, limited to the first two columns
fn record_columns(line: &[u8]) -> &[u8] {
    let marker = GO_MOD_MARKER.as_bytes();
    let line = match line.windows(marker.len()).position(|w| w == marker) {
        Some(index) => &line[..index],
        None => line,
    };
    match line.iter().enumerate().filter(|(_, b)| **b == b' ').nth(1) {
        Some((index, _)) => &line[..index],
        None => line,
    }
}

/// Render a dependency as `<name> v<version>`
pub fn format_line(dep: &Dependency) -> String {
    format!("{} v{}", dep.name, dep.version)
}
