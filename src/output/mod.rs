//! Output formatting and sinks for corrections
//!
//! This module provides:
//! - JSON output for machine processing
//! - Plain `<name> v<version>` lines
//! - A go.mod `require` block ready to append to a manifest
//! - Sink selection between stdout and appending to a manifest file

mod gomod;
mod json;
mod text;

pub use gomod::GoModFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::domain::Correction;
use crate::error::OutputError;
use serde::Deserialize;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Default manifest that corrections are appended to
pub const DEFAULT_MANIFEST: &str = "go.mod";

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON array of `{name, version}` objects
    #[default]
    Json,
    /// One `<name> v<version>` line per correction
    Text,
    /// A go.mod `require ( ... )` block
    Require,
}

/// Destination choice as given on the command line or in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    /// Write to standard output
    #[default]
    Stdout,
    /// Append to the manifest file
    Manifest,
}

/// Where corrections are written
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputSink {
    /// Standard output
    #[default]
    Stdout,
    /// Append to an existing manifest file
    Manifest(PathBuf),
}

impl OutputSink {
    /// Build a sink from a destination choice and manifest path
    pub fn from_target(target: OutputTarget, manifest: PathBuf) -> Self {
        match target {
            OutputTarget::Stdout => OutputSink::Stdout,
            OutputTarget::Manifest => OutputSink::Manifest(manifest),
        }
    }

    /// Open the sink for writing
    ///
    /// A manifest is opened in append mode and must already exist.
    pub fn open(&self) -> Result<Box<dyn Write>, OutputError> {
        match self {
            OutputSink::Stdout => Ok(Box::new(io::stdout().lock())),
            OutputSink::Manifest(path) => {
                let file = OpenOptions::new()
                    .append(true)
                    .open(path)
                    .map_err(|e| OutputError::Open {
                        path: path.clone(),
                        source: e,
                    })?;
                Ok(Box::new(BufWriter::new(file)))
            }
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and write the corrections
    fn format(&self, corrections: &[Correction], writer: &mut dyn Write)
        -> Result<(), OutputError>;
}

/// Create an output formatter for the given format
pub fn create_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter::new()),
        OutputFormat::Text => Box::new(TextFormatter::new()),
        OutputFormat::Require => Box::new(GoModFormatter::new()),
    }
}

/// Format `corrections` and write them to `sink`, flushing before returning
pub fn emit(
    corrections: &[Correction],
    format: OutputFormat,
    sink: &OutputSink,
) -> Result<(), OutputError> {
    let formatter = create_formatter(format);
    let mut writer = sink.open()?;
    formatter.format(corrections, writer.as_mut())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use semver::Version;

    fn render(format: OutputFormat, corrections: &[Correction]) -> String {
        let mut buf = Vec::new();
        create_formatter(format)
            .format(corrections, &mut buf)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Json);
    }

    #[test]
    fn test_output_sink_default() {
        assert_eq!(OutputSink::default(), OutputSink::Stdout);
    }

    #[test]
    fn test_create_formatter_dispatch() {
        let corrections = vec![Correction::new("m", Version::new(1, 0, 0))];
        assert!(render(OutputFormat::Json, &corrections).starts_with('['));
        assert_eq!(render(OutputFormat::Text, &corrections), "m v1.0.0\n");
        assert!(render(OutputFormat::Require, &corrections).contains("require ("));
    }

    #[test]
    fn test_output_sink_from_target() {
        assert_eq!(
            OutputSink::from_target(OutputTarget::Stdout, PathBuf::from("go.mod")),
            OutputSink::Stdout
        );
        assert_eq!(
            OutputSink::from_target(OutputTarget::Manifest, PathBuf::from("app/go.mod")),
            OutputSink::Manifest(PathBuf::from("app/go.mod"))
        );
    }

    #[test]
    fn test_output_format_deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: OutputFormat,
        }
        let w: Wrapper = toml::from_str("format = \"require\"").unwrap();
        assert_eq!(w.format, OutputFormat::Require);
    }

    #[test]
    fn test_manifest_sink_requires_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = OutputSink::Manifest(dir.path().join("go.mod"));
        let err = sink.open().err().unwrap();
        assert!(matches!(err, OutputError::Open { .. }));
    }

    #[test]
    fn test_emit_appends_to_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("go.mod");
        std::fs::write(&path, "module example.com/app\n").unwrap();

        let corrections = vec![Correction::new("test1", Version::new(0, 10, 1))];
        emit(
            &corrections,
            OutputFormat::Text,
            &OutputSink::Manifest(path.clone()),
        )
        .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "module example.com/app\ntest1 v0.10.1\n");
    }
}
