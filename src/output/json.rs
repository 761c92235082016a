//! JSON output formatter for machine processing

use crate::domain::Correction;
use crate::error::OutputError;
use crate::output::OutputFormatter;
use std::io::Write;

/// JSON formatter: an array of `{"name": ..., "version": ...}` objects
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(
        &self,
        corrections: &[Correction],
        writer: &mut dyn Write,
    ) -> Result<(), OutputError> {
        let json = serde_json::to_string_pretty(corrections)?;
        writeln!(writer, "{}", json)?;
        Ok(())
    }
}
