//! Plain text output: one lock-file style line per correction

use crate::domain::{Correction, Dependency};
use crate::error::OutputError;
use crate::output::OutputFormatter;
use crate::parser::format_line;
use std::io::Write;

/// Text formatter writing `<name> v<version>` lines
#[derive(Debug, Default)]
pub struct TextFormatter;

impl TextFormatter {
    /// Create a new text formatter
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for TextFormatter {
    fn format(
        &self,
        corrections: &[Correction],
        writer: &mut dyn Write,
    ) -> Result<(), OutputError> {
        for correction in corrections {
            let dep = Dependency::from(correction);
            writeln!(writer, "{}", format_line(&dep))?;
        }
        Ok(())
    }
}
