//! go.mod `require` block output
//!
//! Produces a block that can be appended to a go.mod as-is:
//!
//! ```text
//! require (
//!     cloud.google.com/go v0.34.0
//! )
//! ```

use crate::domain::{Correction, Dependency};
use crate::error::OutputError;
use crate::output::OutputFormatter;
use crate::parser::format_line;
use std::io::Write;

/// Formatter writing a go.mod `require` block
#[derive(Debug, Default)]
pub struct GoModFormatter;

impl GoModFormatter {
    /// Create a new go.mod formatter
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for GoModFormatter {
    fn format(
        &self,
        corrections: &[Correction],
        writer: &mut dyn Write,
    ) -> Result<(), OutputError> {
        if corrections.is_empty() {
            return Ok(());
        }

        writeln!(writer)?;
        writeln!(writer, "require (")?;
        for correction in corrections {
            writeln!(writer, "\t{}", format_line(&Dependency::from(correction)))?;
        }
        writeln!(writer, ")")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use semver::Version;

    fn format(corrections: &[Correction]) -> String {
        let mut buf = Vec::new();
        GoModFormatter::new().format(corrections, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_require_empty_writes_nothing() {
        assert_eq!(format(&[]), "");
    }

    #[test]
    fn test_require_block() {
        let output = format(&[
            Correction::new("cloud.google.com/go", Version::new(0, 34, 0)),
            Correction::new("github.com/google/uuid", Version::new(1, 3, 0)),
        ]);
        assert_eq!(
            output,
            "\nrequire (\n\tcloud.google.com/go v0.34.0\n\tgithub.com/google/uuid v1.3.0\n)\n"
        );
    }
}
