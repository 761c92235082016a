//! Orchestrator coordinating one comparison run
//!
//! Workflow: scan baseline → scan target → compare → emit

use crate::compare::compare;
use crate::config::RunConfig;
use crate::domain::Correction;
use crate::error::AppError;
use crate::output;
use crate::parser::scan_file;

/// Orchestrator for a single baseline/target comparison
pub struct Orchestrator {
    /// Resolved settings for this run
    config: RunConfig,
}

impl Orchestrator {
    /// Create a new orchestrator with the given settings
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Scan both lock files and compute corrections
    ///
    /// Either file failing to open or parse aborts the run.
    pub fn run(&self) -> Result<Vec<Correction>, AppError> {
        let baseline = scan_file(&self.config.baseline)?;
        let target = scan_file(&self.config.target)?;

        let corrections = compare(&baseline, &target);
        tracing::info!(
            corrections = corrections.len(),
            "{} of {} target modules need a newer version",
            corrections.len(),
            target.len()
        );
        Ok(corrections)
    }

    /// Write corrections to the configured sink in the configured format
    pub fn emit(&self, corrections: &[Correction]) -> Result<(), AppError> {
        output::emit(corrections, self.config.format, &self.config.sink)?;
        Ok(())
    }
}
