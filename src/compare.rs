//! Diff engine
//!
//! Compares a target index against a baseline index and proposes an
//! upgrade for every module whose target version has fallen behind. The
//! baseline is treated as ground truth: modules it does not know are never
//! reported, and modules missing from the target are not either.

use crate::domain::{is_older, Correction, VersionIndex};

/// Propose corrections bringing `target` up to `baseline`
///
/// Results follow the target's iteration order (ascending module name).
/// An empty vector means nothing needs correcting.
pub fn compare(baseline: &VersionIndex, target: &VersionIndex) -> Vec<Correction> {
    target
        .iter()
        .filter_map(|(name, versions)| {
            let wanted = baseline.top(name)?;
            let current = versions.first()?;
            if is_older(current, wanted) {
                let correction = Correction::new(name, wanted.clone());
                tracing::debug!(from = %current, "correction {}", correction);
                Some(correction)
            } else {
                None
            }
        })
        .collect()
}
