//! Proposed corrections for the target lock file

use super::Dependency;
use semver::Version;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A proposed upgrade: the target should move `name` to `version`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    /// Module name
    pub name: String,
    /// Baseline's highest version for the module
    pub version: Version,
}

impl Correction {
    /// Creates a new correction
    pub fn new(name: impl Into<String>, version: Version) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }
}

impl From<&Correction> for Dependency {
    fn from(correction: &Correction) -> Self {
        Dependency::new(correction.name.clone(), correction.version.clone())
    }
}

impl fmt::Display for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> v{}", self.name, self.version)
    }
}
