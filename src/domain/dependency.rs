//! Dependency records read from a lock file

use crate::error::ParseError;
use crate::parser::{format_line, parse_line};
use semver::Version;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A module name paired with one recorded version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Module path, e.g. `cloud.google.com/go`
    pub name: String,
    /// Recorded version; build metadata is kept but never compared
    pub version: Version,
}

impl Dependency {
    /// Creates a new dependency
    pub fn new(name: impl Into<String>, version: Version) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }
}

impl FromStr for Dependency {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        parse_line(line)
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_line(self))
    }
}
