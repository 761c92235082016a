//! Per-module version index
//!
//! Folds dependency records into a map from module name to every version
//! observed for it, kept in descending precedence so that the first entry
//! is always the highest.

use super::{cmp_precedence, Dependency};
use semver::Version;
use std::collections::btree_map::{self, BTreeMap};

/// Module name → observed versions, highest first
///
/// A module's list is never empty once the module is present. Versions of
/// equal precedence (e.g. differing only in build metadata) keep the order
/// in which they were inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionIndex {
    entries: BTreeMap<String, Vec<Version>>,
}

impl VersionIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from a sequence of dependencies
    pub fn from_dependencies(deps: impl IntoIterator<Item = Dependency>) -> Self {
        let mut index = Self::new();
        for dep in deps {
            index.insert(dep);
        }
        index
    }

    /// Record one observed version for a module
    pub fn insert(&mut self, dep: Dependency) {
        match self.entries.entry(dep.name) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(vec![dep.version]);
            }
            btree_map::Entry::Occupied(mut slot) => {
                let versions = slot.get_mut();
                versions.push(dep.version);
                // stable: ties stay in insertion order
                versions.sort_by(|a, b| cmp_precedence(b, a));
            }
        }
    }

    /// Highest version observed for `name`
    pub fn top(&self, name: &str) -> Option<&Version> {
        self.entries.get(name).and_then(|versions| versions.first())
    }

    /// All versions observed for `name`, highest first
    pub fn versions(&self, name: &str) -> Option<&[Version]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    /// Returns true if `name` has been observed
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of distinct modules
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no module has been observed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate modules in ascending name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Version])> {
        self.entries
            .iter()
            .map(|(name, versions)| (name.as_str(), versions.as_slice()))
    }
}

impl FromIterator<Dependency> for VersionIndex {
    fn from_iter<I: IntoIterator<Item = Dependency>>(iter: I) -> Self {
        Self::from_dependencies(iter)
    }
}

impl Extend<Dependency> for VersionIndex {
    fn extend<I: IntoIterator<Item = Dependency>>(&mut self, iter: I) {
        for dep in iter {
            self.insert(dep);
        }
    }
}
