//! Semantic-version precedence
//!
//! `semver::Version`'s `Ord` falls back to build metadata to stay total,
//! which precedence rules forbid. Everything that orders versions goes
//! through here instead.

use semver::Version;
use std::cmp::Ordering;

/// Compares two versions by major, minor, patch, then pre-release.
/// Build metadata never influences the result.
pub fn cmp_precedence(a: &Version, b: &Version) -> Ordering {
    a.major
        .cmp(&b.major)
        .then(a.minor.cmp(&b.minor))
        .then(a.patch.cmp(&b.patch))
        .then_with(|| a.pre.cmp(&b.pre))
}

/// Returns true if `a` has strictly lower precedence than `b`
pub fn is_older(a: &Version, b: &Version) -> bool {
    cmp_precedence(a, b) == Ordering::Less
}
