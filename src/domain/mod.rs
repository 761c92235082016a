//! Core domain models for syncdeps
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency records read from a lock file
//! - The per-module version index built from a whole file
//! - Corrections proposed for the target lock file
//! - Semantic-version precedence ordering

mod correction;
mod dependency;
mod precedence;
mod version_index;

pub use correction::Correction;
pub use dependency::Dependency;
pub use precedence::{cmp_precedence, is_older};
pub use version_index::VersionIndex;
