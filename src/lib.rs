//! syncdeps - lock file version synchronisation library
//!
//! This library compares two go.sum-style lock files and proposes
//! corrections for every module whose target version is older than the
//! highest version recorded in the baseline:
//! - Line parsing (`parser`)
//! - Per-module version aggregation (`domain::VersionIndex`)
//! - The one-directional diff (`compare`)
//! - Output to stdout or a manifest file (`output`)

pub mod cli;
pub mod compare;
pub mod config;
pub mod domain;
pub mod error;
pub mod orchestrator;
pub mod output;
pub mod parser;
