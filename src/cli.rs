//! CLI argument parsing module for syncdeps

use crate::output::{OutputFormat, OutputTarget};
use clap::Parser;
use std::path::PathBuf;

/// Propose version corrections for a go.sum against a baseline go.sum
#[derive(Parser, Debug, Clone)]
#[command(
    name = "syncdeps",
    version,
    about = "Propose version corrections for a go.sum against a baseline"
)]
pub struct CliArgs {
    /// Path to the baseline go.sum
    #[arg(long, env = "SYNCDEPS_BASELINE")]
    pub baseline: Option<PathBuf>,

    /// Path to the target go.sum
    #[arg(long, env = "SYNCDEPS_TARGET")]
    pub target: Option<PathBuf>,

    // Output options
    /// Where to write corrections [default: stdout]
    #[arg(long, value_enum)]
    pub output: Option<OutputTarget>,

    /// Manifest file appended to with `--output manifest` [default: go.mod]
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Output format [default: json]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Config file (default: $HOME/.syncdeps.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    // Logging
    /// Enable verbose logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    /// Log filter forced by `--verbose` or `--quiet`, if any
    pub fn log_filter(&self) -> Option<&'static str> {
        if self.verbose {
            Some("syncdeps=debug")
        } else if self.quiet {
            Some("syncdeps=error")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(["syncdeps"]);
        assert!(args.output.is_none());
        assert!(args.manifest.is_none());
        assert!(args.format.is_none());
        assert!(args.config.is_none());
        assert!(!args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_paths() {
        let args = CliArgs::parse_from([
            "syncdeps",
            "--baseline",
            "base/go.sum",
            "--target",
            "app/go.sum",
        ]);
        assert_eq!(args.baseline, Some(PathBuf::from("base/go.sum")));
        assert_eq!(args.target, Some(PathBuf::from("app/go.sum")));
    }

    #[test]
    fn test_output_manifest() {
        let args = CliArgs::parse_from([
            "syncdeps",
            "--output",
            "manifest",
            "--manifest",
            "app/go.mod",
        ]);
        assert_eq!(args.output, Some(OutputTarget::Manifest));
        assert_eq!(args.manifest, Some(PathBuf::from("app/go.mod")));
    }

    #[test]
    fn test_output_invalid_value() {
        let result = CliArgs::try_parse_from(["syncdeps", "--output", "printer"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_format_values() {
        let args = CliArgs::parse_from(["syncdeps", "--format", "text"]);
        assert_eq!(args.format, Some(OutputFormat::Text));

        let args = CliArgs::parse_from(["syncdeps", "--format", "require"]);
        assert_eq!(args.format, Some(OutputFormat::Require));
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        let result = CliArgs::try_parse_from(["syncdeps", "--verbose", "--quiet"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_filter() {
        assert_eq!(CliArgs::parse_from(["syncdeps"]).log_filter(), None);
        assert_eq!(
            CliArgs::parse_from(["syncdeps", "-v"]).log_filter(),
            Some("syncdeps=debug")
        );
        assert_eq!(
            CliArgs::parse_from(["syncdeps", "-q"]).log_filter(),
            Some("syncdeps=error")
        );
    }
}
