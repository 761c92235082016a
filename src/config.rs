//! Configuration loading and resolution
//!
//! Settings come from, in order of priority:
//! 1. CLI flags
//! 2. Environment variables (`SYNCDEPS_BASELINE`, `SYNCDEPS_TARGET`)
//! 3. The TOML config file (`--config`, else `$HOME/.syncdeps.toml`)
//! 4. Built-in defaults

use crate::cli::CliArgs;
use crate::error::ConfigError;
use crate::output::{OutputFormat, OutputSink, OutputTarget, DEFAULT_MANIFEST};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the config file looked up in the home directory
pub const CONFIG_FILE_NAME: &str = ".syncdeps.toml";

/// Contents of the TOML config file; every key is optional
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub baseline: Option<PathBuf>,
    pub target: Option<PathBuf>,
    pub output: Option<OutputTarget>,
    pub manifest: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}

impl FileConfig {
    /// Load the config file
    ///
    /// An explicit path must be readable. Without one, the default file in
    /// the home directory is used if present and defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => Self::from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Read and parse a config file
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::from_toml(&contents).map_err(|e| ConfigError::parse(path, e))?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Parse config file contents
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

/// Returns `$HOME/.syncdeps.toml`, or None without a home directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
}

/// Fully resolved settings for one comparison run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Lock file holding the trusted version floors
    pub baseline: PathBuf,
    /// Lock file being checked
    pub target: PathBuf,
    /// Where corrections go
    pub sink: OutputSink,
    /// How corrections are rendered
    pub format: OutputFormat,
}

impl RunConfig {
    /// Settings writing JSON to stdout
    pub fn new(baseline: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        Self {
            baseline: baseline.into(),
            target: target.into(),
            sink: OutputSink::default(),
            format: OutputFormat::default(),
        }
    }

    /// Sets the sink (builder pattern)
    pub fn with_sink(mut self, sink: OutputSink) -> Self {
        self.sink = sink;
        self
    }

    /// Sets the format (builder pattern)
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Merge CLI arguments (already including env vars) over the file config
    pub fn resolve(args: &CliArgs, file: FileConfig) -> Result<Self, ConfigError> {
        let baseline = args
            .baseline
            .clone()
            .or(file.baseline)
            .ok_or(ConfigError::MissingPath { which: "baseline" })?;
        let target = args
            .target
            .clone()
            .or(file.target)
            .ok_or(ConfigError::MissingPath { which: "target" })?;

        let output = args.output.or(file.output).unwrap_or_default();
        let manifest = args
            .manifest
            .clone()
            .or(file.manifest)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST));
        let format = args.format.or(file.format).unwrap_or_default();

        Ok(Self::new(baseline, target)
            .with_sink(OutputSink::from_target(output, manifest))
            .with_format(format))
    }
}
