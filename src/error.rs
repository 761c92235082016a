//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ParseError: a lock file line could not be turned into a dependency
//! - ScanError: a lock file could not be opened, read or fully parsed
//! - OutputError: corrections could not be serialized or written
//! - ConfigError: issues with the configuration file or resolved settings

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Lock file scanning errors
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Output related errors
    #[error(transparent)]
    Output(#[from] OutputError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors produced while parsing a single lock file line
#[derive(Error, Debug)]
pub enum ParseError {
    /// Line has no space separating name and version
    #[error("could not split '{line}'")]
    Split { line: String },

    /// Line starts with a separator, leaving no module name
    #[error("missing module name in '{line}'")]
    EmptyName { line: String },

    /// Version token is not a semantic version
    #[error("invalid version '{token}': {source}")]
    Version {
        token: String,
        #[source]
        source: semver::Error,
    },

    /// Name or version column is not valid UTF-8
    #[error("invalid UTF-8 in '{line}': {source}")]
    Encoding {
        line: String,
        #[source]
        source: std::str::Utf8Error,
    },
}

/// Errors produced while scanning a lock file
#[derive(Error, Debug)]
pub enum ScanError {
    /// Lock file could not be opened
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from the lock file failed part way
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line could not be parsed; the whole scan is abandoned
    #[error("{path}:{line_number}: {source}")]
    Parse {
        path: PathBuf,
        line_number: usize,
        #[source]
        source: ParseError,
    },
}

/// Errors related to emitting corrections
#[derive(Error, Debug)]
pub enum OutputError {
    /// Manifest file could not be opened for appending
    #[error("failed to open manifest file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to the sink failed
    #[error("failed to write corrections: {source}")]
    Write {
        #[from]
        source: std::io::Error,
    },

    /// Corrections could not be encoded
    #[error("failed to serialize corrections: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for our schema
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A required lock file path was not given anywhere
    #[error("no {which} file given: use --{which}, SYNCDEPS_{upper} or the config file", upper = .which.to_uppercase())]
    MissingPath { which: &'static str },
}

impl ParseError {
    /// Creates a new Split error
    pub fn split(line: impl Into<String>) -> Self {
        ParseError::Split { line: line.into() }
    }

    /// Creates a new EmptyName error
    pub fn empty_name(line: impl Into<String>) -> Self {
        ParseError::EmptyName { line: line.into() }
    }

    /// Creates a new Version error
    pub fn version(token: impl Into<String>, source: semver::Error) -> Self {
        ParseError::Version {
            token: token.into(),
            source,
        }
    }

    /// Creates a new Encoding error, keeping a lossy copy of the bytes
    pub fn encoding(bytes: &[u8], source: std::str::Utf8Error) -> Self {
        ParseError::Encoding {
            line: String::from_utf8_lossy(bytes).into_owned(),
            source,
        }
    }
}

impl ScanError {
    /// Creates a new Open error
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScanError::Open {
            path: path.into(),
            source,
        }
    }

    /// Creates a new Read error
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScanError::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a new Parse error for the given 1-based line number
    pub fn parse(path: impl Into<PathBuf>, line_number: usize, source: ParseError) -> Self {
        ScanError::Parse {
            path: path.into(),
            line_number,
            source,
        }
    }
}

impl ConfigError {
    /// Creates a new Parse error
    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        ConfigError::Parse {
            path: path.into(),
            source,
        }
    }
}
