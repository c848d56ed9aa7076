//! Error types for the conformance harness.

use thiserror::Error;

/// Errors that can occur while loading suites and harness configuration.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Error parsing a YAML suite.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Error reading a suite file or directory.
    #[error("failed to load suite: {path}: {message}")]
    Load { path: String, message: String },

    /// Error reading or parsing a TOML configuration file.
    #[error("invalid configuration: {path}: {message}")]
    Config { path: String, message: String },
}

impl From<serde_yaml::Error> for SpecError {
    fn from(err: serde_yaml::Error) -> Self {
        SpecError::Parse {
            line: err.location().map_or(0, |location| location.line()),
            message: err.to_string(),
        }
    }
}

/// Result type for harness operations.
pub type SpecResult<T> = Result<T, SpecError>;
