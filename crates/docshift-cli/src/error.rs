//! CLI-specific error types and mappings.
//!
//! This module provides the error type for the CLI adapter and the mapping
//! from `TransformError` to exit codes and user-facing messages.

use docshift_core::TransformError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument error (missing directory, bad root, ...).
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error that stopped the run.
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The run finished but some entries failed.
    #[error("{failed} of {total} entries failed")]
    Incomplete { failed: usize, total: usize },
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error (run completed with failures)
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Incomplete { .. } => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<TransformError> for CliError {
    fn from(err: TransformError) -> Self {
        match err {
            TransformError::Config(config_err) => Self::Config(config_err.to_string()),
            TransformError::RootNotFound(_)
            | TransformError::NotADirectory(_)
            | TransformError::SameRoots(_) => Self::Arguments(err.to_string()),
            TransformError::Filesystem(fs_err) => Self::Io(fs_err.to_string()),
            TransformError::Aborted(_) => Self::Io(err.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docshift_core::{ConfigError, FsError};
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Arguments(String::new()).exit_code(), 2);
        assert_eq!(CliError::Io(String::new()).exit_code(), 74);
        assert_eq!(CliError::Config(String::new()).exit_code(), 78);
        assert_eq!(
            CliError::Incomplete {
                failed: 1,
                total: 3
            }
            .exit_code(),
            1
        );
    }

    #[test]
    fn test_transform_error_mapping() {
        let missing = CliError::from(TransformError::RootNotFound(PathBuf::from("/nope")));
        assert!(matches!(missing, CliError::Arguments(ref msg) if msg.contains("/nope")));

        let config = CliError::from(TransformError::Config(ConfigError::EmptyNeedle));
        assert!(matches!(config, CliError::Config(_)));

        let aborted = CliError::from(TransformError::Aborted(FsError::Decode {
            path: PathBuf::from("a.png"),
        }));
        assert_eq!(aborted.exit_code(), 74);
        assert!(aborted.to_string().contains("Run aborted"));
    }
}
