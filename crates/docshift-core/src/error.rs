//! Operation-level error type.
//!
//! Per-entry failures normally end up in the [`RunReport`](crate::RunReport)
//! instead of here. A `TransformError` means the run could not start, or was
//! stopped on purpose by fail-fast.

use std::path::PathBuf;

use thiserror::Error;

use crate::options::ConfigError;
use crate::ports::FsError;

/// Errors that stop a rewrite or copy run as a whole.
///
/// Adapters map this to their own error types (CLI exit codes, etc.).
#[derive(Debug, Error)]
pub enum TransformError {
    /// The run options are invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A root directory does not exist.
    #[error("Directory {0} does not exist")]
    RootNotFound(PathBuf),

    /// A root path exists but is not a directory.
    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// Source and destination roots are the same directory.
    #[error("Source and destination are the same directory: {0}")]
    SameRoots(PathBuf),

    /// Filesystem failure outside any single entry (e.g. creating the
    /// destination root).
    #[error(transparent)]
    Filesystem(#[from] FsError),

    /// Fail-fast was requested and an entry failed.
    #[error("Run aborted: {0}")]
    Aborted(#[source] FsError),
}
