//! Filesystem port.
//!
//! The transforms only ever need a handful of whole-file operations plus an
//! ordered tree listing. Keeping them behind a trait lets tests inject
//! failures for individual entries.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// What kind of filesystem object a walk entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    /// Directory or dangling symlinks, sockets, devices: anything that is
    /// neither a directory nor (a link to) a regular file.
    Other,
}

/// A single entry produced by [`FileSystem::walk`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl WalkEntry {
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

/// Errors raised by filesystem port operations.
///
/// Every variant names the path it concerns so a failure can be attributed to
/// a single entry in the run report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    /// A directory could not be listed.
    #[error("Failed to traverse {path}: {reason}")]
    Traversal { path: PathBuf, reason: String },

    /// A file could not be read.
    #[error("Failed to read {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    /// A file was read but is not valid UTF-8 text.
    #[error("{path} is not valid UTF-8 text")]
    Decode { path: PathBuf },

    /// A file could not be written.
    #[error("Failed to write {path}: {reason}")]
    Write { path: PathBuf, reason: String },

    /// A directory could not be created.
    #[error("Failed to create directory {path}: {reason}")]
    CreateDir { path: PathBuf, reason: String },

    /// A file could not be copied.
    #[error("Failed to copy {from} to {to}: {reason}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        reason: String,
    },

    /// File contents were copied but timestamps could not be carried over.
    #[error("Failed to preserve metadata on {path}: {reason}")]
    Metadata { path: PathBuf, reason: String },
}

impl FsError {
    /// The path this error is attributed to.
    ///
    /// For copy failures that is the source file, which is what the run
    /// report is keyed on.
    pub fn path(&self) -> &Path {
        match self {
            Self::Traversal { path, .. }
            | Self::Read { path, .. }
            | Self::Decode { path }
            | Self::Write { path, .. }
            | Self::CreateDir { path, .. }
            | Self::Metadata { path, .. } => path,
            Self::Copy { from, .. } => from,
        }
    }
}

/// Whole-file filesystem operations used by the rewriter and the copier.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem {
    /// List every entry below `root` (the root itself excluded).
    ///
    /// Siblings are sorted by file name and a directory always precedes its
    /// contents. Unreadable entries are reported in place as errors and the
    /// listing continues past them.
    fn walk(&self, root: &Path) -> Vec<Result<WalkEntry, FsError>>;

    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Read an entire file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> Result<String, FsError>;

    /// Replace an entire file's contents.
    fn write(&self, path: &Path, contents: &str) -> Result<(), FsError>;

    /// Create a directory and any missing parents.
    fn create_dir_all(&self, path: &Path) -> Result<(), FsError>;

    /// Copy bytes, permissions and modification/access times from `from` to
    /// `to`, overwriting `to` if it exists.
    fn copy_with_metadata(&self, from: &Path, to: &Path) -> Result<(), FsError>;
}
