//! Path helpers shared by the transforms.
//!
//! Pure path arithmetic lives here along with the directory checks both
//! operations perform before touching anything.

use std::path::{Component, Path, PathBuf};

use crate::error::TransformError;
use crate::ports::{FileSystem, FsError};

/// Compute the mirrored location of `path` under `destination_root`.
///
/// The `source_root` prefix is replaced by `destination_root` and every
/// remaining segment is kept. Returns `None` when `path` is not under
/// `source_root`.
///
/// ```
/// use docshift_core::mirror_path;
/// use std::path::Path;
///
/// let mirrored = mirror_path(
///     Path::new("/docs"),
///     Path::new("/out"),
///     Path::new("/docs/sub/b.md"),
/// );
/// assert_eq!(mirrored.as_deref(), Some(Path::new("/out/sub/b.md")));
/// ```
pub fn mirror_path(source_root: &Path, destination_root: &Path, path: &Path) -> Option<PathBuf> {
    let relative = path.strip_prefix(source_root).ok()?;
    if relative.as_os_str().is_empty() {
        return Some(destination_root.to_path_buf());
    }
    Some(destination_root.join(relative))
}

/// Resolve `.` and `..` segments without touching the filesystem.
///
/// A `..` cancels the preceding normal segment; at the root it is dropped,
/// and on a relative path with nothing left to cancel it is kept.
///
/// ```
/// use docshift_core::normalize_lexically;
/// use std::path::Path;
///
/// assert_eq!(
///     normalize_lexically(Path::new("/tmp/sub/../docs/./guides")),
///     Path::new("/tmp/docs/guides")
/// );
/// ```
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other),
        }
    }
    normalized
}

/// Whether `path` is `base` or lies underneath it (component-wise).
pub fn is_within(path: &Path, base: &Path) -> bool {
    path.starts_with(base)
}

/// Fail unless `path` is an existing directory.
pub(crate) fn require_directory(fs: &dyn FileSystem, path: &Path) -> Result<(), TransformError> {
    if !fs.exists(path) {
        return Err(TransformError::RootNotFound(path.to_path_buf()));
    }
    if !fs.is_dir(path) {
        return Err(TransformError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

/// Make sure `path` exists as a directory, creating it with parents if needed.
///
/// Returns `true` when the directory had to be created.
pub(crate) fn ensure_directory(fs: &dyn FileSystem, path: &Path) -> Result<bool, FsError> {
    if fs.exists(path) {
        if fs.is_dir(path) {
            return Ok(false);
        }
        return Err(FsError::CreateDir {
            path: path.to_path_buf(),
            reason: "a non-directory entry is in the way".to_string(),
        });
    }
    fs.create_dir_all(path)?;
    Ok(true)
}
