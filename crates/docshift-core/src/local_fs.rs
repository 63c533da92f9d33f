//! Local-disk implementation of the filesystem port.
//!
//! Traversal uses `walkdir` sorted by file name, so runs are deterministic.
//! A symlink to a regular file is reported as a file (reads and copies go
//! through the link); any other symlink is `EntryKind::Other` and directory
//! links are never descended into.

use std::fs::{self, File, FileTimes, OpenOptions};
use std::io::ErrorKind;
use std::path::Path;

use walkdir::WalkDir;

use crate::ports::{EntryKind, FileSystem, FsError, WalkEntry};

/// Filesystem port backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub const fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn walk(&self, root: &Path) -> Vec<Result<WalkEntry, FsError>> {
        WalkDir::new(root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .map(|entry| {
                let entry = entry.map_err(|err| FsError::Traversal {
                    path: err.path().unwrap_or(root).to_path_buf(),
                    reason: err
                        .io_error()
                        .map_or_else(|| err.to_string(), ToString::to_string),
                })?;
                let file_type = entry.file_type();
                let kind = if file_type.is_dir() {
                    EntryKind::Directory
                } else if file_type.is_file()
                    || (file_type.is_symlink() && entry.path().is_file())
                {
                    EntryKind::File
                } else {
                    EntryKind::Other
                };
                Ok(WalkEntry::new(entry.into_path(), kind))
            })
            .collect()
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_to_string(&self, path: &Path) -> Result<String, FsError> {
        fs::read_to_string(path).map_err(|err| {
            if err.kind() == ErrorKind::InvalidData {
                FsError::Decode {
                    path: path.to_path_buf(),
                }
            } else {
                FsError::Read {
                    path: path.to_path_buf(),
                    reason: err.to_string(),
                }
            }
        })
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), FsError> {
        fs::write(path, contents).map_err(|err| FsError::Write {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), FsError> {
        fs::create_dir_all(path).map_err(|err| FsError::CreateDir {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })
    }

    fn copy_with_metadata(&self, from: &Path, to: &Path) -> Result<(), FsError> {
        // fs::copy carries the permission bits over.
        fs::copy(from, to).map_err(|err| FsError::Copy {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            reason: err.to_string(),
        })?;

        let metadata_error = |err: std::io::Error| FsError::Metadata {
            path: to.to_path_buf(),
            reason: err.to_string(),
        };

        let metadata = fs::metadata(from).map_err(metadata_error)?;
        let mut times = FileTimes::new().set_modified(metadata.modified().map_err(metadata_error)?);
        if let Ok(accessed) = metadata.accessed() {
            times = times.set_accessed(accessed);
        }

        // A read-only copy can't be opened for writing; owners may still set
        // times through a read handle on unix.
        let file = OpenOptions::new()
            .write(true)
            .open(to)
            .or_else(|_| File::open(to))
            .map_err(metadata_error)?;
        file.set_times(times).map_err(metadata_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};
    use tempfile::tempdir;

    #[test]
    fn test_walk_is_sorted_and_parents_first() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("sub")).unwrap();
        fs::write(root.join("x.mdx"), "2").unwrap();
        fs::write(root.join("x.md"), "1").unwrap();
        fs::write(root.join("sub/b.md"), "b").unwrap();
        fs::write(root.join("a.md"), "a").unwrap();

        let entries: Vec<WalkEntry> = LocalFs
            .walk(root)
            .into_iter()
            .collect::<Result<_, _>>()
            .unwrap();
        let relative: Vec<_> = entries
            .iter()
            .map(|e| e.path.strip_prefix(root).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            relative,
            vec![
                Path::new("a.md").to_path_buf(),
                Path::new("sub").to_path_buf(),
                Path::new("sub/b.md").to_path_buf(),
                Path::new("x.md").to_path_buf(),
                Path::new("x.mdx").to_path_buf(),
            ]
        );
        assert_eq!(entries[1].kind, EntryKind::Directory);
        assert_eq!(entries[0].kind, EntryKind::File);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_file_symlink_is_file_dir_symlink_is_not() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("real")).unwrap();
        fs::write(root.join("real/page.md"), "page").unwrap();
        symlink(root.join("real/page.md"), root.join("alias.md")).unwrap();
        symlink(root.join("real"), root.join("linked")).unwrap();

        let entries: Vec<WalkEntry> = LocalFs
            .walk(root)
            .into_iter()
            .collect::<Result<_, _>>()
            .unwrap();
        let kind_of = |name: &str| {
            entries
                .iter()
                .find(|e| e.path == root.join(name))
                .map(|e| e.kind)
        };

        assert_eq!(kind_of("alias.md"), Some(EntryKind::File));
        assert_eq!(kind_of("linked"), Some(EntryKind::Other));
        let linked = root.join("linked");
        assert!(!entries.iter().any(|e| e.path.parent() == Some(linked.as_path())));
    }

    #[test]
    fn test_read_invalid_utf8_is_decode_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logo.png");
        fs::write(&path, [0x89, 0x50, 0x4e, 0x47, 0xff, 0xfe]).unwrap();

        let err = LocalFs.read_to_string(&path).unwrap_err();
        assert!(matches!(err, FsError::Decode { .. }));
    }

    #[test]
    fn test_read_missing_is_read_error() {
        let dir = tempdir().unwrap();
        let err = LocalFs
            .read_to_string(&dir.path().join("missing.md"))
            .unwrap_err();
        assert!(matches!(err, FsError::Read { .. }));
    }

    #[test]
    fn test_copy_preserves_modified_time_and_overwrites() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("a.md");
        let to = dir.path().join("a.mdx");
        fs::write(&from, "new").unwrap();
        fs::write(&to, "old contents").unwrap();

        let past = SystemTime::now() - Duration::from_secs(86_400 * 30);
        let file = OpenOptions::new().write(true).open(&from).unwrap();
        file.set_modified(past).unwrap();
        drop(file);

        LocalFs.copy_with_metadata(&from, &to).unwrap();

        assert_eq!(fs::read_to_string(&to).unwrap(), "new");
        let source_mtime = fs::metadata(&from).unwrap().modified().unwrap();
        let dest_mtime = fs::metadata(&to).unwrap().modified().unwrap();
        assert_eq!(source_mtime, dest_mtime);
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_preserves_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let from = dir.path().join("run.sh");
        let to = dir.path().join("copy.sh");
        fs::write(&from, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&from, fs::Permissions::from_mode(0o755)).unwrap();

        LocalFs.copy_with_metadata(&from, &to).unwrap();

        let mode = fs::metadata(&to).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o755);
    }

    #[test]
    fn test_copy_missing_source() {
        let dir = tempdir().unwrap();
        let err = LocalFs
            .copy_with_metadata(&dir.path().join("nope.md"), &dir.path().join("nope.mdx"))
            .unwrap_err();
        assert!(matches!(err, FsError::Copy { .. }));
    }
}
