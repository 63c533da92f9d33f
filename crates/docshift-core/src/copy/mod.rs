//! Tree copier/renamer.
//!
//! Mirrors a source tree under a destination root, renaming files whose name
//! ends with the source suffix. Directories (including empty ones) are
//! reproduced; files are copied with their permissions and timestamps.

mod mapping;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::TransformError;
use crate::options::CopyOptions;
use crate::paths::{
    ensure_directory, is_within, mirror_path, normalize_lexically, require_directory,
};
use crate::ports::{EntryKind, FileSystem, FsError, TransformEventEmitter};
use crate::report::{FileOutcome, RunRecorder, RunReport};

pub use mapping::SuffixMapping;

/// Copies a tree into a destination root, renaming files by suffix.
#[derive(Debug, Clone, Default)]
pub struct TreeCopier {
    options: CopyOptions,
}

impl TreeCopier {
    pub const fn new(options: CopyOptions) -> Self {
        Self { options }
    }

    pub const fn options(&self) -> &CopyOptions {
        &self.options
    }

    /// Destination path for a source file whose mirrored location is
    /// `mirrored`.
    ///
    /// Only the final segment is renamed; directory names are never touched.
    pub fn destination_for(&self, mirrored: &Path) -> PathBuf {
        let Some(name) = mirrored.file_name().and_then(|n| n.to_str()) else {
            return mirrored.to_path_buf();
        };
        let renamed = self.options.mapping.map_name(name);
        mirrored.with_file_name(&*renamed)
    }

    /// Copy `source` into `destination`.
    ///
    /// Entries are processed in lexicographic order, so when two files map to
    /// the same destination name the one sorting last wins. Entries that lie
    /// inside `destination` are pruned, which makes it safe to nest the
    /// destination inside the source. Both roots are compared after `.`/`..`
    /// segments are resolved, so `sub/../docs` counts as `docs`.
    pub fn run(
        &self,
        fs: &dyn FileSystem,
        source: &Path,
        destination: &Path,
        emitter: &dyn TransformEventEmitter,
    ) -> Result<RunReport, TransformError> {
        self.options.validate()?;
        let source = &normalize_lexically(source);
        let destination = &normalize_lexically(destination);
        require_directory(fs, source)?;
        if source == destination {
            return Err(TransformError::SameRoots(source.to_path_buf()));
        }

        info!(
            source = %source.display(),
            destination = %destination.display(),
            from = %self.options.mapping.from,
            to = %self.options.mapping.to,
            dry_run = self.options.dry_run,
            "starting copy"
        );

        let mut recorder = RunRecorder::new(emitter, self.options.dry_run, self.options.fail_fast);

        if self.prepare_directory(fs, destination)? {
            recorder.record(FileOutcome::DirectoryCreated {
                path: destination.to_path_buf(),
            });
        }

        for entry in fs.walk(source) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    recorder.fail(err)?;
                    continue;
                }
            };

            if is_within(&entry.path, destination) {
                debug!(path = %entry.path.display(), "pruning entry inside destination");
                continue;
            }

            let Some(mirrored) = mirror_path(source, destination, &entry.path) else {
                recorder.skip(entry.path, "outside the source root");
                continue;
            };

            match entry.kind {
                EntryKind::Directory => match self.prepare_directory(fs, &mirrored) {
                    Ok(true) => recorder.record(FileOutcome::DirectoryCreated { path: mirrored }),
                    Ok(false) => {}
                    Err(err) => recorder.fail(err)?,
                },
                EntryKind::File => {
                    let target = self.destination_for(&mirrored);
                    match self.copy_file(fs, &entry.path, &target) {
                        Ok(()) => recorder.record(FileOutcome::Copied {
                            source: entry.path,
                            destination: target,
                        }),
                        Err(err) => recorder.fail(err)?,
                    }
                }
                EntryKind::Other => recorder.skip(entry.path, "not a regular file"),
            }
        }

        let report = recorder.finish();
        info!(summary = %report.summary(), "copy finished");
        Ok(report)
    }

    /// Ensure a destination directory exists. Returns `true` if it was (or,
    /// in a dry run, would be) created.
    fn prepare_directory(&self, fs: &dyn FileSystem, path: &Path) -> Result<bool, FsError> {
        if self.options.dry_run {
            return Ok(!fs.exists(path));
        }
        ensure_directory(fs, path)
    }

    fn copy_file(&self, fs: &dyn FileSystem, from: &Path, to: &Path) -> Result<(), FsError> {
        if self.options.dry_run {
            return Ok(());
        }
        fs.copy_with_metadata(from, to)
    }
}
