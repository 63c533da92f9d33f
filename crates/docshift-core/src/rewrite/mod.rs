//! Link-text rewriter.
//!
//! Walks a tree and deletes the target substring from every regular file that
//! contains it, rewriting those files in place.

mod strip;

use std::path::Path;

use tracing::info;

use crate::error::TransformError;
use crate::options::{MatchScope, RewriteOptions};
use crate::paths::require_directory;
use crate::ports::{EntryKind, FileSystem, FsError, TransformEventEmitter};
use crate::report::{FileOutcome, RunRecorder, RunReport};

pub use strip::{strip_all, strip_in_link_targets};

/// Rewrites file contents in place under a root directory.
#[derive(Debug, Clone, Default)]
pub struct LinkRewriter {
    options: RewriteOptions,
}

impl LinkRewriter {
    pub const fn new(options: RewriteOptions) -> Self {
        Self { options }
    }

    pub const fn options(&self) -> &RewriteOptions {
        &self.options
    }

    /// Transform a single file's content according to the configured scope.
    ///
    /// Returns `None` when the content would not change.
    pub fn transform(&self, content: &str) -> Option<String> {
        match self.options.scope {
            MatchScope::Anywhere => strip_all(content, &self.options.needle),
            MatchScope::LinkTargets => strip_in_link_targets(content, &self.options.needle),
        }
    }

    /// Rewrite every file under `root`.
    ///
    /// Per-file failures are recorded in the report and the walk continues,
    /// unless `fail_fast` is set.
    pub fn run(
        &self,
        fs: &dyn FileSystem,
        root: &Path,
        emitter: &dyn TransformEventEmitter,
    ) -> Result<RunReport, TransformError> {
        self.options.validate()?;
        require_directory(fs, root)?;

        info!(
            root = %root.display(),
            needle = %self.options.needle,
            scope = ?self.options.scope,
            dry_run = self.options.dry_run,
            "starting rewrite"
        );

        let mut recorder = RunRecorder::new(emitter, self.options.dry_run, self.options.fail_fast);

        for entry in fs.walk(root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    recorder.fail(err)?;
                    continue;
                }
            };

            match entry.kind {
                EntryKind::Directory => {}
                EntryKind::Other => recorder.skip(entry.path, "not a regular file"),
                EntryKind::File => match self.rewrite_file(fs, &entry.path) {
                    Ok(outcome) => recorder.record(outcome),
                    Err(err) => recorder.fail(err)?,
                },
            }
        }

        let report = recorder.finish();
        info!(summary = %report.summary(), "rewrite finished");
        Ok(report)
    }

    fn rewrite_file(&self, fs: &dyn FileSystem, path: &Path) -> Result<FileOutcome, FsError> {
        let content = fs.read_to_string(path)?;

        let Some(rewritten) = self.transform(&content) else {
            return Ok(FileOutcome::Unchanged {
                path: path.to_path_buf(),
            });
        };

        if !self.options.dry_run {
            fs.write(path, &rewritten)?;
        }

        Ok(FileOutcome::Updated {
            path: path.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockFileSystem, NoopEmitter, WalkEntry};
    use std::path::PathBuf;

    fn mock_tree(entries: Vec<WalkEntry>) -> MockFileSystem {
        let mut fs = MockFileSystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_is_dir().returning(|_| true);
        fs.expect_walk()
            .returning(move |_| entries.iter().cloned().map(Ok).collect());
        fs
    }

    #[test]
    fn test_transform_respects_scope() {
        let anywhere = LinkRewriter::default();
        assert_eq!(
            anywhere.transform("README.md [x](x.md)").as_deref(),
            Some("README [x](x)")
        );

        let links = LinkRewriter::new(RewriteOptions {
            scope: MatchScope::LinkTargets,
            ..RewriteOptions::default()
        });
        assert_eq!(
            links.transform("README.md [x](x.md)").as_deref(),
            Some("README.md [x](x)")
        );
    }

    #[test]
    fn test_write_failure_is_isolated() {
        let mut fs = mock_tree(vec![
            WalkEntry::new("/docs/a.md", EntryKind::File),
            WalkEntry::new("/docs/b.md", EntryKind::File),
        ]);
        fs.expect_read_to_string()
            .returning(|_| Ok("[x](x.md)".to_string()));
        fs.expect_write().returning(|path, _| {
            if path.ends_with("a.md") {
                Err(FsError::Write {
                    path: path.to_path_buf(),
                    reason: "permission denied".to_string(),
                })
            } else {
                Ok(())
            }
        });

        let report = LinkRewriter::default()
            .run(&fs, Path::new("/docs"), &NoopEmitter)
            .unwrap();

        assert_eq!(report.outcomes.len(), 2);
        assert!(report.outcomes[0].is_failure());
        assert_eq!(
            report.outcomes[1],
            FileOutcome::Updated {
                path: PathBuf::from("/docs/b.md")
            }
        );
    }

    #[test]
    fn test_fail_fast_stops_at_first_failure() {
        let mut fs = mock_tree(vec![
            WalkEntry::new("/docs/a.md", EntryKind::File),
            WalkEntry::new("/docs/b.md", EntryKind::File),
        ]);
        fs.expect_read_to_string().times(1).returning(|path| {
            Err(FsError::Decode {
                path: path.to_path_buf(),
            })
        });
        fs.expect_write().never();

        let rewriter = LinkRewriter::new(RewriteOptions {
            fail_fast: true,
            ..RewriteOptions::default()
        });
        let err = rewriter
            .run(&fs, Path::new("/docs"), &NoopEmitter)
            .unwrap_err();
        assert!(matches!(err, TransformError::Aborted(FsError::Decode { .. })));
    }

    #[test]
    fn test_dry_run_never_writes() {
        let mut fs = mock_tree(vec![WalkEntry::new("/docs/a.md", EntryKind::File)]);
        fs.expect_read_to_string()
            .returning(|_| Ok("[x](x.md)".to_string()));
        fs.expect_write().never();

        let rewriter = LinkRewriter::new(RewriteOptions {
            dry_run: true,
            ..RewriteOptions::default()
        });
        let report = rewriter.run(&fs, Path::new("/docs"), &NoopEmitter).unwrap();
        assert!(report.dry_run);
        assert_eq!(report.summary().updated, 1);
    }

    #[test]
    fn test_traversal_error_recorded_and_other_entries_skipped() {
        let mut fs = MockFileSystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_is_dir().returning(|_| true);
        fs.expect_walk().returning(|_| {
            vec![
                Err(FsError::Traversal {
                    path: PathBuf::from("/docs/locked"),
                    reason: "permission denied".to_string(),
                }),
                Ok(WalkEntry::new("/docs/link", EntryKind::Other)),
            ]
        });
        fs.expect_read_to_string().never();

        let report = LinkRewriter::default()
            .run(&fs, Path::new("/docs"), &NoopEmitter)
            .unwrap();
        let summary = report.summary();
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.skipped, 1);
    }

    #[test]
    fn test_invalid_options_rejected_before_walking() {
        let mut fs = MockFileSystem::new();
        fs.expect_walk().never();

        let rewriter = LinkRewriter::new(RewriteOptions {
            needle: String::new(),
            ..RewriteOptions::default()
        });
        let err = rewriter
            .run(&fs, Path::new("/docs"), &NoopEmitter)
            .unwrap_err();
        assert!(matches!(err, TransformError::Config(_)));
    }
}
