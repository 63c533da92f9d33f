//! Per-entry outcomes and the run report.
//!
//! Every entry an operation looks at ends up as exactly one [`FileOutcome`],
//! in traversal order. The caller decides what a failure means; the report
//! only collects them.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::TransformError;
use crate::events::TransformEvent;
use crate::ports::{FsError, TransformEventEmitter};

/// Result of processing a single entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FileOutcome {
    /// Rewriter removed the target substring and rewrote the file.
    Updated { path: PathBuf },
    /// Rewriter found nothing to remove.
    Unchanged { path: PathBuf },
    /// Copier copied a file to its mirrored, renamed location.
    Copied {
        source: PathBuf,
        destination: PathBuf,
    },
    /// Copier created a directory that did not exist yet.
    DirectoryCreated { path: PathBuf },
    /// The entry was not processed.
    Skipped { path: PathBuf, reason: String },
    /// Processing the entry failed.
    Failed { path: PathBuf, error: String },
}

impl FileOutcome {
    /// The notification this outcome produces, if any.
    pub fn to_event(&self) -> Option<TransformEvent> {
        match self {
            Self::Updated { path } => Some(TransformEvent::FileUpdated { path: path.clone() }),
            Self::Unchanged { .. } => None,
            Self::Copied {
                source,
                destination,
            } => Some(TransformEvent::FileCopied {
                source: source.clone(),
                destination: destination.clone(),
            }),
            Self::DirectoryCreated { path } => {
                Some(TransformEvent::DirectoryCreated { path: path.clone() })
            }
            Self::Skipped { path, reason } => Some(TransformEvent::EntrySkipped {
                path: path.clone(),
                reason: reason.clone(),
            }),
            Self::Failed { path, error } => Some(TransformEvent::EntryFailed {
                path: path.clone(),
                error: error.clone(),
            }),
        }
    }

    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Ordered record of everything a run did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Whether the run was a dry run (nothing written).
    pub dry_run: bool,
    /// One outcome per entry, in traversal order.
    pub outcomes: Vec<FileOutcome>,
}

impl RunReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            outcomes: Vec::new(),
        }
    }

    /// Iterate over failed entries only.
    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| o.is_failure())
    }

    /// True when no entry failed.
    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Counts per outcome kind.
    pub fn summary(&self) -> RunSummary {
        let mut summary = RunSummary::default();
        for outcome in &self.outcomes {
            match outcome {
                FileOutcome::Updated { .. } => summary.updated += 1,
                FileOutcome::Unchanged { .. } => summary.unchanged += 1,
                FileOutcome::Copied { .. } => summary.copied += 1,
                FileOutcome::DirectoryCreated { .. } => summary.directories_created += 1,
                FileOutcome::Skipped { .. } => summary.skipped += 1,
                FileOutcome::Failed { .. } => summary.failed += 1,
            }
        }
        summary
    }
}

/// Outcome counts for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub updated: usize,
    pub unchanged: usize,
    pub copied: usize,
    pub directories_created: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl fmt::Display for RunSummary {
    /// Renders non-zero counts followed by the failure count, e.g.
    /// `2 updated, 1 unchanged, 0 failed`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts = [
            (self.updated, "updated"),
            (self.unchanged, "unchanged"),
            (self.copied, "copied"),
            (self.directories_created, "directories created"),
            (self.skipped, "skipped"),
        ];
        for (count, label) in counts.iter().filter(|(count, _)| *count > 0) {
            write!(f, "{count} {label}, ")?;
        }
        write!(f, "{} failed", self.failed)
    }
}

/// Accumulates outcomes for a run and forwards them to the emitter.
pub(crate) struct RunRecorder<'a> {
    report: RunReport,
    emitter: &'a dyn TransformEventEmitter,
    fail_fast: bool,
}

impl<'a> RunRecorder<'a> {
    pub(crate) fn new(
        emitter: &'a dyn TransformEventEmitter,
        dry_run: bool,
        fail_fast: bool,
    ) -> Self {
        Self {
            report: RunReport::new(dry_run),
            emitter,
            fail_fast,
        }
    }

    pub(crate) fn record(&mut self, outcome: FileOutcome) {
        debug!(?outcome, "entry processed");
        if let Some(event) = outcome.to_event() {
            self.emitter.emit(event);
        }
        self.report.outcomes.push(outcome);
    }

    /// Record a per-entry failure, or abort the run when fail-fast is on.
    pub(crate) fn fail(&mut self, error: FsError) -> Result<(), TransformError> {
        warn!(path = %error.path().display(), %error, "entry failed");
        let outcome = FileOutcome::Failed {
            path: error.path().to_path_buf(),
            error: error.to_string(),
        };
        self.record(outcome);
        if self.fail_fast {
            return Err(TransformError::Aborted(error));
        }
        Ok(())
    }

    pub(crate) fn skip(&mut self, path: PathBuf, reason: &str) {
        warn!(path = %path.display(), reason, "entry skipped");
        self.record(FileOutcome::Skipped {
            path,
            reason: reason.to_string(),
        });
    }

    pub(crate) fn finish(self) -> RunReport {
        self.report
    }
}
