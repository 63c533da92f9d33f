//! Console event emitter.
//!
//! Turns transform events into the line-oriented progress output:
//! `Updated <path>`, `Copied <src> to <dest>` and `Failed <path>: <error>`.

use docshift_core::{TransformEvent, TransformEventEmitter};

/// A formatted line and the stream it belongs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleLine {
    Stdout(String),
    Stderr(String),
}

/// Format a single event, or `None` if it should not be shown.
///
/// Directory creation is only shown in verbose mode.
pub fn format_event(event: &TransformEvent, dry_run: bool, verbose: bool) -> Option<ConsoleLine> {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    let line = match event {
        TransformEvent::FileUpdated { path } => {
            ConsoleLine::Stdout(format!("{prefix}Updated {}", path.display()))
        }
        TransformEvent::FileCopied {
            source,
            destination,
        } => ConsoleLine::Stdout(format!(
            "{prefix}Copied {} to {}",
            source.display(),
            destination.display()
        )),
        TransformEvent::DirectoryCreated { path } => {
            if !verbose {
                return None;
            }
            ConsoleLine::Stdout(format!("{prefix}Created {}", path.display()))
        }
        TransformEvent::EntrySkipped { path, reason } => {
            ConsoleLine::Stderr(format!("Skipped {}: {reason}", path.display()))
        }
        TransformEvent::EntryFailed { path, error } => {
            ConsoleLine::Stderr(format!("Failed {}: {error}", path.display()))
        }
    };
    Some(line)
}

/// Prints events as they arrive.
///
/// In JSON mode stdout is reserved for the final report, so only stderr
/// lines are printed.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleEmitter {
    dry_run: bool,
    verbose: bool,
    json: bool,
}

impl ConsoleEmitter {
    pub const fn new(dry_run: bool, verbose: bool, json: bool) -> Self {
        Self {
            dry_run,
            verbose,
            json,
        }
    }
}

impl TransformEventEmitter for ConsoleEmitter {
    fn emit(&self, event: TransformEvent) {
        match format_event(&event, self.dry_run, self.verbose) {
            Some(ConsoleLine::Stdout(line)) if !self.json => println!("{line}"),
            Some(ConsoleLine::Stderr(line)) => eprintln!("{line}"),
            _ => {}
        }
    }
}
