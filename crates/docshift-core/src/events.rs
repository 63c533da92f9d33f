//! Progress events emitted while a transform runs.
//!
//! # Wire Format
//!
//! Events serialize with a `type` tag:
//!
//! ```json
//! { "type": "file_copied", "source": "docs/a.md", "destination": "out/a.mdx" }
//! ```

use std::path::PathBuf;

use serde::Serialize;

/// One notification per entry acted upon.
///
/// Files the rewriter leaves untouched produce no event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransformEvent {
    /// A file had the target substring removed and was rewritten.
    FileUpdated { path: PathBuf },

    /// A file was copied into the destination tree.
    FileCopied {
        source: PathBuf,
        destination: PathBuf,
    },

    /// A directory was created in the destination tree.
    DirectoryCreated { path: PathBuf },

    /// An entry was not processed (directory symlink, device, ...).
    EntrySkipped { path: PathBuf, reason: String },

    /// Processing an entry failed; the run continues unless fail-fast is set.
    EntryFailed { path: PathBuf, error: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_wire_format() {
        let event = TransformEvent::FileCopied {
            source: PathBuf::from("docs/a.md"),
            destination: PathBuf::from("out/a.mdx"),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "file_copied");
        assert_eq!(json["source"], "docs/a.md");
        assert_eq!(json["destination"], "out/a.mdx");
    }
}
