#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod copy;
pub mod error;
pub mod events;
pub mod local_fs;
pub mod options;
pub mod paths;
pub mod ports;
pub mod report;
pub mod rewrite;

// Re-export commonly used types for convenience
pub use copy::{SuffixMapping, TreeCopier};
pub use error::TransformError;
pub use events::TransformEvent;
pub use local_fs::LocalFs;
pub use options::{
    ConfigError, CopyOptions, DEFAULT_DESTINATION_SUFFIX, DEFAULT_SOURCE_SUFFIX,
    DEFAULT_TARGET_SUBSTRING, MatchScope, RewriteOptions,
};
pub use paths::{is_within, mirror_path, normalize_lexically};
pub use ports::{EntryKind, FileSystem, FsError, NoopEmitter, TransformEventEmitter, WalkEntry};
pub use report::{FileOutcome, RunReport, RunSummary};
pub use rewrite::{LinkRewriter, strip_all, strip_in_link_targets};
