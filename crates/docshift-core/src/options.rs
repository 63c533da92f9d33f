//! Run options for the rewriter and the copier.
//!
//! These are pure domain types with no infrastructure dependencies. Adapters
//! build them from their own inputs (CLI flags, env vars) and call
//! `validate()` before handing them to an operation.

use serde::{Deserialize, Serialize};

use crate::copy::SuffixMapping;

/// Literal text the rewriter deletes from file contents.
pub const DEFAULT_TARGET_SUBSTRING: &str = ".md";

/// File-name suffix the copier renames from.
pub const DEFAULT_SOURCE_SUFFIX: &str = ".md";

/// File-name suffix the copier renames to.
pub const DEFAULT_DESTINATION_SUFFIX: &str = ".mdx";

/// Where in a file the rewriter is allowed to delete the target substring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchScope {
    /// Every occurrence anywhere in the file, prose included.
    #[default]
    Anywhere,
    /// Only inside markdown inline link targets, i.e. `[text](target)`.
    LinkTargets,
}

/// Options for a link-text rewrite run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOptions {
    /// Substring to delete.
    pub needle: String,
    /// Which occurrences are eligible for deletion.
    pub scope: MatchScope,
    /// Report what would change without writing anything.
    pub dry_run: bool,
    /// Abort on the first per-file failure instead of continuing.
    pub fail_fast: bool,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            needle: DEFAULT_TARGET_SUBSTRING.to_string(),
            scope: MatchScope::default(),
            dry_run: false,
            fail_fast: false,
        }
    }
}

impl RewriteOptions {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.needle.is_empty() {
            return Err(ConfigError::EmptyNeedle);
        }
        Ok(())
    }
}

/// Options for a tree copy run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CopyOptions {
    /// File-name suffix rename rule.
    pub mapping: SuffixMapping,
    /// Report what would be copied without touching the destination.
    pub dry_run: bool,
    /// Abort on the first per-file failure instead of continuing.
    pub fail_fast: bool,
}

impl CopyOptions {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let SuffixMapping { from, to } = &self.mapping;
        if from.is_empty() || to.is_empty() {
            return Err(ConfigError::EmptySuffix);
        }
        if from == to {
            return Err(ConfigError::IdenticalSuffixes(from.clone()));
        }
        if from.contains(['/', '\\']) || to.contains(['/', '\\']) {
            return Err(ConfigError::SeparatorInSuffix);
        }
        Ok(())
    }
}

/// Option validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Target substring cannot be empty")]
    EmptyNeedle,

    #[error("Rename suffixes cannot be empty")]
    EmptySuffix,

    #[error("Rename suffixes are identical ({0}), nothing would be renamed")]
    IdenticalSuffixes(String),

    #[error("Rename suffixes cannot contain path separators")]
    SeparatorInSuffix,
}
