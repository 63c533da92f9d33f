//! Commands enum and argument types.
//!
//! This module defines the available commands for the CLI tool.

use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};
use docshift_core::{
    DEFAULT_DESTINATION_SUFFIX, DEFAULT_SOURCE_SUFFIX, DEFAULT_TARGET_SUBSTRING, MatchScope,
};

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Remove a substring (default ".md") from every file under a directory, in place
    #[command(
        after_help = "EXAMPLES:\n    docshift rewrite ./docs\n    docshift rewrite ./docs --scope links --dry-run\n    docshift rewrite            (prompts for the directory)"
    )]
    Rewrite {
        /// Directory to rewrite (prompted for when omitted)
        dir: Option<PathBuf>,
        /// Substring to delete from file contents
        #[arg(long, default_value = DEFAULT_TARGET_SUBSTRING, allow_hyphen_values = true)]
        needle: String,
        /// Which occurrences to delete
        #[arg(long, value_enum, default_value_t = ScopeArg::Anywhere)]
        scope: ScopeArg,
        /// Report what would change without writing anything
        #[arg(long)]
        dry_run: bool,
        /// Stop at the first file that fails
        #[arg(long)]
        fail_fast: bool,
    },

    /// Copy a directory tree, renaming files by suffix (default .md -> .mdx)
    Copy {
        /// Source tree root
        #[arg(long, env = "DOCSHIFT_SOURCE")]
        source: PathBuf,
        /// Destination root (created if missing)
        #[arg(long, env = "DOCSHIFT_DEST")]
        dest: PathBuf,
        /// File-name suffix to rename from
        #[arg(long, default_value = DEFAULT_SOURCE_SUFFIX, allow_hyphen_values = true)]
        from: String,
        /// File-name suffix to rename to
        #[arg(long, default_value = DEFAULT_DESTINATION_SUFFIX, allow_hyphen_values = true)]
        to: String,
        /// Report what would be copied without touching the destination
        #[arg(long)]
        dry_run: bool,
        /// Stop at the first file that fails
        #[arg(long)]
        fail_fast: bool,
    },
}

/// Command-line spelling of [`MatchScope`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScopeArg {
    /// Every occurrence anywhere in the file
    Anywhere,
    /// Only inside markdown link targets: [text](target)
    Links,
}

impl From<ScopeArg> for MatchScope {
    fn from(scope: ScopeArg) -> Self {
        match scope {
            ScopeArg::Anywhere => Self::Anywhere,
            ScopeArg::Links => Self::LinkTargets,
        }
    }
}
