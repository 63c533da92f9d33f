//! Copy command handler.
//!
//! Mirrors a source tree under a destination root with the suffix rename
//! applied. Roots come from flags or `DOCSHIFT_SOURCE` / `DOCSHIFT_DEST`.

use std::path::PathBuf;

use docshift_core::{CopyOptions, RunReport, SuffixMapping, TreeCopier};
use tracing::debug;

use crate::bootstrap::{CliContext, resolve_root};
use crate::error::CliError;

/// Arguments for the copy command.
#[derive(Debug, Clone)]
pub struct CopyArgs {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub from: String,
    pub to: String,
    pub dry_run: bool,
    pub fail_fast: bool,
}

/// Execute the copy command.
///
/// # Errors
///
/// This function will return an error if:
/// - The source is missing or not a directory
/// - Source and destination are the same directory
/// - The suffix mapping is invalid
/// - The destination root cannot be created
/// - `fail_fast` is set and a file fails
pub fn execute(ctx: &CliContext, args: CopyArgs) -> Result<RunReport, CliError> {
    let source = resolve_root(&args.source)?;
    let dest = resolve_root(&args.dest)?;
    debug!(source = %source.display(), dest = %dest.display(), "resolved copy roots");

    let copier = TreeCopier::new(CopyOptions {
        mapping: SuffixMapping::new(args.from, args.to),
        dry_run: args.dry_run,
        fail_fast: args.fail_fast,
    });
    let emitter = ctx.emitter(args.dry_run);

    Ok(copier.run(ctx.fs(), &source, &dest, &emitter)?)
}
