//! Rewrite command handler.
//!
//! Deletes the target substring from every file under a directory. When no
//! directory is given the user is prompted for one.

use std::path::PathBuf;

use docshift_core::{LinkRewriter, MatchScope, RewriteOptions, RunReport};
use tracing::debug;

use crate::bootstrap::{CliContext, resolve_root};
use crate::error::CliError;
use crate::utils::input;

/// Arguments for the rewrite command.
#[derive(Debug, Clone)]
pub struct RewriteArgs {
    pub dir: Option<PathBuf>,
    pub needle: String,
    pub scope: MatchScope,
    pub dry_run: bool,
    pub fail_fast: bool,
}

/// Execute the rewrite command.
///
/// # Errors
///
/// This function will return an error if:
/// - The prompt fails or the user enters nothing
/// - The directory does not exist or is not a directory
/// - `fail_fast` is set and a file fails
pub fn execute(ctx: &CliContext, args: RewriteArgs) -> Result<RunReport, CliError> {
    let dir = match args.dir {
        Some(dir) => dir,
        None => prompt_directory()?,
    };
    let root = resolve_root(&dir)?;
    debug!(root = %root.display(), "resolved rewrite root");

    let rewriter = LinkRewriter::new(RewriteOptions {
        needle: args.needle,
        scope: args.scope,
        dry_run: args.dry_run,
        fail_fast: args.fail_fast,
    });
    let emitter = ctx.emitter(args.dry_run);

    Ok(rewriter.run(ctx.fs(), &root, &emitter)?)
}

fn prompt_directory() -> Result<PathBuf, CliError> {
    let answer = input::prompt_string("Directory to rewrite")
        .map_err(|e| CliError::Io(format!("{e:#}")))?;
    if answer.is_empty() {
        return Err(CliError::Arguments("No directory given".to_string()));
    }
    Ok(PathBuf::from(answer))
}
