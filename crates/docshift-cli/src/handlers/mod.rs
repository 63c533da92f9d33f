//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, args) -> Result<RunReport, CliError>`
//! - Thin wrappers that:
//!   1. Resolve CLI-specific input (prompts, relative paths)
//!   2. Build core options and call the core operation
//!   3. Leave report printing to the caller ([`finish`])
//!
//! Handlers should NOT contain transform logic.

pub mod copy;
pub mod rewrite;

use docshift_core::RunReport;

use crate::error::CliError;
use crate::presentation::print_report;

/// Print the report and turn per-file failures into [`CliError::Incomplete`].
///
/// # Errors
///
/// Returns `CliError::Io` if the report cannot be written, or
/// `CliError::Incomplete` if any entry failed.
pub fn finish(report: &RunReport, json: bool) -> Result<(), CliError> {
    print_report(report, json).map_err(|e| CliError::Io(format!("{e:#}")))?;

    let failed = report.failures().count();
    if failed > 0 {
        return Err(CliError::Incomplete {
            failed,
            total: report.outcomes.len(),
        });
    }
    Ok(())
}
