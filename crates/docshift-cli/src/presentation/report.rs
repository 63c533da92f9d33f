//! End-of-run report output.

use anyhow::{Context, Result};
use docshift_core::RunReport;

/// Render the report as pretty JSON.
pub fn report_json(report: &RunReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize run report")
}

/// Print the end-of-run output.
///
/// JSON mode prints the whole report to stdout; otherwise a one-line summary
/// goes to stderr after the per-file lines.
pub fn print_report(report: &RunReport, json: bool) -> Result<()> {
    if json {
        println!("{}", report_json(report)?);
    } else {
        let prefix = if report.dry_run { "[dry-run] " } else { "" };
        eprintln!("{prefix}{}", report.summary());
    }
    Ok(())
}
