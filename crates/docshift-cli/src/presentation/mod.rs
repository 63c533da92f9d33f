//! Shared CLI presentation utilities.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no domain transforms
//! - Per-file lines go to stdout, diagnostics to stderr

pub mod console;
pub mod report;

// Re-export commonly used items
pub use console::{ConsoleEmitter, ConsoleLine, format_event};
pub use report::{print_report, report_json};
