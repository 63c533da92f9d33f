#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings for crates only used in integration tests
#[cfg(test)]
use tempfile as _;

// Used by the binary target only
use dotenvy as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, init_logging};
pub use commands::{Commands, ScopeArg};
pub use error::CliError;
pub use parser::Cli;
