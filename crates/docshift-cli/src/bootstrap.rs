//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together for
//! the CLI adapter: logging, the local filesystem adapter, and the console
//! event emitter. Command handlers receive the composed `CliContext`.

use std::path::{Path, PathBuf};

use docshift_core::{FileSystem, LocalFs};
use tracing_subscriber::EnvFilter;

use crate::error::CliError;
use crate::parser::Cli;
use crate::presentation::ConsoleEmitter;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Verbose console output and debug logging.
    pub verbose: bool,
    /// Emit the run report as JSON instead of per-file lines.
    pub json: bool,
}

impl From<&Cli> for CliConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            verbose: cli.verbose,
            json: cli.json,
        }
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    config: CliConfig,
    fs: Box<dyn FileSystem>,
}

impl CliContext {
    /// Compose the context with the local filesystem adapter.
    pub fn new(config: CliConfig) -> Self {
        Self::with_fs(config, Box::new(LocalFs::new()))
    }

    /// Compose the context with a custom filesystem (for testing).
    pub fn with_fs(config: CliConfig, fs: Box<dyn FileSystem>) -> Self {
        Self { config, fs }
    }

    pub const fn config(&self) -> CliConfig {
        self.config
    }

    /// Access the filesystem port.
    pub fn fs(&self) -> &dyn FileSystem {
        self.fs.as_ref()
    }

    /// Build the console emitter for a run.
    pub const fn emitter(&self, dry_run: bool) -> ConsoleEmitter {
        ConsoleEmitter::new(dry_run, self.config.verbose, self.config.json)
    }
}

/// Initialise the tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the level is `warn`, or `debug`
/// with `--verbose`. Logs go to stderr so stdout stays line-oriented.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (tests) is harmless; ignore the error.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Make a user-supplied root absolute without resolving symlinks.
pub fn resolve_root(path: &Path) -> Result<PathBuf, CliError> {
    if path.as_os_str().is_empty() {
        return Err(CliError::Arguments("Path cannot be empty".to_string()));
    }
    std::path::absolute(path)
        .map_err(|e| CliError::Io(format!("Cannot resolve {}: {e}", path.display())))
}
