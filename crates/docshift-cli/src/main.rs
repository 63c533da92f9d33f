//! CLI entry point - the composition root.
//!
//! Loads `.env`, parses arguments, initialises logging, and dispatches to the
//! command handlers. Every error path ends in a sysexits-style exit code.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use docshift_core::RunReport;

use docshift_cli::handlers::{copy::CopyArgs, rewrite::RewriteArgs};
use docshift_cli::{Cli, CliConfig, CliContext, CliError, Commands, handlers, init_logging};

fn main() -> ExitCode {
    // Load environment variables (DOCSHIFT_SOURCE / DOCSHIFT_DEST may live in .env)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = CliConfig::from(&cli);

    let Some(command) = cli.command else {
        // No command provided - show help
        if let Err(e) = Cli::command().print_help() {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    };

    let ctx = CliContext::new(config);
    match run(&ctx, command).and_then(|report| handlers::finish(&report, config.json)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(ctx: &CliContext, command: Commands) -> Result<RunReport, CliError> {
    match command {
        Commands::Rewrite {
            dir,
            needle,
            scope,
            dry_run,
            fail_fast,
        } => {
            let args = RewriteArgs {
                dir,
                needle,
                scope: scope.into(),
                dry_run,
                fail_fast,
            };
            handlers::rewrite::execute(ctx, args)
        }
        Commands::Copy {
            source,
            dest,
            from,
            to,
            dry_run,
            fail_fast,
        } => {
            let args = CopyArgs {
                source,
                dest,
                from,
                to,
                dry_run,
                fail_fast,
            };
            handlers::copy::execute(ctx, args)
        }
    }
}
