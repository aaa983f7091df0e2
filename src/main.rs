//! Passcheck: validate passwords against a fixed set of security rules.
//!
//! This is the main entry point for the `passcheck` CLI. It parses arguments,
//! loads configuration, sets up logging, dispatches to the command handler,
//! and handles errors with proper exit codes.

use passcheck::cli::Cli;
use passcheck::config::Config;
use passcheck::{commands, exit_codes, logging};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let config = match Config::discover(cli.config.as_deref(), Path::new(".")) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::from(err.exit_code() as u8);
        }
    };

    logging::init(&config);

    match commands::dispatch(cli.command, &config) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
