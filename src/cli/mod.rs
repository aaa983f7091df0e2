//! CLI argument parsing for passcheck.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::OutputFormat;

/// Passcheck: validate passwords against a fixed set of security rules.
///
/// A password must have nine or more characters, at least one digit,
/// lowercase letter, uppercase letter and special character (!@#$%^&*()-+),
/// no whitespace, and no repeated characters.
#[derive(Parser, Debug)]
#[command(name = "passcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a config file (defaults to ./passcheck.yaml when present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for passcheck.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a password.
    ///
    /// Prints the verdict and exits 0 when the password is valid,
    /// 2 when a rule rejects it, and 1 when no password was supplied.
    Validate(ValidateArgs),
}

/// Arguments for the `validate` command.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Password to validate. Prefer --stdin: arguments are visible to other processes.
    #[arg(conflicts_with = "stdin", allow_hyphen_values = true)]
    pub password: Option<String>,

    /// Read the password from stdin. One trailing newline is stripped.
    #[arg(long)]
    pub stdin: bool,

    /// Output format (overrides the config file).
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,
}

/// Output format accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
