//! Command implementations for passcheck.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod validate_cmd;

use crate::cli::Command;
use crate::config::Config;
use crate::error::Result;

pub use validate_cmd::{MISSING_PASSWORD_MESSAGE, cmd_validate, run_validate};

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Validate(args) => cmd_validate(args, config),
    }
}
