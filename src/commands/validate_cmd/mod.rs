//! Implementation of the `passcheck validate` command.
//!
//! # Steps
//!
//! 1. Resolve the password from the argument or stdin
//! 2. Reject a missing password before it reaches the validator
//! 3. Run the validation service
//! 4. Print the verdict in the requested format
//! 5. Map the outcome to an exit code

mod report;


use crate::cli::ValidateArgs;
use crate::config::{Config, OutputFormat};
use crate::error::{PasscheckError, Result};
use crate::service::PasswordValidationService;
use crate::validate::{PasswordValidator, RuleSetValidator};
use std::io::{Read, Write};

use report::{write_rejection, write_verdict};

/// Reported when no password was supplied at all.
///
/// Not the same text as the validator's empty-password reason
/// ("Senha não pode estar vazia"). Callers match on both.
pub const MISSING_PASSWORD_MESSAGE: &str = "A senha não pode estar vazia";

/// Execute the `passcheck validate` command.
///
/// # Exit Codes
///
/// - 0: Password is valid
/// - 1: No password supplied, unreadable stdin, or output failure
/// - 2: Password rejected by a rule
/// - 3: Validator fault
pub fn cmd_validate(args: ValidateArgs, config: &Config) -> Result<()> {
    let service = PasswordValidationService::<RuleSetValidator>::default();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    run_validate(
        &args,
        config,
        &service,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
}

/// Run validation against explicit input and output streams.
pub fn run_validate<V, R, W>(
    args: &ValidateArgs,
    config: &Config,
    service: &PasswordValidationService<V>,
    input: &mut R,
    out: &mut W,
) -> Result<()>
where
    V: PasswordValidator,
    R: Read,
    W: Write,
{
    let format: OutputFormat = args.format.map(Into::into).unwrap_or(config.output_format);

    let Some(candidate) = read_candidate(args, input)? else {
        write_rejection(out, MISSING_PASSWORD_MESSAGE, format)?;
        return Err(PasscheckError::UserError(
            MISSING_PASSWORD_MESSAGE.to_string(),
        ));
    };

    let verdict = match service.validate_password(Some(&candidate)) {
        Ok(verdict) => verdict,
        Err(err) => {
            write_rejection(out, &err.to_string(), format)?;
            return Err(err);
        }
    };

    write_verdict(out, &verdict, format)?;

    if verdict.ok() {
        Ok(())
    } else {
        Err(PasscheckError::ValidationError(verdict.reason().to_string()))
    }
}

/// Resolve the candidate password.
///
/// With `--stdin`, all of stdin is read: zero bytes means no password, and
/// a single trailing `\n` or `\r\n` is removed. Everything else is passed
/// through untouched so the validator sees any other whitespace.
pub fn read_candidate<R: Read>(args: &ValidateArgs, input: &mut R) -> Result<Option<String>> {
    if !args.stdin {
        return Ok(args.password.clone());
    }

    let mut buf = String::new();
    input.read_to_string(&mut buf).map_err(|e| {
        PasscheckError::UserError(format!("failed to read password from stdin: {}", e))
    })?;

    if buf.is_empty() {
        return Ok(None);
    }

    let candidate = match buf.strip_suffix('\n') {
        Some(line) => line.strip_suffix('\r').unwrap_or(line),
        None => buf.as_str(),
    };

    Ok(Some(candidate.to_string()))
}
