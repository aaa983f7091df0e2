//! Rendering of validation results.

use crate::config::OutputFormat;
use crate::error::{PasscheckError, Result};
use crate::validate::Verdict;
use serde::Serialize;
use std::io::Write;

/// JSON body for a validation result: `{"valid": ..., "message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResponse<'a> {
    pub valid: bool,
    pub message: &'a str,
}

impl<'a> ValidationResponse<'a> {
    /// A rejection that never reached the validator (e.g. no password given).
    pub fn input_error(message: &'a str) -> Self {
        Self {
            valid: false,
            message,
        }
    }
}

impl From<&Verdict> for ValidationResponse<'static> {
    fn from(verdict: &Verdict) -> Self {
        Self {
            valid: verdict.ok(),
            message: verdict.reason(),
        }
    }
}

/// Write `verdict` to `out` in the requested format.
pub fn write_verdict<W: Write>(
    out: &mut W,
    verdict: &Verdict,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, &ValidationResponse::from(verdict)),
        OutputFormat::Text => {
            let result = if verdict.ok() {
                writeln!(out, "Password: VALID")
                    .and_then(|_| writeln!(out, "  Reason: {}", verdict.reason()))
            } else {
                let rule = verdict.violation().map(|r| r.name()).unwrap_or_default();
                writeln!(out, "Password: INVALID")
                    .and_then(|_| writeln!(out, "  Rule:   {}", rule))
                    .and_then(|_| writeln!(out, "  Reason: {}", verdict.reason()))
            };
            result.map_err(write_error)
        }
    }
}

/// Write a rejection that has no verdict behind it (missing input, validator fault).
pub fn write_rejection<W: Write>(
    out: &mut W,
    message: &str,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, &ValidationResponse::input_error(message)),
        OutputFormat::Text => {
            writeln!(out, "Password: INVALID\n  Reason: {}", message).map_err(write_error)
        }
    }
}

fn write_json<W: Write>(out: &mut W, response: &ValidationResponse<'_>) -> Result<()> {
    let json = serde_json::to_string_pretty(response).map_err(|e| {
        PasscheckError::UserError(format!("failed to serialize validation result: {}", e))
    })?;
    writeln!(out, "{}", json).map_err(write_error)
}

fn write_error(e: std::io::Error) -> PasscheckError {
    PasscheckError::UserError(format!("failed to write output: {}", e))
}
