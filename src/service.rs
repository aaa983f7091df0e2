//! Password validation service.
//!
//! Wraps a [`PasswordValidator`] with logging and a fault boundary. The
//! validator is expected to be total; if it panics anyway the panic is
//! caught, logged, and reported as [`PasscheckError::InternalError`] so the
//! caller never sees an unwinding thread.

use crate::error::{PasscheckError, Result};
use crate::validate::{PasswordValidator, RuleSetValidator, Verdict};
use std::panic::{self, AssertUnwindSafe};

/// Message reported when the validator faults.
pub const INTERNAL_ERROR_MESSAGE: &str = "Erro interno durante a validação";

/// Validates passwords through a [`PasswordValidator`].
#[derive(Debug, Clone, Default)]
pub struct PasswordValidationService<V = RuleSetValidator> {
    validator: V,
}

impl<V: PasswordValidator> PasswordValidationService<V> {
    /// Create a service backed by `validator`.
    pub fn new(validator: V) -> Self {
        Self { validator }
    }

    /// Validate a candidate password.
    ///
    /// The candidate is never logged. A rejected password is still `Ok`;
    /// only a validator fault produces an error.
    pub fn validate_password(&self, candidate: Option<&str>) -> Result<Verdict> {
        tracing::info!("starting password validation");

        let outcome =
            panic::catch_unwind(AssertUnwindSafe(|| self.validator.validate(candidate)));

        let verdict = match outcome {
            Ok(verdict) => verdict,
            Err(payload) => {
                tracing::error!(
                    panic = panic_message(payload.as_ref()),
                    "password validator faulted"
                );
                return Err(PasscheckError::InternalError(
                    INTERNAL_ERROR_MESSAGE.to_string(),
                ));
            }
        };

        match verdict.violation() {
            None => tracing::info!("password accepted"),
            Some(rule) => tracing::warn!(
                rule = rule.name(),
                reason = verdict.reason(),
                "password rejected"
            ),
        }

        Ok(verdict)
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic"
    }
}
