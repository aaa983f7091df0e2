//! Error types for passcheck.
//!
//! The validator itself never fails; these errors belong to the layers around
//! it (input handling, configuration, and the service's fault boundary).

use crate::exit_codes;
use thiserror::Error;

/// Main error type for passcheck operations.
#[derive(Error, Debug)]
pub enum PasscheckError {
    /// Invalid arguments, missing input, or a bad config file.
    #[error("{0}")]
    UserError(String),

    /// The password was rejected. Holds the rule's reason verbatim.
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// The validator panicked instead of returning a verdict.
    #[error("{0}")]
    InternalError(String),
}

impl PasscheckError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PasscheckError::UserError(_) => exit_codes::USER_ERROR,
            PasscheckError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            PasscheckError::InternalError(_) => exit_codes::INTERNAL_ERROR,
        }
    }
}

/// Result type alias for passcheck operations.
pub type Result<T> = std::result::Result<T, PasscheckError>;
