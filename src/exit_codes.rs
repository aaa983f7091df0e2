//! Exit code constants for the passcheck CLI.
//!
//! - 0: Password accepted
//! - 1: User error (bad args, missing password, invalid config)
//! - 2: Password rejected by a rule
//! - 3: Internal fault while validating

/// The password satisfied every rule.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, no password supplied, unreadable input, or invalid config.
pub const USER_ERROR: i32 = 1;

/// Validation failure: the password violated one of the rules.
pub const VALIDATION_FAILURE: i32 = 2;

/// The validator faulted instead of producing a verdict.
pub const INTERNAL_ERROR: i32 = 3;
