//! Password validation.
//!
//! A candidate is checked against a fixed, ordered list of rules:
//! - Presence: not absent, not blank after trimming
//! - No whitespace anywhere
//! - At least 9 code points
//! - At least one digit, one lowercase letter, one uppercase letter
//! - At least one of `!@#$%^&*()-+`
//! - No repeated characters (case-sensitive)
//!
//! The first failing rule decides the verdict.

mod rules;
mod types;
mod validator;


// Re-export public API
pub use rules::{
    MIN_LENGTH, Rule, SPECIAL_CHARACTERS, VALID_MESSAGE, is_special_character, is_whitespace,
};
pub use types::Verdict;
pub use validator::{PasswordValidator, RuleSetValidator, validate};
