//! Core password validation.

use super::rules::Rule;
use super::types::Verdict;

/// Validate a candidate password against the fixed rule set.
///
/// Rules run in [`Rule::ALL`] order and evaluation stops at the first one
/// that fails. An absent candidate is treated exactly like the empty string.
/// This function is total: it returns a verdict for every input and never
/// panics.
///
/// # Example
///
/// ```
/// use passcheck::validate::{Rule, validate};
///
/// assert!(validate(Some("AbTp9!fok")).ok());
///
/// let verdict = validate(Some("AbTp9!foo"));
/// assert_eq!(verdict.violation(), Some(Rule::NoRepeatedCharacters));
/// assert_eq!(verdict.reason(), "Senha não pode conter caracteres repetidos");
/// ```
pub fn validate(candidate: Option<&str>) -> Verdict {
    let candidate = candidate.unwrap_or_default();

    match Rule::ALL
        .into_iter()
        .find(|rule| !rule.is_satisfied_by(candidate))
    {
        Some(rule) => Verdict::violated(rule),
        None => Verdict::valid(),
    }
}

/// A password validation capability.
///
/// The CLI and service depend on this trait rather than on [`validate`]
/// directly so they can be exercised with substitute implementations.
pub trait PasswordValidator: Send + Sync {
    /// Validate `candidate` and return the verdict.
    fn validate(&self, candidate: Option<&str>) -> Verdict;
}

/// The production validator: the fixed rule set in [`Rule::ALL`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleSetValidator;

impl PasswordValidator for RuleSetValidator {
    fn validate(&self, candidate: Option<&str>) -> Verdict {
        validate(candidate)
    }
}
