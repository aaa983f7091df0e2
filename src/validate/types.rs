//! The verdict returned by password validation.

use super::rules::{Rule, VALID_MESSAGE};

/// Outcome of validating one candidate.
///
/// A verdict either accepts the candidate or names the first rule it broke.
/// `ok` and `reason` are derived from that, so `ok` is true exactly when the
/// reason is [`VALID_MESSAGE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Verdict {
    violation: Option<Rule>,
}

impl Verdict {
    /// A verdict accepting the candidate.
    pub fn valid() -> Self {
        Self { violation: None }
    }

    /// A verdict rejecting the candidate because of `rule`.
    pub fn violated(rule: Rule) -> Self {
        Self {
            violation: Some(rule),
        }
    }

    /// Whether the candidate satisfied every rule.
    pub fn ok(&self) -> bool {
        self.violation.is_none()
    }

    /// Human-readable reason, suitable for showing to the user verbatim.
    pub fn reason(&self) -> &'static str {
        match self.violation {
            None => VALID_MESSAGE,
            Some(rule) => rule.message(),
        }
    }

    /// The rule that failed, if any.
    pub fn violation(&self) -> Option<Rule> {
        self.violation
    }
}
