//! Validation outcome types.

use secrecy::SecretString;
use std::fmt;

/// Closed set of rejection reasons.
///
/// Every rejection carries exactly one of these codes so callers can
/// branch on the failure kind without matching on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReasonCode {
    /// Candidate absent, empty, or empty after normalization.
    Empty,
    /// Shorter than the policy minimum.
    TooShort,
    /// A required character class is missing.
    InsufficientDiversity,
    /// Contains a known weak token.
    WeakSubstring,
    /// A character or block repeats consecutively.
    RepeatedRun,
    /// Contains ascending/descending digit runs.
    SequentialPattern,
    /// Contains a keyboard-adjacency pattern.
    KeyboardPattern,
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReasonCode::Empty => "empty",
            ReasonCode::TooShort => "too short",
            ReasonCode::InsufficientDiversity => "insufficient diversity",
            ReasonCode::WeakSubstring => "weak substring",
            ReasonCode::RepeatedRun => "repeated run",
            ReasonCode::SequentialPattern => "sequential pattern",
            ReasonCode::KeyboardPattern => "keyboard pattern",
        };
        f.write_str(name)
    }
}

/// A single classified rejection.
///
/// The detail names the violated condition (required minimum, missing
/// class, matched pattern). It never contains the candidate itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub reason: ReasonCode,
    pub detail: String,
}

impl Rejection {
    pub(crate) fn new(reason: ReasonCode, detail: impl Into<String>) -> Self {
        Self {
            reason,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.reason, self.detail)
    }
}

/// Result of validating one candidate against one policy.
#[derive(Debug)]
pub enum ValidationResult {
    /// Every enabled rule passed; carries the (possibly normalized) secret.
    Accepted(SecretString),
    /// The first enabled rule that failed, with its reason and detail.
    Rejected(Rejection),
}

impl ValidationResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationResult::Accepted(_))
    }

    /// Rejection reason, or `None` when accepted.
    pub fn reason(&self) -> Option<ReasonCode> {
        match self {
            ValidationResult::Accepted(_) => None,
            ValidationResult::Rejected(r) => Some(r.reason),
        }
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            ValidationResult::Accepted(_) => None,
            ValidationResult::Rejected(r) => Some(r),
        }
    }

    /// Consumes the result, yielding the accepted secret if any.
    pub fn into_secret(self) -> Option<SecretString> {
        match self {
            ValidationResult::Accepted(s) => Some(s),
            ValidationResult::Rejected(_) => None,
        }
    }
}
