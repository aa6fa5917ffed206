//! Secret validator - runs the rule sequence in fixed order.

use secrecy::{ExposeSecret, SecretString};

use crate::policy::Policy;
use crate::result::{ReasonCode, Rejection, ValidationResult};
use crate::rules::{
    RuleResult, diversity_rule, keyboard_rule, length_rule, repeated_run_rule, sequential_rule,
    weak_substring_rule,
};

/// Validates a candidate secret against a policy.
///
/// The candidate may be absent (e.g. an unset environment variable);
/// absence, emptiness, and emptiness after normalization all yield
/// `Rejected` with [`ReasonCode::Empty`] before any other rule runs.
///
/// Rules run in a fixed order (length, diversity, weak substring,
/// repeated run, sequential, keyboard) and the first failure wins.
/// The function is pure: it reads nothing but its two arguments and
/// mutates neither.
///
/// # Returns
/// `Accepted` carrying the (possibly normalized) secret, or `Rejected`
/// with the first violated rule's reason and detail.
pub fn validate(candidate: Option<&SecretString>, policy: &Policy) -> ValidationResult {
    let raw = match candidate {
        Some(s) => s.expose_secret(),
        None => return rejected_empty(),
    };
    if raw.is_empty() {
        return rejected_empty();
    }

    let normalized = if policy.normalize {
        normalize(raw)
    } else {
        raw.to_string()
    };
    if normalized.is_empty() {
        return rejected_empty();
    }

    // Orchestrator: run rules in sequence, first failure wins
    let rules: [fn(&str, &Policy) -> RuleResult; 6] = [
        length_rule,
        diversity_rule,
        weak_substring_rule,
        repeated_run_rule,
        sequential_rule,
        keyboard_rule,
    ];

    for rule_fn in rules {
        if let Some(rejection) = rule_fn(&normalized, policy) {
            #[cfg(feature = "tracing")]
            tracing::debug!("secret rejected ({}): {}", rejection.reason, rejection.detail);
            return ValidationResult::Rejected(rejection);
        }
    }

    ValidationResult::Accepted(SecretString::from(normalized))
}

fn rejected_empty() -> ValidationResult {
    ValidationResult::Rejected(Rejection::new(
        ReasonCode::Empty,
        "secret must not be empty",
    ))
}

/// Trims surrounding whitespace and strips ASCII control characters
/// (0x00-0x1F and 0x7F).
fn normalize(raw: &str) -> String {
    raw.trim().chars().filter(|c| !c.is_ascii_control()).collect()
}
