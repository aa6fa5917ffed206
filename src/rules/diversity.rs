//! Diversity rule - checks for required character classes.

use super::RuleResult;
use crate::policy::Policy;
use crate::result::{ReasonCode, Rejection};

/// The fixed special-character set. Kept identical across deployments so
/// test vectors stay portable.
const SPECIAL_CHARS: &str = r##"!@#$%^&*()_+-=[]{};':"\|,.<>/?"##;

/// Checks that every required character class is present.
///
/// Classes are checked in a fixed order (uppercase, lowercase, digit,
/// special) and the detail lists every missing one in that order.
///
/// # Returns
/// - `Some(rejection)` if a required class is missing
/// - `None` if all required classes are present
pub(crate) fn diversity_rule(secret: &str, policy: &Policy) -> RuleResult {
    let mut missing = Vec::new();

    if policy.require_uppercase && !secret.chars().any(|c| c.is_ascii_uppercase()) {
        missing.push("uppercase");
    }
    if policy.require_lowercase && !secret.chars().any(|c| c.is_ascii_lowercase()) {
        missing.push("lowercase");
    }
    if policy.require_digit && !secret.chars().any(|c| c.is_ascii_digit()) {
        missing.push("digits");
    }
    if policy.require_special && !secret.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        missing.push("special characters");
    }

    if !missing.is_empty() {
        return Some(Rejection::new(
            ReasonCode::InsufficientDiversity,
            format!("missing {}", missing.join(", ")),
        ));
    }
    None
}
