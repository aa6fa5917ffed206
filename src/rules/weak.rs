//! Weak-substring rule - checks the candidate against known weak tokens.

use super::RuleResult;
use crate::policy::Policy;
use crate::result::{ReasonCode, Rejection};

/// Checks whether the candidate contains any of the policy's weak
/// tokens, case-insensitively. Tokens are stored sorted, so with
/// multiple matches the detail deterministically names the first one
/// in lexicographic order.
///
/// # Returns
/// - `Some(rejection)` naming the matched token
/// - `None` if no token matches (or the policy has none)
pub(crate) fn weak_substring_rule(secret: &str, policy: &Policy) -> RuleResult {
    if policy.weak_substrings.is_empty() {
        return None;
    }

    let folded = secret.to_lowercase();
    for token in &policy.weak_substrings {
        if folded.contains(token.as_str()) {
            return Some(Rejection::new(
                ReasonCode::WeakSubstring,
                format!("contains weak token \"{token}\""),
            ));
        }
    }
    None
}
