//! Length rule - checks the candidate against the policy minimum.

use super::RuleResult;
use crate::policy::Policy;
use crate::result::{ReasonCode, Rejection};

/// Checks that the candidate meets the policy's minimum length.
///
/// # Returns
/// - `Some(rejection)` if the candidate is too short
/// - `None` if the length is sufficient
pub(crate) fn length_rule(secret: &str, policy: &Policy) -> RuleResult {
    if secret.chars().count() < policy.min_length {
        return Some(Rejection::new(
            ReasonCode::TooShort,
            format!("must be at least {} characters long", policy.min_length),
        ));
    }
    None
}
