//! Validation rules
//!
//! Each rule checks one aspect of the candidate against the policy.
//! Rules run in a fixed order and the first failure wins.

mod diversity;
mod length;
mod pattern;
mod weak;

pub(crate) use diversity::diversity_rule;
pub(crate) use length::length_rule;
pub(crate) use pattern::{keyboard_rule, repeated_run_rule, sequential_rule};
pub(crate) use weak::weak_substring_rule;

use crate::result::Rejection;

/// Result type for rule functions.
/// - `Some(rejection)` - rule failed
/// - `None` - rule passed (or is disabled by the policy)
pub(crate) type RuleResult = Option<Rejection>;
