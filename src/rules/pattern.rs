//! Pattern rules - repeated runs, sequential digits, keyboard walks.

use super::RuleResult;
use crate::policy::{Policy, Strictness};
use crate::result::{ReasonCode, Rejection};

/// Keyboard-adjacency patterns and their reverses, matched
/// case-insensitively.
const KEYBOARD_PATTERNS: &[&str] = &["qwerty", "asdfgh", "zxcvbn", "ytrewq", "hgfdsa", "nbvcxz"];

/// Checks for repetitive runs: a single character repeating at least
/// `run_threshold` times in a row, or a block of length >= 3 occurring
/// twice back to back (e.g. "abcabc").
pub(crate) fn repeated_run_rule(secret: &str, policy: &Policy) -> RuleResult {
    let Some(threshold) = policy.repeated_run else {
        return None;
    };
    let chars: Vec<char> = secret.chars().collect();

    let mut run = 1;
    for i in 1..chars.len() {
        if chars[i] == chars[i - 1] {
            run += 1;
            if run >= threshold {
                return Some(Rejection::new(
                    ReasonCode::RepeatedRun,
                    format!("a character repeats {run} or more times consecutively"),
                ));
            }
        } else {
            run = 1;
        }
    }

    let n = chars.len();
    for i in 0..n {
        for len in 3..=(n - i) / 2 {
            if chars[i..i + len] == chars[i + len..i + 2 * len] {
                return Some(Rejection::new(
                    ReasonCode::RepeatedRun,
                    format!("a block of {len} characters repeats consecutively"),
                ));
            }
        }
    }

    None
}

/// Checks for ascending/descending runs of >= 3 consecutive digits
/// ("123", "987"). `Single` strictness rejects on one run, `Repeated`
/// requires at least two.
pub(crate) fn sequential_rule(secret: &str, policy: &Policy) -> RuleResult {
    let Some(strictness) = policy.sequential else {
        return None;
    };

    let chars: Vec<char> = secret.chars().collect();
    let runs = sequential_digit_runs(&chars);
    let needed = match strictness {
        Strictness::Single => 1,
        Strictness::Repeated => 2,
    };

    if runs >= needed {
        return Some(Rejection::new(
            ReasonCode::SequentialPattern,
            format!("contains {runs} sequential digit run(s)"),
        ));
    }
    None
}

/// Checks for keyboard-adjacency substrings, case-insensitively.
pub(crate) fn keyboard_rule(secret: &str, policy: &Policy) -> RuleResult {
    let Some(strictness) = policy.keyboard else {
        return None;
    };

    let folded = secret.to_lowercase();
    let needed = match strictness {
        Strictness::Single => 1,
        Strictness::Repeated => 2,
    };

    for pattern in KEYBOARD_PATTERNS {
        if count_occurrences(&folded, pattern) >= needed {
            return Some(Rejection::new(
                ReasonCode::KeyboardPattern,
                format!("contains keyboard pattern \"{pattern}\""),
            ));
        }
    }
    None
}

/// Counts non-overlapping ascending/descending digit triples.
fn sequential_digit_runs(chars: &[char]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i + 3 <= chars.len() {
        let w = &chars[i..i + 3];
        if w.iter().all(|c| c.is_ascii_digit()) {
            let (a, b, c) = (w[0] as i32, w[1] as i32, w[2] as i32);
            if (b == a + 1 && c == b + 1) || (b == a - 1 && c == b - 1) {
                count += 1;
                i += 3;
                continue;
            }
        }
        i += 1;
    }
    count
}

/// Counts non-overlapping occurrences of `needle` in `haystack`.
fn count_occurrences(haystack: &str, needle: &str) -> usize {
    let mut count = 0;
    let mut pos = 0;
    while let Some(found) = haystack[pos..].find(needle) {
        count += 1;
        pos += found + needle.len();
    }
    count
}
