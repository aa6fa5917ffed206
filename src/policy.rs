//! Policy configuration, builder, and named presets.
//!
//! A `Policy` is built once and reused across validations; it is never
//! mutated afterwards, so it can be shared freely between threads.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Weak tokens seeded into the strict preset.
const STRICT_WEAK_TOKENS: &[&str] = &[
    "secret", "pass", "word", "password", "12345", "abcdef", "123", "qwerty", "asdfgh", "zxcvbn",
];

/// How many occurrences of a pattern trigger rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strictness {
    /// One occurrence is enough.
    Single,
    /// Two or more occurrences are required.
    Repeated,
}

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("minimum length must be at least 1")]
    MinLengthZero,
    #[error("repeated-run threshold must be at least 2, got {0}")]
    RunThresholdTooSmall(usize),
    #[error("weak tokens must not be empty")]
    EmptyWeakSubstring,
    #[error("weak-token file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("failed to read weak-token file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("weak-token file is empty")]
    EmptyFile,
}

/// Immutable validation policy.
///
/// Construct via [`Policy::builder`] or one of the presets
/// ([`Policy::basic`], [`Policy::strict`]).
#[derive(Debug, Clone)]
pub struct Policy {
    pub(crate) min_length: usize,
    pub(crate) require_uppercase: bool,
    pub(crate) require_lowercase: bool,
    pub(crate) require_digit: bool,
    pub(crate) require_special: bool,
    pub(crate) weak_substrings: BTreeSet<String>,
    pub(crate) repeated_run: Option<usize>,
    pub(crate) sequential: Option<Strictness>,
    pub(crate) keyboard: Option<Strictness>,
    pub(crate) normalize: bool,
}

impl Policy {
    pub fn builder() -> PolicyBuilder {
        PolicyBuilder::default()
    }

    /// Basic preset: minimum length 16, all four character classes
    /// required, whitespace/control normalization enabled, no pattern
    /// checks.
    pub fn basic() -> Policy {
        Policy {
            min_length: 16,
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
            require_special: true,
            weak_substrings: BTreeSet::new(),
            repeated_run: None,
            sequential: None,
            keyboard: None,
            normalize: true,
        }
    }

    /// Strict preset: minimum length 32, all four character classes
    /// required, common weak tokens rejected, plus repeated-run,
    /// sequential, and keyboard pattern checks.
    pub fn strict() -> Policy {
        Policy {
            min_length: 32,
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
            require_special: true,
            weak_substrings: STRICT_WEAK_TOKENS.iter().map(|t| t.to_string()).collect(),
            repeated_run: Some(3),
            sequential: Some(Strictness::Repeated),
            keyboard: Some(Strictness::Repeated),
            normalize: false,
        }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn normalizes(&self) -> bool {
        self.normalize
    }

    /// The weak tokens in effect, lowercased, in sorted order.
    pub fn weak_substrings(&self) -> impl Iterator<Item = &str> {
        self.weak_substrings.iter().map(|s| s.as_str())
    }
}

/// Builder for [`Policy`].
///
/// Defaults: minimum length 16, no class requirements, no weak tokens,
/// no pattern checks, normalization disabled.
#[derive(Debug, Clone)]
pub struct PolicyBuilder {
    min_length: usize,
    require_uppercase: bool,
    require_lowercase: bool,
    require_digit: bool,
    require_special: bool,
    weak_substrings: Vec<String>,
    weak_file: Option<PathBuf>,
    repeated_run: Option<usize>,
    sequential: Option<Strictness>,
    keyboard: Option<Strictness>,
    normalize: bool,
}

impl Default for PolicyBuilder {
    fn default() -> Self {
        Self {
            min_length: 16,
            require_uppercase: false,
            require_lowercase: false,
            require_digit: false,
            require_special: false,
            weak_substrings: Vec::new(),
            weak_file: None,
            repeated_run: None,
            sequential: None,
            keyboard: None,
            normalize: false,
        }
    }
}

impl PolicyBuilder {
    pub fn min_length(mut self, n: usize) -> Self {
        self.min_length = n;
        self
    }

    pub fn require_uppercase(mut self, on: bool) -> Self {
        self.require_uppercase = on;
        self
    }

    pub fn require_lowercase(mut self, on: bool) -> Self {
        self.require_lowercase = on;
        self
    }

    pub fn require_digit(mut self, on: bool) -> Self {
        self.require_digit = on;
        self
    }

    pub fn require_special(mut self, on: bool) -> Self {
        self.require_special = on;
        self
    }

    /// Enables all four character-class requirements.
    pub fn require_all_classes(self) -> Self {
        self.require_uppercase(true)
            .require_lowercase(true)
            .require_digit(true)
            .require_special(true)
    }

    /// Adds one weak token. Tokens are matched case-insensitively as
    /// substrings; they are lowercased at build time.
    pub fn weak_substring(mut self, token: impl Into<String>) -> Self {
        self.weak_substrings.push(token.into());
        self
    }

    /// Adds several weak tokens.
    pub fn weak_substrings<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.weak_substrings.extend(tokens.into_iter().map(Into::into));
        self
    }

    /// Loads additional weak tokens from a file at build time, one token
    /// per line. Blank lines are skipped.
    pub fn weak_substrings_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.weak_file = Some(path.into());
        self
    }

    /// Rejects candidates where a single character repeats `threshold`
    /// or more times consecutively, or where a block of length >= 3
    /// repeats back to back.
    pub fn reject_repeated_run(mut self, threshold: usize) -> Self {
        self.repeated_run = Some(threshold);
        self
    }

    /// Rejects ascending/descending digit runs of length >= 3.
    pub fn reject_sequential(mut self, strictness: Strictness) -> Self {
        self.sequential = Some(strictness);
        self
    }

    /// Rejects keyboard-adjacency patterns (`qwerty`, `asdfgh`,
    /// `zxcvbn`, and their reverses).
    pub fn reject_keyboard_patterns(mut self, strictness: Strictness) -> Self {
        self.keyboard = Some(strictness);
        self
    }

    /// Trims and strips ASCII control characters before evaluation.
    pub fn normalize(mut self, on: bool) -> Self {
        self.normalize = on;
        self
    }

    /// Builds the policy, failing fast on contradictory configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the minimum length is zero, the repeated-run
    /// threshold is below 2, any weak token is empty, or the weak-token
    /// file is missing, unreadable, or empty.
    pub fn build(self) -> Result<Policy, PolicyError> {
        if self.min_length == 0 {
            return Err(PolicyError::MinLengthZero);
        }
        if let Some(threshold) = self.repeated_run {
            if threshold < 2 {
                return Err(PolicyError::RunThresholdTooSmall(threshold));
            }
        }

        let mut weak: BTreeSet<String> = BTreeSet::new();
        for token in &self.weak_substrings {
            if token.is_empty() {
                return Err(PolicyError::EmptyWeakSubstring);
            }
            weak.insert(token.to_lowercase());
        }
        if let Some(ref path) = self.weak_file {
            weak.extend(load_weak_file(path)?);
        }

        Ok(Policy {
            min_length: self.min_length,
            require_uppercase: self.require_uppercase,
            require_lowercase: self.require_lowercase,
            require_digit: self.require_digit,
            require_special: self.require_special,
            weak_substrings: weak,
            repeated_run: self.repeated_run,
            sequential: self.sequential,
            keyboard: self.keyboard,
            normalize: self.normalize,
        })
    }
}

fn load_weak_file(path: &Path) -> Result<BTreeSet<String>, PolicyError> {
    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("weak-token file not found: {}", path.display());
        return Err(PolicyError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("weak-token file is empty: {}", path.display());
        return Err(PolicyError::EmptyFile);
    }

    let set: BTreeSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    #[cfg(feature = "tracing")]
    tracing::info!("loaded {} weak tokens from {:?}", set.len(), path);

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_build_rejects_zero_min_length() {
        let result = Policy::builder().min_length(0).build();
        assert!(matches!(result, Err(PolicyError::MinLengthZero)));
    }

    #[test]
    fn test_build_rejects_small_run_threshold() {
        let result = Policy::builder().reject_repeated_run(1).build();
        assert!(matches!(result, Err(PolicyError::RunThresholdTooSmall(1))));
    }

    #[test]
    fn test_build_rejects_empty_weak_token() {
        let result = Policy::builder().weak_substring("").build();
        assert!(matches!(result, Err(PolicyError::EmptyWeakSubstring)));
    }

    #[test]
    fn test_weak_tokens_lowercased_and_sorted() {
        let policy = Policy::builder()
            .weak_substrings(["Qwerty", "ADMIN", "pass"])
            .build()
            .unwrap();
        let tokens: Vec<&str> = policy.weak_substrings().collect();
        assert_eq!(tokens, vec!["admin", "pass", "qwerty"]);
    }

    #[test]
    fn test_weak_file_loaded_at_build() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "Hunter2").expect("Failed to write");
        writeln!(temp_file).expect("Failed to write");
        writeln!(temp_file, "  letmein  ").expect("Failed to write");

        let policy = Policy::builder()
            .weak_substrings_file(temp_file.path())
            .build()
            .unwrap();
        let tokens: Vec<&str> = policy.weak_substrings().collect();
        assert_eq!(tokens, vec!["hunter2", "letmein"]);
    }

    #[test]
    fn test_weak_file_not_found() {
        let result = Policy::builder()
            .weak_substrings_file("/nonexistent/path/weak.txt")
            .build();
        assert!(matches!(result, Err(PolicyError::FileNotFound(_))));
    }

    #[test]
    fn test_weak_file_empty() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "").expect("Failed to write empty content");

        let result = Policy::builder()
            .weak_substrings_file(temp_file.path())
            .build();
        assert!(matches!(result, Err(PolicyError::EmptyFile)));
    }

    #[test]
    fn test_basic_preset() {
        let policy = Policy::basic();
        assert_eq!(policy.min_length(), 16);
        assert!(policy.normalizes());
        assert!(policy.require_uppercase);
        assert!(policy.weak_substrings.is_empty());
        assert!(policy.repeated_run.is_none());
        assert!(policy.sequential.is_none());
        assert!(policy.keyboard.is_none());
    }

    #[test]
    fn test_strict_preset() {
        let policy = Policy::strict();
        assert_eq!(policy.min_length(), 32);
        assert!(!policy.normalizes());
        assert!(policy.weak_substrings.contains("password"));
        assert!(policy.weak_substrings.contains("qwerty"));
        assert_eq!(policy.repeated_run, Some(3));
        assert_eq!(policy.sequential, Some(Strictness::Repeated));
        assert_eq!(policy.keyboard, Some(Strictness::Repeated));
    }
}
