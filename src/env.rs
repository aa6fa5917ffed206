//! Environment collaborator - reads candidate secrets from the process
//! environment and hands them to the validator.
//!
//! Validation itself never touches the environment; everything here is
//! a plain lookup that feeds [`validate`](crate::validate).

use secrecy::SecretString;
use thiserror::Error;

use crate::policy::Policy;
use crate::result::{Rejection, ValidationResult};
use crate::validator::validate;

/// Environment variable holding the session secret.
pub const SESSION_SECRET_VAR: &str = "SESSION_SECRET";

#[derive(Error, Debug)]
pub enum EnvError {
    #[error("environment variable {0} is not set")]
    Missing(String),
}

#[derive(Error, Debug)]
pub enum SessionSecretError {
    #[error(transparent)]
    Env(#[from] EnvError),
    #[error("session secret rejected: {0}")]
    Rejected(Rejection),
}

impl SessionSecretError {
    /// The rejection, when the secret was present but failed policy.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            SessionSecretError::Env(_) => None,
            SessionSecretError::Rejected(r) => Some(r),
        }
    }
}

/// Reads an environment variable as a secret, falling back to `default`
/// when the variable is unset or empty.
///
/// # Errors
///
/// Returns [`EnvError::Missing`] when the variable is unset or empty
/// and no default is given.
pub fn var_or(key: &str, default: Option<&str>) -> Result<SecretString, EnvError> {
    match std::env::var(key) {
        Ok(value) if !value.is_empty() => Ok(SecretString::from(value)),
        _ => default
            .map(|d| SecretString::new(d.to_string().into()))
            .ok_or_else(|| EnvError::Missing(key.to_string())),
    }
}

/// Reads `SESSION_SECRET` and validates it against `policy`, returning
/// the accepted secret.
///
/// # Errors
///
/// Returns `Env(Missing)` when the variable is unset or empty, or
/// `Rejected` carrying the classified rejection when the secret fails
/// the policy.
pub fn session_secret(policy: &Policy) -> Result<SecretString, SessionSecretError> {
    let candidate = var_or(SESSION_SECRET_VAR, None)?;
    match validate(Some(&candidate), policy) {
        ValidationResult::Accepted(secret) => Ok(secret),
        ValidationResult::Rejected(rejection) => Err(SessionSecretError::Rejected(rejection)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::ReasonCode;
    use secrecy::ExposeSecret;
    use serial_test::serial;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        unsafe {
            std::env::set_var(key, value);
        }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        unsafe {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_var_or_missing_without_default() {
        remove_env("SECRET_POLICY_TEST_VAR");
        let result = var_or("SECRET_POLICY_TEST_VAR", None);
        assert!(matches!(result, Err(EnvError::Missing(_))));
    }

    #[test]
    #[serial]
    fn test_var_or_falls_back_to_default() {
        remove_env("SECRET_POLICY_TEST_VAR");
        let secret = var_or("SECRET_POLICY_TEST_VAR", Some("fallback")).unwrap();
        assert_eq!(secret.expose_secret(), "fallback");
    }

    #[test]
    #[serial]
    fn test_var_or_empty_value_uses_default() {
        set_env("SECRET_POLICY_TEST_VAR", "");
        let secret = var_or("SECRET_POLICY_TEST_VAR", Some("fallback")).unwrap();
        assert_eq!(secret.expose_secret(), "fallback");
        remove_env("SECRET_POLICY_TEST_VAR");
    }

    #[test]
    #[serial]
    fn test_var_or_set_value_wins() {
        set_env("SECRET_POLICY_TEST_VAR", "configured");
        let secret = var_or("SECRET_POLICY_TEST_VAR", Some("fallback")).unwrap();
        assert_eq!(secret.expose_secret(), "configured");
        remove_env("SECRET_POLICY_TEST_VAR");
    }

    #[test]
    #[serial]
    fn test_session_secret_missing() {
        remove_env(SESSION_SECRET_VAR);
        let result = session_secret(&Policy::strict());
        assert!(matches!(result, Err(SessionSecretError::Env(_))));
    }

    #[test]
    #[serial]
    fn test_session_secret_valid() {
        set_env(SESSION_SECRET_VAR, "Str0ngS3cret!@#WithV@riedChars2023");
        let secret = session_secret(&Policy::strict()).unwrap();
        assert_eq!(secret.expose_secret(), "Str0ngS3cret!@#WithV@riedChars2023");
        remove_env(SESSION_SECRET_VAR);
    }

    #[test]
    #[serial]
    fn test_session_secret_rejected() {
        set_env(SESSION_SECRET_VAR, "short");
        let err = session_secret(&Policy::strict()).unwrap_err();
        let rejection = err.rejection().expect("should carry a rejection");
        assert_eq!(rejection.reason, ReasonCode::TooShort);
        remove_env(SESSION_SECRET_VAR);
    }
}
