//! Session secret validation library
//!
//! This library validates secret strings (session/signing keys) against
//! a configurable policy of minimum length, character-class diversity,
//! and known-weak-pattern rejection. Validation is a pure function of
//! the candidate and the policy; every rejection carries a closed
//! [`ReasonCode`] plus a human-readable detail.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `SESSION_SECRET`: candidate secret read by
//!   [`env::session_secret`]; the validator itself never reads the
//!   environment.
//!
//! # Example
//!
//! ```rust
//! use secret_policy::{Policy, ValidationResult, validate};
//! use secrecy::{ExposeSecret, SecretString};
//!
//! let policy = Policy::strict();
//! let candidate = SecretString::from("Str0ngS3cret!@#WithV@riedChars2023");
//!
//! match validate(Some(&candidate), &policy) {
//!     ValidationResult::Accepted(secret) => {
//!         assert_eq!(secret.expose_secret(), "Str0ngS3cret!@#WithV@riedChars2023");
//!     }
//!     ValidationResult::Rejected(rejection) => {
//!         eprintln!("rejected: {rejection}");
//!     }
//! }
//! ```

// Internal modules
pub mod env;
mod policy;
mod result;
mod rules;
mod validator;

// Public API
pub use policy::{Policy, PolicyBuilder, PolicyError, Strictness};
pub use result::{ReasonCode, Rejection, ValidationResult};
pub use validator::validate;
