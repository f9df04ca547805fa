//! Environment variable lookup with defaults and validation.
//!
//! Two families of lookups, both reading the variable fresh on every call:
//!
//! | Family | Unmet condition | Use |
//! |--------|-----------------|-----|
//! | `get*` | returns the default | optional settings |
//! | `must_get*` | returns [`EnvError`] | required settings, checked at startup |
//!
//! Each family has allow-list, deny-list and regex variants; list variants
//! come in exact and case-insensitive flavours.
//!
//! ```
//! let mode = envguard::get_in("APP_MODE", "dev", &["dev", "staging", "prod"]);
//! assert!(["dev", "staging", "prod"].contains(&mode.as_str()));
//!
//! match envguard::must_get("ENVGUARD_DOC_UNSET_KEY") {
//!     Ok(_) => unreachable!(),
//!     Err(e) => assert_eq!(e.kind(), envguard::EnvErrorKind::MissingKey),
//! }
//! ```
//!
//! The free functions read the process environment. [`EnvAccessor`] takes
//! any [`ReadEnv`] source; `InMemoryEnv` is available under `cfg(test)` or
//! the `test-support` feature.

pub mod accessor;
pub mod error;
mod matching;
pub mod source;

pub use accessor::EnvAccessor;
pub use error::{EnvError, EnvErrorKind, Result};
#[cfg(any(test, feature = "test-support"))]
pub use source::InMemoryEnv;
pub use source::{ReadEnv, SystemEnv};

/// Value of `key`, or `default` when it is not set.
pub fn get(key: &str, default: &str) -> String {
    EnvAccessor::system().get(key, default)
}

/// Value of `key` if it exactly equals an entry of `allowed`, else `default`.
pub fn get_in<S: AsRef<str>>(key: &str, default: &str, allowed: &[S]) -> String {
    EnvAccessor::system().get_in(key, default, allowed)
}

/// Like [`get_in`], comparing case-insensitively.
pub fn get_in_case_insensitive<S: AsRef<str>>(key: &str, default: &str, allowed: &[S]) -> String {
    EnvAccessor::system().get_in_case_insensitive(key, default, allowed)
}

/// Value of `key` if any of `patterns` matches it; a malformed pattern yields `default`.
pub fn get_in_regex<S: AsRef<str>>(key: &str, default: &str, patterns: &[S]) -> String {
    EnvAccessor::system().get_in_regex(key, default, patterns)
}

/// Value of `key` unless it exactly equals an entry of `denied`, else `default`.
pub fn get_except<S: AsRef<str>>(key: &str, default: &str, denied: &[S]) -> String {
    EnvAccessor::system().get_except(key, default, denied)
}

/// Like [`get_except`], comparing case-insensitively.
pub fn get_except_case_insensitive<S: AsRef<str>>(
    key: &str,
    default: &str,
    denied: &[S],
) -> String {
    EnvAccessor::system().get_except_case_insensitive(key, default, denied)
}

/// Value of `key` unless one of `patterns` matches it; a malformed pattern yields `default`.
pub fn get_except_regex<S: AsRef<str>>(key: &str, default: &str, patterns: &[S]) -> String {
    EnvAccessor::system().get_except_regex(key, default, patterns)
}

/// Value of `key`, or [`EnvError::MissingKey`].
pub fn must_get(key: &str) -> Result<String> {
    EnvAccessor::system().must_get(key)
}

/// Value of `key` if it exactly equals an entry of `allowed`, else [`EnvError::ValueNotAllowed`].
pub fn must_get_in<S: AsRef<str>>(key: &str, allowed: &[S]) -> Result<String> {
    EnvAccessor::system().must_get_in(key, allowed)
}

/// Like [`must_get_in`], comparing case-insensitively.
pub fn must_get_in_case_insensitive<S: AsRef<str>>(key: &str, allowed: &[S]) -> Result<String> {
    EnvAccessor::system().must_get_in_case_insensitive(key, allowed)
}

/// Value of `key` if any of `patterns` matches it. Malformed patterns give [`EnvError::PatternCompileError`].
pub fn must_get_in_regex<S: AsRef<str>>(key: &str, patterns: &[S]) -> Result<String> {
    EnvAccessor::system().must_get_in_regex(key, patterns)
}

/// Value of `key` unless it exactly equals an entry of `denied`, else [`EnvError::ValueExcluded`].
pub fn must_get_except<S: AsRef<str>>(key: &str, denied: &[S]) -> Result<String> {
    EnvAccessor::system().must_get_except(key, denied)
}

/// Like [`must_get_except`], comparing case-insensitively.
pub fn must_get_except_case_insensitive<S: AsRef<str>>(key: &str, denied: &[S]) -> Result<String> {
    EnvAccessor::system().must_get_except_case_insensitive(key, denied)
}

/// Value of `key` unless one of `patterns` matches it. Malformed patterns give [`EnvError::PatternCompileError`].
pub fn must_get_except_regex<S: AsRef<str>>(key: &str, patterns: &[S]) -> Result<String> {
    EnvAccessor::system().must_get_except_regex(key, patterns)
}
