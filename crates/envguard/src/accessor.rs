//! Lookup operations over a [`ReadEnv`] source.
//!
//! The soft lookups (`get*`) never fail and fall back to the caller's default.
//! The `must_*` lookups return an [`EnvError`] instead, for fail-fast startup
//! validation.
//!
//! Filtered soft lookups treat "retrieved value equals the default" as
//! absence and skip the filter. A present value that happens to equal the
//! default therefore comes back as the default without being checked.

use crate::error::{EnvError, Result};
use crate::matching::{contains, first_regex_match, Fold};
use crate::source::{ReadEnv, SystemEnv};

#[derive(Debug, Clone, Copy, Default)]
pub struct EnvAccessor<E = SystemEnv> {
    source: E,
}

impl EnvAccessor<SystemEnv> {
    /// Reads from the process environment.
    pub fn system() -> Self {
        Self { source: SystemEnv }
    }
}

impl<E: ReadEnv> EnvAccessor<E> {
    pub fn new(source: E) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &E {
        &self.source
    }

    /// One read of the underlying table; `None` when `key` is absent.
    pub fn read_raw(&self, key: &str) -> Option<String> {
        self.source.read_raw(key)
    }

    /// Returns the value of `key`, or `default` when it is not set.
    /// An empty value is returned as is.
    pub fn get(&self, key: &str, default: &str) -> String {
        self.read_raw(key).unwrap_or_else(|| default.to_string())
    }

    /// Returns the value of `key` if it exactly equals an entry of `allowed`.
    pub fn get_in<S: AsRef<str>>(&self, key: &str, default: &str, allowed: &[S]) -> String {
        self.get_listed(key, default, allowed, Fold::Exact, true)
    }

    pub fn get_in_case_insensitive<S: AsRef<str>>(
        &self,
        key: &str,
        default: &str,
        allowed: &[S],
    ) -> String {
        self.get_listed(key, default, allowed, Fold::CaseInsensitive, true)
    }

    /// Returns the value of `key` if any of `patterns` matches it.
    /// A pattern that fails to compile yields `default`.
    pub fn get_in_regex<S: AsRef<str>>(&self, key: &str, default: &str, patterns: &[S]) -> String {
        self.get_matched(key, default, patterns, true)
    }

    /// Returns the value of `key` unless it exactly equals an entry of `denied`.
    pub fn get_except<S: AsRef<str>>(&self, key: &str, default: &str, denied: &[S]) -> String {
        self.get_listed(key, default, denied, Fold::Exact, false)
    }

    pub fn get_except_case_insensitive<S: AsRef<str>>(
        &self,
        key: &str,
        default: &str,
        denied: &[S],
    ) -> String {
        self.get_listed(key, default, denied, Fold::CaseInsensitive, false)
    }

    /// Returns the value of `key` unless one of `patterns` matches it.
    /// A pattern that fails to compile yields `default`.
    pub fn get_except_regex<S: AsRef<str>>(
        &self,
        key: &str,
        default: &str,
        patterns: &[S],
    ) -> String {
        self.get_matched(key, default, patterns, false)
    }

    pub fn must_get(&self, key: &str) -> Result<String> {
        self.read_raw(key).ok_or_else(|| {
            tracing::debug!(key, "required environment variable is not set");
            EnvError::missing_key(key)
        })
    }

    pub fn must_get_in<S: AsRef<str>>(&self, key: &str, allowed: &[S]) -> Result<String> {
        self.must_listed(key, allowed, Fold::Exact, true)
    }

    pub fn must_get_in_case_insensitive<S: AsRef<str>>(
        &self,
        key: &str,
        allowed: &[S],
    ) -> Result<String> {
        self.must_listed(key, allowed, Fold::CaseInsensitive, true)
    }

    /// Patterns are compiled in order. A match ends the scan, so a malformed
    /// pattern after the first match is not reported.
    pub fn must_get_in_regex<S: AsRef<str>>(&self, key: &str, patterns: &[S]) -> Result<String> {
        self.must_matched(key, patterns, true)
    }

    pub fn must_get_except<S: AsRef<str>>(&self, key: &str, denied: &[S]) -> Result<String> {
        self.must_listed(key, denied, Fold::Exact, false)
    }

    pub fn must_get_except_case_insensitive<S: AsRef<str>>(
        &self,
        key: &str,
        denied: &[S],
    ) -> Result<String> {
        self.must_listed(key, denied, Fold::CaseInsensitive, false)
    }

    pub fn must_get_except_regex<S: AsRef<str>>(
        &self,
        key: &str,
        patterns: &[S],
    ) -> Result<String> {
        self.must_matched(key, patterns, false)
    }

    // `allow` selects the family: keep on hit (allow-list) or keep on miss
    // (deny-list).
    fn get_listed<S: AsRef<str>>(
        &self,
        key: &str,
        default: &str,
        list: &[S],
        fold: Fold,
        allow: bool,
    ) -> String {
        let value = self.get(key, default);
        if value == default {
            return value;
        }
        if contains(&value, list, fold) == allow {
            value
        } else {
            tracing::debug!(key, ?fold, allow, "environment value rejected, using default");
            default.to_string()
        }
    }

    fn get_matched<S: AsRef<str>>(
        &self,
        key: &str,
        default: &str,
        patterns: &[S],
        allow: bool,
    ) -> String {
        let value = self.get(key, default);
        if value == default {
            return value;
        }
        match first_regex_match(&value, patterns) {
            Ok(hit) if hit == allow => value,
            Ok(_) => {
                tracing::debug!(key, allow, "environment value rejected by pattern, using default");
                default.to_string()
            }
            Err(bad) => {
                tracing::warn!(
                    key,
                    pattern = bad.pattern,
                    error = %bad.source,
                    "invalid pattern, using default"
                );
                default.to_string()
            }
        }
    }

    fn must_listed<S: AsRef<str>>(
        &self,
        key: &str,
        list: &[S],
        fold: Fold,
        allow: bool,
    ) -> Result<String> {
        let value = self.must_get(key)?;
        if contains(&value, list, fold) == allow {
            Ok(value)
        } else {
            Err(rejected(key, allow))
        }
    }

    fn must_matched<S: AsRef<str>>(&self, key: &str, patterns: &[S], allow: bool) -> Result<String> {
        let value = self.must_get(key)?;
        match first_regex_match(&value, patterns) {
            Ok(hit) if hit == allow => Ok(value),
            Ok(_) => Err(rejected(key, allow)),
            Err(bad) => {
                tracing::debug!(key, pattern = bad.pattern, "invalid pattern");
                Err(EnvError::pattern(key, bad.pattern, bad.source))
            }
        }
    }
}

fn rejected(key: &str, allow: bool) -> EnvError {
    tracing::debug!(key, allow, "environment value failed validation");
    if allow {
        EnvError::not_allowed(key)
    } else {
        EnvError::excluded(key)
    }
}
