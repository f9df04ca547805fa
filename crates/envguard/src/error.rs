//! Errors returned by the `must_*` lookups.
//!
//! Errors carry the key and, for regex failures, the offending pattern.
//! Variable values are never stored: they are often credentials.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EnvError>;

#[derive(Debug, Error)]
pub enum EnvError {
    #[error("environment variable `{key}` is not set")]
    MissingKey { key: String },

    #[error("value of environment variable `{key}` is not in the allowed set")]
    ValueNotAllowed { key: String },

    #[error("value of environment variable `{key}` is in the excluded set")]
    ValueExcluded { key: String },

    #[error("failed to compile pattern `{pattern}` for environment variable `{key}`")]
    PatternCompileError {
        key: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Fieldless mirror of [`EnvError`] for matching without destructuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvErrorKind {
    MissingKey,
    ValueNotAllowed,
    ValueExcluded,
    PatternCompileError,
}

impl EnvError {
    pub(crate) fn missing_key(key: &str) -> Self {
        Self::MissingKey {
            key: key.to_string(),
        }
    }

    pub(crate) fn not_allowed(key: &str) -> Self {
        Self::ValueNotAllowed {
            key: key.to_string(),
        }
    }

    pub(crate) fn excluded(key: &str) -> Self {
        Self::ValueExcluded {
            key: key.to_string(),
        }
    }

    pub(crate) fn pattern(key: &str, pattern: &str, source: regex::Error) -> Self {
        Self::PatternCompileError {
            key: key.to_string(),
            pattern: pattern.to_string(),
            source,
        }
    }

    /// The variable the lookup was for.
    pub fn key(&self) -> &str {
        match self {
            Self::MissingKey { key }
            | Self::ValueNotAllowed { key }
            | Self::ValueExcluded { key }
            | Self::PatternCompileError { key, .. } => key,
        }
    }

    pub fn kind(&self) -> EnvErrorKind {
        match self {
            Self::MissingKey { .. } => EnvErrorKind::MissingKey,
            Self::ValueNotAllowed { .. } => EnvErrorKind::ValueNotAllowed,
            Self::ValueExcluded { .. } => EnvErrorKind::ValueExcluded,
            Self::PatternCompileError { .. } => EnvErrorKind::PatternCompileError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_messages_name_the_key() {
        assert_eq!(
            EnvError::missing_key("DB_URL").to_string(),
            "environment variable `DB_URL` is not set"
        );
        assert_eq!(
            EnvError::not_allowed("MODE").to_string(),
            "value of environment variable `MODE` is not in the allowed set"
        );
        assert_eq!(
            EnvError::excluded("MODE").to_string(),
            "value of environment variable `MODE` is in the excluded set"
        );
    }

    #[test]
    fn test_pattern_error_keeps_source() {
        let source = regex::Regex::new("[invalid").unwrap_err();
        let err = EnvError::pattern("MODE", "[invalid", source);
        assert_eq!(err.kind(), EnvErrorKind::PatternCompileError);
        assert_eq!(err.key(), "MODE");
        assert!(err.to_string().contains("`[invalid`"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_kind_and_key() {
        let err = EnvError::excluded("LEVEL");
        assert_eq!(err.kind(), EnvErrorKind::ValueExcluded);
        assert_eq!(err.key(), "LEVEL");
        assert_eq!(EnvError::missing_key("X").kind(), EnvErrorKind::MissingKey);
    }
}
