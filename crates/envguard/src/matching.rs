//! Comparison step shared by the allow and deny lookups.

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Fold {
    Exact,
    /// Per-character Unicode lower-casing on both sides, with no
    /// context-sensitive rules (final sigma stays `σ`).
    CaseInsensitive,
}

impl Fold {
    fn matches(self, a: &str, b: &str) -> bool {
        match self {
            Fold::Exact => a == b,
            Fold::CaseInsensitive => a
                .chars()
                .flat_map(char::to_lowercase)
                .eq(b.chars().flat_map(char::to_lowercase)),
        }
    }
}

/// True if any entry of `list` equals `value` under `fold`.
pub(crate) fn contains<S: AsRef<str>>(value: &str, list: &[S], fold: Fold) -> bool {
    list.iter().any(|entry| fold.matches(value, entry.as_ref()))
}

/// A pattern from the caller's list that failed to compile.
#[derive(Debug)]
pub(crate) struct BadPattern<'a> {
    pub pattern: &'a str,
    pub source: regex::Error,
}

/// Compiles `patterns` in order and stops at the first match or the first
/// compile failure, whichever comes first.
pub(crate) fn first_regex_match<'a, S: AsRef<str>>(
    value: &str,
    patterns: &'a [S],
) -> Result<bool, BadPattern<'a>> {
    for pattern in patterns {
        let pattern = pattern.as_ref();
        let re = Regex::new(pattern).map_err(|source| BadPattern { pattern, source })?;
        if re.is_match(value) {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_exact() {
        assert!(contains("x", &["x", "y"], Fold::Exact));
        assert!(!contains("X", &["x", "y"], Fold::Exact));
        assert!(!contains("x", &[] as &[&str], Fold::Exact));
    }

    #[test]
    fn test_contains_case_insensitive() {
        assert!(contains("testValue", &["TESTVALUE"], Fold::CaseInsensitive));
        assert!(contains("ÉTÉ", &["été"], Fold::CaseInsensitive));
        assert!(!contains("testValue", &["testValues"], Fold::CaseInsensitive));
    }

    #[test]
    fn test_case_insensitive_sigma() {
        // `str::to_lowercase` would turn the trailing `Σ` into `ς`.
        assert!(contains("ΟΔΟΣ", &["οδοσ"], Fold::CaseInsensitive));
        assert!(contains("οδοσ", &["ΟΔΟΣ"], Fold::CaseInsensitive));
        assert!(!contains("ΟΔΟΣ", &["οδος"], Fold::CaseInsensitive));
    }

    #[test]
    fn test_regex_match_is_unanchored() {
        assert!(first_regex_match("testValue", &["Val"]).unwrap());
        assert!(!first_regex_match("testValue", &["^Val"]).unwrap());
        assert!(first_regex_match("", &[""]).unwrap());
    }

    #[test]
    fn test_regex_stops_at_first_match() {
        // The malformed pattern after the match is never compiled.
        assert!(first_regex_match("abc", &["b", "[invalid"]).unwrap());
    }

    #[test]
    fn test_regex_reports_first_bad_pattern() {
        let err = first_regex_match("abc", &["z", "(open", "[invalid"]).unwrap_err();
        assert_eq!(err.pattern, "(open");
    }
}
