//! Pattern 4: Regular Expression Practice
//!
//! A thin wrapper over one compiled `regex::Regex`. A malformed pattern is a
//! construction-time failure; every matching call afterwards is infallible
//! and pure.

use regex::Regex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("invalid pattern: {0}")]
    BadPattern(#[from] regex::Error),
}

/// Byte span and text of a single match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl MatchSpan {
    fn from_match(m: regex::Match) -> Self {
        MatchSpan {
            start: m.start(),
            end: m.end(),
            text: m.as_str().to_string(),
        }
    }
}

pub struct PatternMatcher {
    re: Regex,
}

impl PatternMatcher {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Ok(PatternMatcher {
            re: Regex::new(pattern)?,
        })
    }

    /// The pattern this matcher was compiled from.
    pub fn as_str(&self) -> &str {
        self.re.as_str()
    }

    /// Match anchored at the start of `text`. The leftmost match is the one
    /// with the smallest start, so it qualifies exactly when it begins at 0.
    pub fn match_start(&self, text: &str) -> Option<MatchSpan> {
        self.re
            .find(text)
            .filter(|m| m.start() == 0)
            .map(MatchSpan::from_match)
    }

    /// Leftmost match anywhere in `text`.
    pub fn search(&self, text: &str) -> Option<MatchSpan> {
        self.re.find(text).map(MatchSpan::from_match)
    }

    /// All non-overlapping matches, in order. Empty when nothing matches.
    pub fn find_all(&self, text: &str) -> Vec<String> {
        self.re
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// The pieces of `text` between matches. A match touching the start or
    /// end of `text` leaves an empty leading/trailing piece in place.
    pub fn split(&self, text: &str) -> Vec<String> {
        self.re.split(text).map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits() -> PatternMatcher {
        PatternMatcher::new(r"\d+").expect("pattern compiles")
    }

    #[test]
    fn test_match_start() {
        assert!(digits().match_start("123abc").is_some());
        assert!(digits().match_start("abc").is_none());
        // A match later in the text does not count as anchored.
        assert!(digits().match_start("abc123").is_none());
    }

    #[test]
    fn test_match_start_span() {
        let span = digits().match_start("123abc").unwrap();
        assert_eq!(span.start, 0);
        assert_eq!(span.end, 3);
        assert_eq!(span.text, "123");
    }

    #[test]
    fn test_search() {
        let span = digits().search("abc123def").unwrap();
        assert_eq!(span.start, 3);
        assert_eq!(span.text, "123");
        assert!(digits().search("abcdef").is_none());
    }

    #[test]
    fn test_find_all() {
        assert_eq!(
            digits().find_all("123abc456def789"),
            vec!["123", "456", "789"]
        );
        assert_eq!(digits().find_all("abcdef"), Vec::<String>::new());
    }

    #[test]
    fn test_split() {
        assert_eq!(
            digits().split("123abc456def789"),
            vec!["", "abc", "def", ""]
        );
        assert_eq!(digits().split("abcdef"), vec!["abcdef"]);
    }

    #[test]
    fn test_bad_pattern_fails_at_construction() {
        assert!(matches!(
            PatternMatcher::new(r"(unclosed"),
            Err(PatternError::BadPattern(_))
        ));
    }

    #[test]
    fn test_calls_are_pure() {
        let matcher = digits();
        assert_eq!(matcher.find_all("a1b2"), matcher.find_all("a1b2"));
        assert_eq!(matcher.split("a1b2"), matcher.split("a1b2"));
    }
}
