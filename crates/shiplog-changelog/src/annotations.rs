//! Commit body annotations
//!
//! Extracts the `BREAKING CHANGE:` and `Closes #` annotations embedded in
//! commit bodies. Both prefixes are fixed, case-sensitive literals; the
//! extraction is kept apart from rendering so the two token grammars stay in
//! one place.

use regex::Regex;
use std::sync::LazyLock;

/// Matches `BREAKING CHANGE: <text>` up to the end of the line
static BREAKING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"BREAKING CHANGE: ([^\n]*)").expect("Invalid regex"));

/// Matches `Closes #<digits>`
static CLOSES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Closes #(\d+)").expect("Invalid regex"));

/// Structured annotations found in a commit body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BodyAnnotations {
    /// Text following `BREAKING CHANGE: `, without the trailing newline
    pub breaking_change: Option<String>,
    /// Issue number following `Closes #`
    pub closes_issue: Option<String>,
}

impl BodyAnnotations {
    /// Extract annotations from a commit body
    pub fn extract(body: &str) -> Self {
        let breaking_change = BREAKING_REGEX
            .captures(body)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string());

        let closes_issue = CLOSES_REGEX
            .captures(body)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string());

        Self {
            breaking_change,
            closes_issue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_both_annotations() {
        let annotations =
            BodyAnnotations::extract("Closes #42\n\nBREAKING CHANGE: renamed the API");
        assert_eq!(annotations.closes_issue.as_deref(), Some("42"));
        assert_eq!(
            annotations.breaking_change.as_deref(),
            Some("renamed the API")
        );
    }

    #[test]
    fn test_extract_nothing() {
        let annotations = BodyAnnotations::extract("just an ordinary body");
        assert_eq!(annotations, BodyAnnotations::default());
    }

    #[test]
    fn test_breaking_change_stops_at_line_end() {
        let annotations = BodyAnnotations::extract("BREAKING CHANGE: renamed API\nmore text");
        assert_eq!(annotations.breaking_change.as_deref(), Some("renamed API"));
    }

    #[test]
    fn test_closes_captures_digits_only() {
        let annotations = BodyAnnotations::extract("Closes #7 and other things");
        assert_eq!(annotations.closes_issue.as_deref(), Some("7"));
    }

    #[test]
    fn test_prefixes_are_case_sensitive() {
        let annotations = BodyAnnotations::extract("breaking change: nope\ncloses #1");
        assert_eq!(annotations, BodyAnnotations::default());
    }
}
