//! Marker recognition

use regex::Regex;

use crate::error::{Error, Result};
use crate::types::Dataset;

/// Recognises whether a character is one of the dataset's markers.
///
/// The markers are compiled into a single anchored character class. Every
/// marker is escaped first so that regex metacharacters (`*`, `.`, `$`, `(`,
/// `]`, `-`, ...) match literally.
#[derive(Debug, Clone)]
pub struct MarkerMatcher {
    regex: Regex,
}

impl MarkerMatcher {
    /// Builds the matcher from the dataset's markers
    pub fn build(dataset: &Dataset) -> Result<Self> {
        if dataset.is_empty() {
            return Err(Error::Config("no datasets provided".to_string()));
        }

        let class: String = dataset
            .markers()
            .map(|marker| regex::escape(marker.encode_utf8(&mut [0; 4])))
            .collect();
        let regex = Regex::new(&format!("(?i)^[{}]$", class))?;

        Ok(Self { regex })
    }

    /// Whether `ch` is a marker
    pub fn is_match(&self, ch: char) -> bool {
        self.regex.is_match(ch.encode_utf8(&mut [0; 4]))
    }

    /// The compiled pattern
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher_for(markers: &str) -> MarkerMatcher {
        let dataset: Dataset = markers.chars().map(|m| (m, vec!["x"])).collect();
        MarkerMatcher::build(&dataset).unwrap()
    }

    #[test]
    fn test_plain_markers() {
        let matcher = matcher_for("@#");
        assert!(matcher.is_match('@'));
        assert!(matcher.is_match('#'));
        assert!(!matcher.is_match('a'));
        assert!(!matcher.is_match(' '));
    }

    #[test]
    fn test_regex_metacharacters_match_literally() {
        let metachars = "()[]{}*+.$^\\|?-&~";
        let matcher = matcher_for(metachars);
        for ch in metachars.chars() {
            assert!(matcher.is_match(ch), "{:?} should match", ch);
        }
        for ch in ['a', 'Z', '0', '@', '#', ' ', '/'] {
            assert!(!matcher.is_match(ch), "{:?} should not match", ch);
        }
    }

    #[test]
    fn test_matches_exactly_the_dataset_keys() {
        let keys = "*.$()";
        let matcher = matcher_for(keys);
        for code in 0x20u32..0x7f {
            let ch = char::from_u32(code).unwrap();
            assert_eq!(matcher.is_match(ch), keys.contains(ch), "char {:?}", ch);
        }
    }

    #[test]
    fn test_caret_alone_is_not_negation() {
        let matcher = matcher_for("^");
        assert!(matcher.is_match('^'));
        assert!(!matcher.is_match('a'));
    }

    #[test]
    fn test_letter_markers_ignore_case() {
        let matcher = matcher_for("a");
        assert!(matcher.is_match('a'));
        assert!(matcher.is_match('A'));
    }

    #[test]
    fn test_empty_dataset_is_config_error() {
        assert!(matches!(
            MarkerMatcher::build(&Dataset::new()),
            Err(Error::Config(_))
        ));
    }
}
