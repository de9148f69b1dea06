use log::{debug, trace};

use crate::error::Result;
use crate::types::Dataset;
use super::{EditContext, MarkerMatcher, boundary};

/// Turns the field's text and cursor into an [`EditContext`]
#[derive(Debug, Clone)]
pub struct FilterEngine {
    dataset: Dataset,
    matcher: MarkerMatcher,
    fuzzy: bool,
}

impl FilterEngine {
    /// Create an engine; fails with a configuration error for an empty dataset
    pub fn new(dataset: Dataset, fuzzy: bool) -> Result<Self> {
        let matcher = MarkerMatcher::build(&dataset)?;
        Ok(Self {
            dataset,
            matcher,
            fuzzy,
        })
    }

    /// Replace the dataset wholesale and rebuild the marker matcher.
    /// On error the previous dataset stays in place.
    pub fn set_dataset(&mut self, dataset: Dataset) -> Result<()> {
        self.matcher = MarkerMatcher::build(&dataset)?;
        self.dataset = dataset;
        Ok(())
    }

    pub fn matcher(&self) -> &MarkerMatcher {
        &self.matcher
    }

    /// Compute the context for `text` with the cursor at `cursor_pos`
    pub fn compute_context(&self, text: &str, cursor_pos: usize) -> EditContext {
        let (start, end) = boundary::locate_word(text, cursor_pos);
        let full_word = boundary::char_slice(text, start, end);
        let mut chars = full_word.chars();
        let first = chars.next();
        let filter_str: String = chars.collect();

        trace!("word [{}, {}) = {:?} at cursor {}", start, end, full_word, cursor_pos);

        let mut context = EditContext {
            start,
            end,
            cursor_pos: cursor_pos.min(text.chars().count()),
            full_word,
            active_marker: None,
            filter_str,
            val: text.to_string(),
            filtered_results: Vec::new(),
        };

        if let Some(marker) = first.filter(|&c| self.matcher.is_match(c)) {
            context.active_marker = Some(marker);
            context.filtered_results = self.begin_filtering(marker, &context.filter_str);
        }

        context
    }

    /// Filter the marker's list. A marker that only matched case-insensitively
    /// has no list of its own and yields nothing.
    fn begin_filtering(&self, marker: char, filter_str: &str) -> Vec<String> {
        let Some(candidates) = self.dataset.get(marker) else {
            debug!("marker {:?} has no dataset entry", marker);
            return Vec::new();
        };
        let results = filter(filter_str, candidates, self.fuzzy);
        debug!(
            "marker {:?} query {:?}: {} of {} candidates",
            marker,
            filter_str,
            results.len(),
            candidates.len()
        );
        results
    }
}

/// Keep the candidates matching `query`, in source order.
///
/// With `fuzzy` a candidate matches when it contains `query`; otherwise it
/// must start with it. Matching is case-sensitive.
pub fn filter<S: AsRef<str>>(query: &str, candidates: &[S], fuzzy: bool) -> Vec<String> {
    candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|candidate| {
            if fuzzy {
                candidate.contains(query)
            } else {
                candidate.starts_with(query)
            }
        })
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_and_fuzzy() {
        let names = ["alice", "albert", "bob", "malcolm"];
        assert_eq!(filter("al", &names, false), vec!["alice", "albert"]);
        assert_eq!(filter("al", &names, true), vec!["alice", "albert", "malcolm"]);
        assert_eq!(filter("", &names, false), names.to_vec());
        assert_eq!(filter("", &names, true), names.to_vec());
        assert!(filter("zz", &names, true).is_empty());
    }

    #[test]
    fn test_case_sensitive() {
        let names = ["Alice", "alice"];
        assert_eq!(filter("al", &names, false), vec!["alice"]);
        assert_eq!(filter("Al", &names, true), vec!["Alice"]);
    }
}
