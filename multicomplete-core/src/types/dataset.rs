use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Candidate word lists keyed by their trigger marker.
///
/// Candidate order is display order. Markers are single characters; a
/// string-keyed map (as read from a config file) is validated on conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<String, Vec<String>>")]
pub struct Dataset {
    lists: BTreeMap<char, Vec<String>>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the candidate list for `marker`
    pub fn with_list<I, S>(mut self, marker: char, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(marker, candidates);
        self
    }

    pub fn insert<I, S>(&mut self, marker: char, candidates: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lists
            .insert(marker, candidates.into_iter().map(Into::into).collect());
    }

    /// Candidate list for an exact marker
    pub fn get(&self, marker: char) -> Option<&[String]> {
        self.lists.get(&marker).map(Vec::as_slice)
    }

    /// All markers, in ascending order
    pub fn markers(&self) -> impl Iterator<Item = char> + '_ {
        self.lists.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }
}

impl TryFrom<BTreeMap<String, Vec<String>>> for Dataset {
    type Error = Error;

    fn try_from(map: BTreeMap<String, Vec<String>>) -> Result<Self> {
        let mut dataset = Dataset::new();
        for (key, candidates) in map {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(marker), None) => dataset.insert(marker, candidates),
                _ => {
                    return Err(Error::Config(format!(
                        "dataset key {:?} must be exactly one character",
                        key
                    )))
                }
            }
        }
        Ok(dataset)
    }
}

impl<S: Into<String>> FromIterator<(char, Vec<S>)> for Dataset {
    fn from_iter<T: IntoIterator<Item = (char, Vec<S>)>>(iter: T) -> Self {
        let mut dataset = Dataset::new();
        for (marker, candidates) in iter {
            dataset.insert(marker, candidates);
        }
        dataset
    }
}
