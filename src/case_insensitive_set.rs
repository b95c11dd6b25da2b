use crate::util::normalize_lower;
use indexmap::IndexMap;
use serde::Deserialize;

/// Set of HTTP tokens (methods or header names) whose membership ignores case.
///
/// Entries are keyed by their lower-cased form while the first spelling seen is
/// kept for serialization, in insertion order.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct CaseInsensitiveSet {
    entries: IndexMap<String, String>,
}

impl CaseInsensitiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value, trimming surrounding whitespace.
    ///
    /// Returns `false` when the value is blank or already present under any casing.
    pub fn insert<S: Into<String>>(&mut self, value: S) -> bool {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return false;
        }

        let key = normalize_lower(trimmed);
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, trimmed.to_string());
        true
    }

    pub fn contains(&self, value: &str) -> bool {
        self.entries.contains_key(&normalize_lower(value.trim()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the original spellings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }

    pub fn join(&self, separator: &str) -> String {
        self.iter().collect::<Vec<_>>().join(separator)
    }
}

impl PartialEq for CaseInsensitiveSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .keys()
                .all(|key| other.entries.contains_key(key))
    }
}

impl Eq for CaseInsensitiveSet {}

impl<S: Into<String>> FromIterator<S> for CaseInsensitiveSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for CaseInsensitiveSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl From<Vec<String>> for CaseInsensitiveSet {
    fn from(values: Vec<String>) -> Self {
        values.into_iter().collect()
    }
}

#[cfg(test)]
#[path = "case_insensitive_set_test.rs"]
mod case_insensitive_set_test;
