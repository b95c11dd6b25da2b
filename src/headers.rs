use crate::util::{equals_ignore_case, normalize_lower, split_header_list};
use indexmap::IndexMap;

/// Insertion-ordered header map with case-insensitive names and one value per name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeaderCollection {
    headers: IndexMap<String, (String, String)>,
}

impl HeaderCollection {
    pub fn new() -> Self {
        Self::with_estimate(8)
    }

    pub fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: IndexMap::with_capacity(estimate),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&normalize_lower(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.headers.contains_key(&normalize_lower(name))
    }

    /// Stores `value` under `name`, replacing any previous value.
    pub fn set<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) {
        let name = name.into();
        self.headers.insert(normalize_lower(&name), (name, value.into()));
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.headers
            .shift_remove(&normalize_lower(name))
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .values()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for HeaderCollection {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.set(name, value);
        }
        headers
    }
}

/// Appends `value` to an existing `Vary` header value unless already listed.
pub fn merge_vary(existing: Option<&str>, value: &str) -> String {
    let mut entries: Vec<&str> = existing
        .map(|current| split_header_list(current).collect())
        .unwrap_or_default();

    let incoming = value.trim();
    if !incoming.is_empty()
        && !entries
            .iter()
            .any(|entry| *entry == "*" || equals_ignore_case(entry, incoming))
    {
        entries.push(incoming);
    }

    let mut deduped: Vec<&str> = Vec::with_capacity(entries.len());
    for entry in entries {
        if deduped
            .iter()
            .any(|existing| equals_ignore_case(existing, entry))
        {
            continue;
        }
        deduped.push(entry);
    }

    deduped.join(", ")
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
