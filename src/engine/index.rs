// ordered, de-duplicated list of school names

use std::collections::HashSet;

use super::normalize::match_key;

/// how two names are judged to be the same school
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DedupMode {
    /// byte-identical names only
    #[default]
    Exact,
    /// names equal after normalization and case folding
    Normalized,
}

impl DedupMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "exact" | "raw" => Some(DedupMode::Exact),
            "normalized" | "normalised" => Some(DedupMode::Normalized),
            _ => None,
        }
    }

    fn key(self, name: &str) -> String {
        match self {
            DedupMode::Exact => name.to_string(),
            DedupMode::Normalized => match_key(name),
        }
    }
}

/// concatenates sources in order, keeping the first occurrence of each name
#[derive(Debug, Default)]
pub struct IndexBuilder {
    mode: DedupMode,
    seen: HashSet<String>,
    names: Vec<String>,
}

impl IndexBuilder {
    pub fn new(mode: DedupMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn source<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref();
            if self.seen.insert(self.mode.key(name)) {
                self.names.push(name.to_string());
            }
        }
        self
    }

    pub fn build(self) -> SchoolIndex {
        SchoolIndex { names: self.names }
    }
}

/// build an index from several source collections with exact dedup
#[allow(dead_code)]
pub fn build_index<I, S>(sources: I) -> SchoolIndex
where
    I: IntoIterator<Item = S>,
    S: IntoIterator,
    S::Item: AsRef<str>,
{
    sources
        .into_iter()
        .fold(IndexBuilder::new(DedupMode::Exact), |builder, source| {
            builder.source(source)
        })
        .build()
}

/// insertion-ordered school names; immutable once built
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchoolIndex {
    names: Vec<String>,
}

impl SchoolIndex {
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&str> {
        self.names.get(idx).map(String::as_str)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_across_sources_collapses_in_first_seen_order() {
        let index = build_index([vec!["MIT Sloan"], vec!["MIT Sloan", "Harvard Business School"]]);
        assert_eq!(index.names(), ["MIT Sloan", "Harvard Business School"]);
    }

    #[test]
    fn test_literal_name_appears_once() {
        let index = build_index([
            vec!["Harvard Business School", "Wharton School (UPenn)"],
            vec!["Kellogg", "Harvard Business School"],
        ]);
        let count = index
            .names()
            .iter()
            .filter(|n| n.as_str() == "Harvard Business School")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_insertion_order_not_sorted() {
        let index = build_index([vec!["Wharton", "Booth", "Anderson"]]);
        assert_eq!(index.names(), ["Wharton", "Booth", "Anderson"]);
    }

    #[test]
    fn test_exact_mode_keeps_underscore_variant() {
        let index = build_index([vec!["Harvard_Business_School", "Harvard Business School"]]);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_normalized_mode_collapses_underscore_variant() {
        let index = IndexBuilder::new(DedupMode::Normalized)
            .source(["Harvard_Business_School"])
            .source(vec!["harvard business school".to_string(), "MIT Sloan".to_string()])
            .build();
        assert_eq!(index.names(), ["Harvard_Business_School", "MIT Sloan"]);
    }

    #[test]
    fn test_position_and_get() {
        let index = build_index([vec!["A", "B"]]);
        assert_eq!(index.position("B"), Some(1));
        assert_eq!(index.position("C"), None);
        assert_eq!(index.get(0), Some("A"));
        assert_eq!(index.get(2), None);
    }

    #[test]
    fn test_dedup_mode_from_name() {
        assert_eq!(DedupMode::from_name("Normalized"), Some(DedupMode::Normalized));
        assert_eq!(DedupMode::from_name("exact"), Some(DedupMode::Exact));
        assert_eq!(DedupMode::from_name("fuzzy"), None);
    }
}
