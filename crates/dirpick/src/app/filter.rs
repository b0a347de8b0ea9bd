use std::collections::{HashMap, VecDeque};

use tracing::warn;

use crate::domain::Entry;
use crate::infra::FuzzyMatcher;

/// Applies the injected fuzzy matcher to entry listings.
pub struct FuzzyFilterAdapter {
    matcher: Box<dyn FuzzyMatcher>,
}

impl FuzzyFilterAdapter {
    pub fn new(matcher: Box<dyn FuzzyMatcher>) -> Self {
        Self { matcher }
    }

    /// Returns the entries of `candidates` matching `query`, in the
    /// matcher's relevance order.
    ///
    /// An empty query returns `candidates` unchanged without consulting the
    /// matcher. Labels the matcher returns that are not candidates are
    /// dropped.
    pub fn filter(&self, candidates: &[Entry], query: &str) -> Vec<Entry> {
        if query.is_empty() {
            return candidates.to_vec();
        }

        let labels: Vec<String> = candidates.iter().map(Entry::display_label).collect();
        // Lossy names can collide, so one label may stand for several entries.
        let mut by_label: HashMap<&str, VecDeque<&Entry>> =
            HashMap::with_capacity(candidates.len());
        for (label, entry) in labels.iter().zip(candidates) {
            by_label.entry(label.as_str()).or_default().push_back(entry);
        }

        let matched = self.matcher.matches(&labels, query);
        let mut filtered = Vec::with_capacity(matched.len());
        for label in &matched {
            // Popping keeps each candidate from being emitted twice.
            match by_label
                .get_mut(label.as_str())
                .and_then(VecDeque::pop_front)
            {
                Some(entry) => filtered.push(entry.clone()),
                None => warn!(label, "fuzzy matcher returned an unknown candidate"),
            }
        }

        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::matcher::MockFuzzyMatcher;

    fn listing() -> Vec<Entry> {
        vec![
            Entry::go_up(),
            Entry::dir("src"),
            Entry::file("src"),
            Entry::file("README.md"),
        ]
    }

    #[test]
    fn test_filter_empty_query_is_identity_without_matcher_call() {
        // Arrange
        let mut matcher = MockFuzzyMatcher::new();
        matcher.expect_matches().never();
        let adapter = FuzzyFilterAdapter::new(Box::new(matcher));
        let candidates = listing();

        // Act
        let filtered = adapter.filter(&candidates, "");

        // Assert
        assert_eq!(filtered, candidates);
    }

    #[test]
    fn test_filter_follows_matcher_order() {
        // Arrange
        let mut matcher = MockFuzzyMatcher::new();
        matcher
            .expect_matches()
            .withf(|candidates, query| {
                candidates == ["../", "src/", "src", "README.md"] && query == "s"
            })
            .times(1)
            .returning(|_, _| vec!["src".to_string(), "src/".to_string()]);
        let adapter = FuzzyFilterAdapter::new(Box::new(matcher));

        // Act
        let filtered = adapter.filter(&listing(), "s");

        // Assert
        assert_eq!(filtered, vec![Entry::file("src"), Entry::dir("src")]);
    }

    #[test]
    fn test_filter_drops_unknown_and_duplicate_labels() {
        // Arrange
        let mut matcher = MockFuzzyMatcher::new();
        matcher.expect_matches().returning(|_, _| {
            vec![
                "README.md".to_string(),
                "ghost.txt".to_string(),
                "README.md".to_string(),
            ]
        });
        let adapter = FuzzyFilterAdapter::new(Box::new(matcher));

        // Act
        let filtered = adapter.filter(&listing(), "read");

        // Assert
        assert_eq!(filtered, vec![Entry::file("README.md")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_filter_keeps_entries_with_colliding_lossy_labels() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        // Arrange
        let first = Entry::file(OsStr::from_bytes(b"a\xff"));
        let second = Entry::file(OsStr::from_bytes(b"a\xfe"));
        let mut matcher = MockFuzzyMatcher::new();
        matcher
            .expect_matches()
            .returning(|candidates, _| candidates.to_vec());
        let adapter = FuzzyFilterAdapter::new(Box::new(matcher));

        // Act
        let filtered = adapter.filter(&[first.clone(), second.clone()], "a");

        // Assert
        assert_eq!(filtered, vec![first, second]);
    }

    #[test]
    fn test_filter_can_drop_go_up_entry() {
        // Arrange
        let mut matcher = MockFuzzyMatcher::new();
        matcher.expect_matches().returning(|_, _| Vec::new());
        let adapter = FuzzyFilterAdapter::new(Box::new(matcher));

        // Act
        let filtered = adapter.filter(&listing(), "xyz");

        // Assert
        assert!(filtered.is_empty());
    }
}
