//! External fuzzy-match capability.

use fuzzy_matcher::FuzzyMatcher as _;
use fuzzy_matcher::skim::SkimMatcherV2;

/// Ranks candidate strings against a query.
///
/// Implementations return a subsequence of `candidates` by content, ordered
/// by their own notion of relevance. The picker never inspects scores.
#[cfg_attr(test, mockall::automock)]
pub trait FuzzyMatcher {
    fn matches(&self, candidates: &[String], query: &str) -> Vec<String>;
}

/// Skim-style matcher from the `fuzzy-matcher` crate, case-insensitive.
pub struct SkimFuzzyMatcher {
    matcher: SkimMatcherV2,
}

impl SkimFuzzyMatcher {
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }
}

impl Default for SkimFuzzyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyMatcher for SkimFuzzyMatcher {
    fn matches(&self, candidates: &[String], query: &str) -> Vec<String> {
        let mut scored: Vec<(usize, i64)> = candidates
            .iter()
            .enumerate()
            .filter_map(|(index, candidate)| {
                self.matcher
                    .fuzzy_match(candidate, query)
                    .map(|score| (index, score))
            })
            .collect();

        // Ties keep candidate order.
        scored.sort_by(|first, second| second.1.cmp(&first.1).then(first.0.cmp(&second.0)));

        scored
            .into_iter()
            .map(|(index, _)| candidates[index].clone())
            .collect()
    }
}
