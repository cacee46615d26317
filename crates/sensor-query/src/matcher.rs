//! Evaluation of a keyword query against mention text.

use crate::state::QueryState;
use crate::types::{CombineMode, KeywordGroup, KeywordSide};

/// A compiled snapshot of a query, ready to test against text.
///
/// Matching is case-insensitive substring containment: a group hits when
/// any of its keywords appears in the text, and the sides combine exactly
/// as the rendered boolean expression reads.
#[derive(Debug, Clone)]
pub struct QueryMatcher {
    inclusion: KeywordSide,
    exclusion: KeywordSide,
}

impl QueryMatcher {
    /// Compile the effective sides of an editor state.
    pub fn new(state: &QueryState) -> Self {
        let (inclusion, exclusion) = state.effective_sides();
        Self::from_sides(inclusion, exclusion)
    }

    pub fn from_sides(inclusion: KeywordSide, exclusion: KeywordSide) -> Self {
        Self {
            inclusion,
            exclusion,
        }
    }

    /// Whether the text satisfies the query.
    ///
    /// A query with no inclusion keywords matches nothing. Exclusion
    /// groups disqualify per their combine mode: with `All` (AND-joined
    /// `NOT` fragments) one hitting group is enough to reject, with `Any`
    /// every non-empty group must hit.
    pub fn matches(&self, text: &str) -> bool {
        let haystack = text.to_lowercase();

        let mut inclusion_groups = self.inclusion.non_empty_groups().peekable();
        if inclusion_groups.peek().is_none() {
            return false;
        }
        let included = match self.inclusion.combine_mode {
            CombineMode::All => inclusion_groups.all(|g| group_hits(g, &haystack)),
            CombineMode::Any => inclusion_groups.any(|g| group_hits(g, &haystack)),
        };
        if !included {
            return false;
        }

        let mut exclusion_groups = self.exclusion.non_empty_groups().peekable();
        if exclusion_groups.peek().is_none() {
            return true;
        }
        let excluded = match self.exclusion.combine_mode {
            CombineMode::All => exclusion_groups.any(|g| group_hits(g, &haystack)),
            CombineMode::Any => exclusion_groups.all(|g| group_hits(g, &haystack)),
        };
        !excluded
    }
}

fn group_hits(group: &KeywordGroup, haystack: &str) -> bool {
    group.keywords.iter().any(|k| haystack.contains(k.as_str()))
}
