//! Structured keyword filter types.
//!
//! A query is built from two [`KeywordSide`]s: terms a mention must contain
//! (inclusion) and terms that disqualify it (exclusion). Each side holds
//! ordered [`KeywordGroup`]s; keywords within a group are interchangeable
//! OR-alternatives, while sibling groups combine per the side's
//! [`CombineMode`].

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A unique identifier for a keyword group, opaque to callers.
pub type GroupId = String;

/// Generate a fresh group id (ULID).
pub fn new_group_id() -> GroupId {
    ulid::Ulid::new().to_string()
}

/// How sibling groups on one side combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombineMode {
    /// Groups are joined with AND: every group must match.
    All,
    /// Groups are joined with OR: one matching group suffices.
    #[default]
    Any,
}

impl CombineMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CombineMode::All => "all",
            CombineMode::Any => "any",
        }
    }
}

impl std::fmt::Display for CombineMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of the query an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SideKind {
    Inclusion,
    Exclusion,
}

impl SideKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SideKind::Inclusion => "inclusion",
            SideKind::Exclusion => "exclusion",
        }
    }
}

impl std::fmt::Display for SideKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An OR-set of interchangeable keywords.
///
/// Keywords are stored lowercased and are unique within the group
/// (case-insensitively). The same keyword may appear in sibling groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordGroup {
    /// Opaque id, unique within the owning side
    pub id: GroupId,
    /// Lowercased keywords in insertion order
    pub keywords: Vec<String>,
}

impl KeywordGroup {
    /// Create an empty group with a fresh id.
    pub fn new() -> Self {
        Self {
            id: new_group_id(),
            keywords: Vec::new(),
        }
    }

    /// Create a group from raw keywords, normalizing and de-duplicating
    /// them in order.
    pub fn with_keywords(keywords: Vec<String>) -> Self {
        let mut group = Self::new();
        for keyword in keywords {
            group.add(&keyword);
        }
        group
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Case-insensitive membership check.
    pub fn contains(&self, keyword: &str) -> bool {
        let needle = keyword.trim().to_lowercase();
        self.keywords.iter().any(|k| *k == needle)
    }

    /// Add a keyword: trimmed, lowercased, appended in order.
    ///
    /// Returns false without modifying the group when the input is empty
    /// after trimming or already present in this group.
    pub fn add(&mut self, raw: &str) -> bool {
        let keyword = raw.trim().to_lowercase();
        if keyword.is_empty() {
            return false;
        }
        if self.keywords.contains(&keyword) {
            debug!(group_id = %self.id, keyword = %keyword, "Ignoring duplicate keyword");
            return false;
        }
        self.keywords.push(keyword);
        true
    }

    /// Remove the keyword at `index`. Out-of-range indices are a no-op.
    pub fn remove(&mut self, index: usize) -> bool {
        if index < self.keywords.len() {
            self.keywords.remove(index);
            true
        } else {
            false
        }
    }
}

impl Default for KeywordGroup {
    fn default() -> Self {
        Self::new()
    }
}

/// One side of a query: ordered groups plus their combine mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordSide {
    pub groups: Vec<KeywordGroup>,
    pub combine_mode: CombineMode,
}

impl KeywordSide {
    /// A side with a single empty group, the shape a fresh editor shows.
    pub fn new() -> Self {
        Self::with_mode(CombineMode::Any)
    }

    /// A fresh side with an explicit combine mode.
    pub fn with_mode(combine_mode: CombineMode) -> Self {
        Self {
            groups: vec![KeywordGroup::new()],
            combine_mode,
        }
    }

    /// Build a side from parsed groups. A side never has zero groups; an
    /// empty list is replaced by a single empty group.
    pub fn from_groups(groups: Vec<KeywordGroup>, combine_mode: CombineMode) -> Self {
        let groups = if groups.is_empty() {
            vec![KeywordGroup::new()]
        } else {
            groups
        };
        Self {
            groups,
            combine_mode,
        }
    }

    /// Append a fresh empty group and return its id.
    pub fn add_group(&mut self) -> GroupId {
        let group = KeywordGroup::new();
        let id = group.id.clone();
        self.groups.push(group);
        id
    }

    /// Remove a group by id. Unknown ids are a no-op.
    pub fn remove_group(&mut self, group_id: &str) -> bool {
        let before = self.groups.len();
        self.groups.retain(|g| g.id != group_id);
        self.groups.len() != before
    }

    pub fn group(&self, group_id: &str) -> Option<&KeywordGroup> {
        self.groups.iter().find(|g| g.id == group_id)
    }

    pub fn group_mut(&mut self, group_id: &str) -> Option<&mut KeywordGroup> {
        self.groups.iter_mut().find(|g| g.id == group_id)
    }

    /// Add a keyword to the group with the given id.
    ///
    /// Returns false when the group does not exist or the group rejected
    /// the keyword (empty input or an in-group duplicate).
    pub fn add_keyword(&mut self, group_id: &str, raw: &str) -> bool {
        match self.group_mut(group_id) {
            Some(group) => group.add(raw),
            None => {
                debug!(group_id = %group_id, "Ignoring keyword for unknown group");
                false
            }
        }
    }

    /// Remove a keyword by position from the group with the given id.
    pub fn remove_keyword(&mut self, group_id: &str, index: usize) -> bool {
        match self.group_mut(group_id) {
            Some(group) => group.remove(index),
            None => false,
        }
    }

    /// Whether any group holds at least one keyword.
    pub fn has_keywords(&self) -> bool {
        self.groups.iter().any(|g| !g.is_empty())
    }

    /// Total keywords across all groups.
    pub fn keyword_count(&self) -> usize {
        self.groups.iter().map(|g| g.keywords.len()).sum()
    }

    /// Groups that carry at least one keyword.
    pub fn non_empty_groups(&self) -> impl Iterator<Item = &KeywordGroup> {
        self.groups.iter().filter(|g| !g.is_empty())
    }

    /// Keyword lists of the non-empty groups, for observable comparison
    /// (group ids are regenerated on every parse and carry no meaning).
    pub fn keyword_lists(&self) -> Vec<Vec<String>> {
        self.non_empty_groups()
            .map(|g| g.keywords.clone())
            .collect()
    }
}

impl Default for KeywordSide {
    fn default() -> Self {
        Self::new()
    }
}
