//! Editor state for a keyword query and the basic/advanced mode machine.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::parse::parse;
use crate::render::render_sides;
use crate::types::{CombineMode, GroupId, KeywordSide, SideKind};

/// Which editing surface currently owns the query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorMode {
    /// Structured group/keyword editing. The expression is derived.
    #[default]
    Basic,
    /// Free-text expression editing. The structured sides are derived.
    Advanced,
}

impl EditorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditorMode::Basic => "basic",
            EditorMode::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for EditorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The full editing state behind one open topic form.
///
/// In [`EditorMode::Basic`] the structured sides are authoritative and
/// `advanced_text` is regenerated when the user switches modes. In
/// [`EditorMode::Advanced`] the text is authoritative and the sides are
/// re-derived (best effort) on the way back. Each open form owns an
/// independent state; operations mutate it in place and complete
/// synchronously.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryState {
    /// Groups a mention must match
    pub inclusion: KeywordSide,
    /// Groups that disqualify a mention
    pub exclusion: KeywordSide,
    /// Which editing surface is active
    pub mode: EditorMode,
    /// The free-text expression, authoritative in advanced mode
    pub advanced_text: String,
}

impl QueryState {
    /// Fresh state for a create form: one empty group per side, basic
    /// mode, empty expression. Identical to `parse("")`.
    pub fn new() -> Self {
        Self {
            inclusion: KeywordSide::new(),
            exclusion: KeywordSide::new(),
            mode: EditorMode::Basic,
            advanced_text: String::new(),
        }
    }

    /// State for editing an existing topic, seeded from its flat keyword
    /// list. The list becomes a single inclusion group; the original
    /// grouping is not stored on the topic and cannot be recovered.
    pub fn from_keywords(keywords: &[String]) -> Self {
        let mut inclusion = KeywordSide::new();
        let group_id = inclusion.groups[0].id.clone();
        for keyword in keywords {
            inclusion.add_keyword(&group_id, keyword);
        }
        Self {
            inclusion,
            exclusion: KeywordSide::new(),
            mode: EditorMode::Basic,
            advanced_text: String::new(),
        }
    }

    pub fn side(&self, side: SideKind) -> &KeywordSide {
        match side {
            SideKind::Inclusion => &self.inclusion,
            SideKind::Exclusion => &self.exclusion,
        }
    }

    pub fn side_mut(&mut self, side: SideKind) -> &mut KeywordSide {
        match side {
            SideKind::Inclusion => &mut self.inclusion,
            SideKind::Exclusion => &mut self.exclusion,
        }
    }

    /// Add a keyword to a group. Returns false when the group does not
    /// exist or rejected the keyword.
    pub fn add_keyword(&mut self, side: SideKind, group_id: &str, raw: &str) -> bool {
        self.side_mut(side).add_keyword(group_id, raw)
    }

    /// Remove a keyword by position from a group.
    pub fn remove_keyword(&mut self, side: SideKind, group_id: &str, index: usize) -> bool {
        self.side_mut(side).remove_keyword(group_id, index)
    }

    /// Append a fresh empty group to a side and return its id.
    pub fn add_group(&mut self, side: SideKind) -> GroupId {
        self.side_mut(side).add_group()
    }

    /// Remove a group by id.
    pub fn remove_group(&mut self, side: SideKind, group_id: &str) -> bool {
        self.side_mut(side).remove_group(group_id)
    }

    pub fn set_combine_mode(&mut self, side: SideKind, mode: CombineMode) {
        self.side_mut(side).combine_mode = mode;
    }

    /// Replace the advanced expression text.
    pub fn set_advanced_text(&mut self, text: impl Into<String>) {
        self.advanced_text = text.into();
    }

    /// Switch editing modes. Returns false when already in the target
    /// mode.
    ///
    /// Entering advanced mode renders the structured sides into
    /// `advanced_text`; returning to basic mode re-derives the sides from
    /// whatever the text now says. The second direction is lossy for text
    /// the renderer did not produce.
    pub fn set_mode(&mut self, mode: EditorMode) -> bool {
        if self.mode == mode {
            return false;
        }
        match mode {
            EditorMode::Advanced => {
                self.advanced_text = render_sides(&self.inclusion, &self.exclusion);
            }
            EditorMode::Basic => {
                let parsed = parse(&self.advanced_text);
                self.inclusion = parsed.inclusion;
                self.exclusion = parsed.exclusion;
            }
        }
        self.mode = mode;
        debug!(mode = %self.mode, "Switched editor mode");
        true
    }

    /// Whether the query carries any inclusion term, counting a non-blank
    /// advanced expression even when the structured side is empty.
    pub fn has_inclusion_terms(&self) -> bool {
        self.inclusion.has_keywords() || !self.advanced_text.trim().is_empty()
    }

    /// The sides the query currently means: the structured sides in basic
    /// mode, a fresh parse of the text in advanced mode.
    pub fn effective_sides(&self) -> (KeywordSide, KeywordSide) {
        match self.mode {
            EditorMode::Basic => (self.inclusion.clone(), self.exclusion.clone()),
            EditorMode::Advanced => {
                let parsed = parse(&self.advanced_text);
                (parsed.inclusion, parsed.exclusion)
            }
        }
    }

    /// The expression shown in the live preview.
    pub fn preview(&self) -> String {
        match self.mode {
            EditorMode::Basic => render_sides(&self.inclusion, &self.exclusion),
            EditorMode::Advanced => self.advanced_text.clone(),
        }
    }

    /// Flatten the effective inclusion keywords for storage on a topic,
    /// de-duplicated across groups in first-seen order.
    pub fn flattened_keywords(&self) -> Vec<String> {
        let (inclusion, _) = self.effective_sides();
        let mut keywords: Vec<String> = Vec::new();
        for group in inclusion.non_empty_groups() {
            for keyword in &group.keywords {
                if !keywords.contains(keyword) {
                    keywords.push(keyword.clone());
                }
            }
        }
        keywords
    }

    /// Shape of the effective query, for display next to the preview.
    pub fn summary(&self) -> QuerySummary {
        let (inclusion, exclusion) = self.effective_sides();
        QuerySummary {
            expression: self.preview(),
            inclusion_groups: inclusion.non_empty_groups().count(),
            inclusion_terms: inclusion.keyword_count(),
            exclusion_groups: exclusion.non_empty_groups().count(),
            exclusion_terms: exclusion.keyword_count(),
        }
    }
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts describing the effective query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuerySummary {
    pub expression: String,
    pub inclusion_groups: usize,
    pub inclusion_terms: usize,
    pub exclusion_groups: usize,
    pub exclusion_terms: usize,
}
