//! The view-model behind one open create/edit topic form.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use sensor_query::{
    CombineMode, EditorMode, GroupId, QueryLimits, QueryMatcher, QueryState, QuerySummary, SideKind,
};
use sensor_types::{new_topic_id, Channel, Mention, MentionId, ReportingPeriod, Topic, TopicId};

use crate::error::{TopicError, ValidationIssue, ValidationReport};
use crate::store::TopicStore;

/// Form state for creating or editing one topic.
///
/// Each open form owns an independent draft; nothing is shared between
/// forms and nothing touches the store until [`TopicDraft::save`]. The
/// keyword editing operations are thin delegates to the query model so
/// the form layer stays free of query logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicDraft {
    /// Topic name field
    pub name: String,
    /// Channels ticked in the channel picker
    pub channels: Vec<Channel>,
    /// Reporting window for the topic
    pub period: ReportingPeriod,
    /// The keyword query editor
    pub query: QueryState,
    limits: QueryLimits,
    editing: Option<TopicId>,
}

impl TopicDraft {
    /// A blank create form.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            channels: Vec::new(),
            period: ReportingPeriod::default(),
            query: QueryState::new(),
            limits: QueryLimits::default(),
            editing: None,
        }
    }

    /// A blank create form with explicit query limits.
    pub fn with_limits(limits: QueryLimits) -> Self {
        Self {
            limits,
            ..Self::new()
        }
    }

    /// Open an existing topic for editing. Its flat keyword list becomes
    /// a single inclusion group; the original grouping was not stored and
    /// cannot be recovered.
    pub fn edit(topic: &Topic) -> Self {
        Self {
            name: topic.name.clone(),
            channels: topic.channels.clone(),
            period: topic.period,
            query: QueryState::from_keywords(&topic.keywords),
            limits: QueryLimits::default(),
            editing: Some(topic.id.clone()),
        }
    }

    /// The id of the topic being edited, if any.
    pub fn editing_id(&self) -> Option<&TopicId> {
        self.editing.as_ref()
    }

    pub fn limits(&self) -> &QueryLimits {
        &self.limits
    }

    /// Tick or untick a channel. Returns whether it is selected after.
    pub fn toggle_channel(&mut self, channel: Channel) -> bool {
        if let Some(pos) = self.channels.iter().position(|c| *c == channel) {
            self.channels.remove(pos);
            false
        } else {
            self.channels.push(channel);
            true
        }
    }

    pub fn add_keyword(&mut self, side: SideKind, group_id: &str, raw: &str) -> bool {
        self.query.add_keyword(side, group_id, raw)
    }

    pub fn remove_keyword(&mut self, side: SideKind, group_id: &str, index: usize) -> bool {
        self.query.remove_keyword(side, group_id, index)
    }

    pub fn add_group(&mut self, side: SideKind) -> GroupId {
        self.query.add_group(side)
    }

    pub fn remove_group(&mut self, side: SideKind, group_id: &str) -> bool {
        self.query.remove_group(side, group_id)
    }

    pub fn set_combine_mode(&mut self, side: SideKind, mode: CombineMode) {
        self.query.set_combine_mode(side, mode);
    }

    pub fn set_mode(&mut self, mode: EditorMode) -> bool {
        self.query.set_mode(mode)
    }

    pub fn set_advanced_text(&mut self, text: impl Into<String>) {
        self.query.set_advanced_text(text);
    }

    /// Check the whole form against the store. All violations are
    /// collected and reported together, in field order.
    pub fn validate(&self, store: &TopicStore) -> ValidationReport {
        let mut report = ValidationReport::new();
        if self.name.trim().is_empty() {
            report.push(ValidationIssue::MissingTopicName);
        } else if store.name_exists(&self.name, self.editing.as_deref()) {
            report.push(ValidationIssue::DuplicateTopicName);
        }
        if !self.query.has_inclusion_terms() {
            report.push(ValidationIssue::MissingInclusionKeyword);
        }
        if self.channels.is_empty() {
            report.push(ValidationIssue::NoChannelSelected);
        }
        report
    }

    /// All-or-nothing save.
    ///
    /// Validation issues abort before any store mutation, then the query
    /// limits are enforced, then the topic is inserted (create) or
    /// updated in place (edit). Editing keeps the topic's id, metrics and
    /// creation time; only name, keywords, channels and period change.
    pub fn save(&self, store: &mut TopicStore) -> Result<Topic, TopicError> {
        let report = self.validate(store);
        if !report.is_valid() {
            debug!(issues = report.issues.len(), "Rejecting topic save");
            return Err(TopicError::Invalid(report));
        }
        self.limits.check_state(&self.query)?;

        let name = self.name.trim().to_string();
        let keywords = self.query.flattened_keywords();
        match &self.editing {
            Some(id) => {
                let mut topic = store
                    .get(id)
                    .cloned()
                    .ok_or_else(|| TopicError::NotFound(id.clone()))?;
                topic.name = name;
                topic.keywords = keywords;
                topic.channels = self.channels.clone();
                topic.period = self.period;
                topic.updated_at = Utc::now();
                store.update(topic.clone())?;
                Ok(topic)
            }
            None => {
                let topic = Topic::new(
                    new_topic_id(),
                    name,
                    keywords,
                    self.channels.clone(),
                    self.period,
                );
                store.insert(topic.clone())?;
                Ok(topic)
            }
        }
    }

    /// Live preview: the effective expression, its shape, and which of
    /// the sample mentions the filter currently matches.
    pub fn preview(&self, mentions: &[Mention]) -> DraftPreview {
        let matcher = QueryMatcher::new(&self.query);
        let matched_mentions = mentions
            .iter()
            .filter(|mention| matcher.matches(&mention.text))
            .map(|mention| mention.id.clone())
            .collect();
        DraftPreview {
            summary: self.query.summary(),
            matched_mentions,
        }
    }
}

impl Default for TopicDraft {
    fn default() -> Self {
        Self::new()
    }
}

/// Payload backing the live preview pane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftPreview {
    /// Expression and group/term counts of the effective query
    pub summary: QuerySummary,
    /// Ids of the sample mentions the filter matches
    pub matched_mentions: Vec<MentionId>,
}

impl DraftPreview {
    /// The boolean expression shown in the preview.
    pub fn expression(&self) -> &str {
        &self.summary.expression
    }
}
