//! In-memory topic registry.

use tracing::{debug, info};

use sensor_types::Topic;

use crate::error::TopicError;

/// Insertion-ordered registry of saved topics.
///
/// Holds page-lifetime state only: the dashboard starts from an empty
/// store and everything is lost on navigation. Insertion order is the
/// dashboard's table order.
#[derive(Debug, Clone, Default)]
pub struct TopicStore {
    topics: Vec<Topic>,
}

impl TopicStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All topics in insertion order.
    pub fn list(&self) -> &[Topic] {
        &self.topics
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == id)
    }

    /// Whether a name is already taken, case-insensitively, by a topic
    /// other than `exclude`.
    pub fn name_exists(&self, name: &str, exclude: Option<&str>) -> bool {
        let needle = name.trim().to_lowercase();
        self.topics
            .iter()
            .filter(|t| exclude != Some(t.id.as_str()))
            .any(|t| t.name.to_lowercase() == needle)
    }

    /// Add a new topic. Rejects a case-insensitive duplicate name.
    pub fn insert(&mut self, topic: Topic) -> Result<(), TopicError> {
        if self.name_exists(&topic.name, None) {
            debug!(name = %topic.name, "Rejecting duplicate topic name");
            return Err(TopicError::DuplicateName(topic.name));
        }
        info!(topic_id = %topic.id, name = %topic.name, "Saved new topic");
        self.topics.push(topic);
        Ok(())
    }

    /// Replace a stored topic, keeping its position in the list.
    ///
    /// Fails when the id is unknown or the new name collides with a
    /// different topic; keeping its own name is fine.
    pub fn update(&mut self, topic: Topic) -> Result<(), TopicError> {
        if self.name_exists(&topic.name, Some(&topic.id)) {
            debug!(name = %topic.name, "Rejecting duplicate topic name");
            return Err(TopicError::DuplicateName(topic.name));
        }
        match self.topics.iter_mut().find(|t| t.id == topic.id) {
            Some(slot) => {
                info!(topic_id = %topic.id, name = %topic.name, "Updated topic");
                *slot = topic;
                Ok(())
            }
            None => Err(TopicError::NotFound(topic.id)),
        }
    }

    /// Remove a topic by id. Returns false for unknown ids.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.topics.len();
        self.topics.retain(|t| t.id != id);
        let removed = self.topics.len() != before;
        if removed {
            info!(topic_id = %id, "Removed topic");
        }
        removed
    }
}
