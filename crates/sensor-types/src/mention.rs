//! Mention data types.
//!
//! A mention is one captured social post. The dashboard streams mentions
//! into feeds and the topic editor's live preview matches draft filters
//! against them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::channel::Channel;

/// A unique identifier for a mention.
pub type MentionId = String;

/// Generate a fresh mention id (ULID).
pub fn new_mention_id() -> MentionId {
    ulid::Ulid::new().to_string()
}

/// A single captured social post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    /// Unique identifier (ULID)
    pub id: MentionId,
    /// Channel the post was captured from
    pub channel: Channel,
    /// Author handle or display name
    pub author: String,
    /// Post text the filters match against
    pub text: String,
    /// When the post was published
    pub published_at: DateTime<Utc>,
    /// Engagement count at capture time
    pub engagement: u64,
}

impl Mention {
    /// Create a mention with zero engagement.
    pub fn new(
        id: MentionId,
        channel: Channel,
        author: String,
        text: String,
        published_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            channel,
            author,
            text,
            published_at,
            engagement: 0,
        }
    }

    /// Set the engagement count.
    pub fn with_engagement(mut self, engagement: u64) -> Self {
        self.engagement = engagement;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mention_new() {
        let mention = Mention::new(
            new_mention_id(),
            Channel::Reddit,
            "u/holder".to_string(),
            "Bitcoin is rallying again".to_string(),
            Utc::now(),
        );
        assert_eq!(mention.engagement, 0);
        assert_eq!(mention.channel, Channel::Reddit);
    }

    #[test]
    fn test_mention_with_engagement() {
        let mention = Mention::new(
            new_mention_id(),
            Channel::Twitter,
            "@watcher".to_string(),
            "Big news today".to_string(),
            Utc::now(),
        )
        .with_engagement(420);
        assert_eq!(mention.engagement, 420);
    }

    #[test]
    fn test_mention_serde_round_trip() {
        let mention = Mention::new(
            new_mention_id(),
            Channel::News,
            "Daily Ledger".to_string(),
            "Regulators weigh new disclosure rules".to_string(),
            Utc::now(),
        );
        let json = serde_json::to_string(&mention).unwrap();
        let parsed: Mention = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, mention);
    }
}
