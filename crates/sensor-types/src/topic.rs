//! Topic data types.
//!
//! A topic is a saved named keyword filter plus the metrics the dashboard
//! displays for it. Metrics are filled in by the monitoring pipeline; the
//! topic editor only produces the identity fields (name, keywords, channels,
//! period).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::channel::Channel;
use crate::period::ReportingPeriod;
use crate::risk::RiskLevel;
use crate::sentiment::SentimentBreakdown;

/// A unique identifier for a topic.
pub type TopicId = String;

/// Generate a fresh topic id (ULID).
pub fn new_topic_id() -> TopicId {
    ulid::Ulid::new().to_string()
}

/// A saved monitoring topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    /// Unique identifier (ULID)
    pub id: TopicId,
    /// Display name, unique case-insensitively across the dashboard
    pub name: String,
    /// Flat tracked keyword list derived from the query editor at save time
    pub keywords: Vec<String>,
    /// Channels the topic is scoped to
    pub channels: Vec<Channel>,
    /// Total mentions observed in the reporting period
    pub mentions: u64,
    /// Distinct authors mentioning the topic
    pub people_talking: u64,
    /// Aggregate engagement (likes, shares, replies)
    pub engagement: u64,
    /// Sentiment split across the period's mentions
    pub sentiment: SentimentBreakdown,
    /// Current risk classification
    pub risk_level: RiskLevel,
    /// Reporting window the metrics cover
    pub period: ReportingPeriod,
    /// When the topic was created
    pub created_at: DateTime<Utc>,
    /// When the topic was last edited
    pub updated_at: DateTime<Utc>,
}

impl Topic {
    /// Create a topic with zeroed metrics.
    pub fn new(
        id: TopicId,
        name: String,
        keywords: Vec<String>,
        channels: Vec<Channel>,
        period: ReportingPeriod,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            keywords,
            channels,
            mentions: 0,
            people_talking: 0,
            engagement: 0,
            sentiment: SentimentBreakdown::default(),
            risk_level: RiskLevel::Low,
            period,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the topic covers the given channel.
    pub fn has_channel(&self, channel: Channel) -> bool {
        self.channels.contains(&channel)
    }
}
