//! # sensor-types
//!
//! Shared domain types for the SENSOR monitoring dashboard.
//!
//! This crate defines the entities the dashboard displays and the topic
//! editor produces:
//! - Topics: saved named keyword filters with their display metrics
//! - Mentions: captured social posts a topic filter matches against
//! - Channels: the supported social sources
//! - Sentiment and risk classifications shown on topic cards
//! - Reporting periods scoping a topic's metrics

pub mod channel;
pub mod mention;
pub mod period;
pub mod risk;
pub mod sentiment;
pub mod topic;

pub use channel::Channel;
pub use mention::{new_mention_id, Mention, MentionId};
pub use period::ReportingPeriod;
pub use risk::RiskLevel;
pub use sentiment::{SentimentBreakdown, SentimentLabel};
pub use topic::{new_topic_id, Topic, TopicId};
