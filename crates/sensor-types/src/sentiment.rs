//! Sentiment classification shown on topic cards.

use serde::{Deserialize, Serialize};

/// Fraction of mentions per sentiment class, each clamped to 0.0-1.0.
///
/// The fractions are independent readings rather than a distribution; the
/// upstream scorer does not guarantee they sum to 1.0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    pub positive: f32,
    pub neutral: f32,
    pub negative: f32,
}

impl SentimentBreakdown {
    /// Create a breakdown, clamping each fraction to the valid range.
    pub fn new(positive: f32, neutral: f32, negative: f32) -> Self {
        Self {
            positive: positive.clamp(0.0, 1.0),
            neutral: neutral.clamp(0.0, 1.0),
            negative: negative.clamp(0.0, 1.0),
        }
    }

    /// The label with the highest fraction. Ties resolve to Neutral.
    pub fn dominant(&self) -> SentimentLabel {
        if self.positive > self.neutral && self.positive > self.negative {
            SentimentLabel::Positive
        } else if self.negative > self.neutral && self.negative > self.positive {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

/// A single sentiment class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
