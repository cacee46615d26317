//! Topic error and validation types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use sensor_query::QueryError;
use sensor_types::TopicId;

/// A single form-validation violation.
///
/// The save flow detects all violations synchronously and reports them
/// together; no partial save happens while any is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationIssue {
    /// Trimmed topic name is empty
    MissingTopicName,
    /// Name collides case-insensitively with another stored topic
    DuplicateTopicName,
    /// No inclusion keyword and no advanced expression
    MissingInclusionKeyword,
    /// No channel selected for the topic
    NoChannelSelected,
}

impl ValidationIssue {
    /// The message shown inline next to the offending field.
    pub fn message(&self) -> &'static str {
        match self {
            ValidationIssue::MissingTopicName => "Topic name is required",
            ValidationIssue::DuplicateTopicName => "A topic with this name already exists",
            ValidationIssue::MissingInclusionKeyword => {
                "At least one inclusion keyword is required"
            }
            ValidationIssue::NoChannelSelected => "At least one channel must be selected",
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// All violations found by one validation pass, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn contains(&self, issue: ValidationIssue) -> bool {
        self.issues.contains(&issue)
    }

    /// The inline messages, one per violation.
    pub fn messages(&self) -> Vec<&'static str> {
        self.issues.iter().map(|issue| issue.message()).collect()
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.messages().join("; "))
    }
}

/// Errors that can occur during topic operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopicError {
    /// Draft failed form validation
    #[error("Topic validation failed: {0}")]
    Invalid(ValidationReport),

    /// Name collides with an existing topic
    #[error("A topic named \"{0}\" already exists")]
    DuplicateName(String),

    /// Topic not found
    #[error("Topic not found: {0}")]
    NotFound(TopicId),

    /// Query exceeded the configured limits
    #[error("Query limit exceeded: {0}")]
    Limits(#[from] QueryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_starts_valid() {
        let report = ValidationReport::new();
        assert!(report.is_valid());
        assert!(report.messages().is_empty());
    }

    #[test]
    fn test_report_collects_in_order() {
        let mut report = ValidationReport::new();
        report.push(ValidationIssue::MissingTopicName);
        report.push(ValidationIssue::NoChannelSelected);
        assert!(!report.is_valid());
        assert!(report.contains(ValidationIssue::MissingTopicName));
        assert!(!report.contains(ValidationIssue::DuplicateTopicName));
        assert_eq!(
            report.messages(),
            vec![
                "Topic name is required",
                "At least one channel must be selected",
            ]
        );
    }

    #[test]
    fn test_report_display_joins_messages() {
        let mut report = ValidationReport::new();
        report.push(ValidationIssue::MissingInclusionKeyword);
        report.push(ValidationIssue::NoChannelSelected);
        let rendered = format!("{}", TopicError::Invalid(report));
        assert!(rendered.contains("At least one inclusion keyword is required"));
        assert!(rendered.contains("; "));
    }

    #[test]
    fn test_issue_serialization() {
        let json = serde_json::to_string(&ValidationIssue::DuplicateTopicName).unwrap();
        assert_eq!(json, "\"duplicate_topic_name\"");
    }

    #[test]
    fn test_limit_error_wraps_query_error() {
        let err: TopicError = QueryError::QueryTooLong {
            len: 2000,
            limit: 1024,
        }
        .into();
        assert!(matches!(err, TopicError::Limits(_)));
    }
}
