//! Query error types.

use thiserror::Error;

use crate::types::{GroupId, SideKind};

/// Errors raised by query limit checks.
///
/// The editing operations themselves never fail; limits are enforced when a
/// draft is saved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Invalid limits configuration
    #[error("Invalid query limits: {0}")]
    InvalidConfig(String),

    /// A side holds more groups than allowed
    #[error("Too many keyword groups on the {side} side (limit {limit})")]
    TooManyGroups { side: SideKind, limit: usize },

    /// A group holds more keywords than allowed
    #[error("Too many keywords in group {group_id} (limit {limit})")]
    TooManyKeywords { group_id: GroupId, limit: usize },

    /// A single keyword is too long
    #[error("Keyword \"{keyword}\" is longer than {limit} characters")]
    KeywordTooLong { keyword: String, limit: usize },

    /// The rendered expression is too long
    #[error("Query expression is longer than {limit} characters ({len})")]
    QueryTooLong { len: usize, limit: usize },
}
