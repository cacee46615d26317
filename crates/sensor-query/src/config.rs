//! Query size limits.

use serde::{Deserialize, Serialize};

use crate::error::QueryError;
use crate::state::QueryState;
use crate::types::SideKind;

/// Caps on query size, checked once at save time rather than on every
/// keystroke.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryLimits {
    /// Maximum groups per side
    #[serde(default = "default_max_groups_per_side")]
    pub max_groups_per_side: usize,

    /// Maximum keywords in a single group
    #[serde(default = "default_max_keywords_per_group")]
    pub max_keywords_per_group: usize,

    /// Maximum keyword length in characters
    #[serde(default = "default_max_keyword_len")]
    pub max_keyword_len: usize,

    /// Maximum expression length in characters
    #[serde(default = "default_max_query_len")]
    pub max_query_len: usize,
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            max_groups_per_side: default_max_groups_per_side(),
            max_keywords_per_group: default_max_keywords_per_group(),
            max_keyword_len: default_max_keyword_len(),
            max_query_len: default_max_query_len(),
        }
    }
}

fn default_max_groups_per_side() -> usize {
    10
}
fn default_max_keywords_per_group() -> usize {
    25
}
fn default_max_keyword_len() -> usize {
    64
}
fn default_max_query_len() -> usize {
    1024
}

impl QueryLimits {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), QueryError> {
        if self.max_groups_per_side == 0 {
            return Err(QueryError::InvalidConfig(
                "max_groups_per_side must be > 0".to_string(),
            ));
        }
        if self.max_keywords_per_group == 0 {
            return Err(QueryError::InvalidConfig(
                "max_keywords_per_group must be > 0".to_string(),
            ));
        }
        if self.max_keyword_len == 0 {
            return Err(QueryError::InvalidConfig(
                "max_keyword_len must be > 0".to_string(),
            ));
        }
        if self.max_query_len == 0 {
            return Err(QueryError::InvalidConfig(
                "max_query_len must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Check the effective query against the limits, reporting the first
    /// violation found.
    pub fn check_state(&self, state: &QueryState) -> Result<(), QueryError> {
        let (inclusion, exclusion) = state.effective_sides();
        for (side, side_state) in [
            (SideKind::Inclusion, &inclusion),
            (SideKind::Exclusion, &exclusion),
        ] {
            if side_state.groups.len() > self.max_groups_per_side {
                return Err(QueryError::TooManyGroups {
                    side,
                    limit: self.max_groups_per_side,
                });
            }
            for group in &side_state.groups {
                if group.keywords.len() > self.max_keywords_per_group {
                    return Err(QueryError::TooManyKeywords {
                        group_id: group.id.clone(),
                        limit: self.max_keywords_per_group,
                    });
                }
                for keyword in &group.keywords {
                    if keyword.chars().count() > self.max_keyword_len {
                        return Err(QueryError::KeywordTooLong {
                            keyword: keyword.clone(),
                            limit: self.max_keyword_len,
                        });
                    }
                }
            }
        }

        let len = state.preview().chars().count();
        if len > self.max_query_len {
            return Err(QueryError::QueryTooLong {
                len,
                limit: self.max_query_len,
            });
        }
        Ok(())
    }
}
