//! # sensor-query
//!
//! Boolean keyword queries for SENSOR topics.
//!
//! This crate owns the structured keyword model behind the topic editor
//! (inclusion and exclusion groups with per-side combine modes) and keeps
//! it synchronized with the flat boolean expression shown in advanced
//! mode, in both directions. It also evaluates a query against raw
//! mention text.
//!
//! ## Features
//! - Rendering groups to a canonical `("a" OR "b") AND NOT ("c")` string
//! - Best-effort parsing of expressions back into groups
//! - Basic/advanced editor state with lossless-where-possible switching
//! - Substring matching of queries against mention text
//! - Configurable size limits checked at save time

pub mod config;
pub mod error;
pub mod matcher;
pub mod parse;
pub mod render;
pub mod state;
pub mod types;

pub use config::QueryLimits;
pub use error::QueryError;
pub use matcher::QueryMatcher;
pub use parse::{parse, ParsedQuery};
pub use render::{render, render_sides};
pub use state::{EditorMode, QueryState, QuerySummary};
pub use types::{new_group_id, CombineMode, GroupId, KeywordGroup, KeywordSide, SideKind};
