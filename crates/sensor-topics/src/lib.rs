//! # sensor-topics
//!
//! Topic registry and the create/edit form flow for SENSOR.
//!
//! This crate wraps the query model from `sensor-query` with the
//! collaborators the dashboard needs: the in-memory [`TopicStore`]
//! holding saved topics for the session, and the [`TopicDraft`]
//! view-model backing one open form, including four-way validation and
//! the all-or-nothing save flow.
//!
//! ## Features
//! - Insertion-ordered topic registry with duplicate-name protection
//! - Draft validation collecting every violation in one report
//! - Save flow producing topics with flattened keyword lists
//! - Live preview matching sample mentions against the draft query

pub mod draft;
pub mod error;
pub mod store;

pub use draft::{DraftPreview, TopicDraft};
pub use error::{TopicError, ValidationIssue, ValidationReport};
pub use store::TopicStore;
