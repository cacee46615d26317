//! Rendering of the structured keyword model to a flat boolean expression.
//!
//! The output grammar is the one the advanced editor accepts:
//!
//! ```text
//! query      := andExpr
//! andExpr    := orGroup ( ("AND"|"OR") orGroup )*
//! orGroup    := ["NOT"] "(" quotedTerm ("OR" quotedTerm)* ")"
//! quotedTerm := '"' <non-quote characters> '"'
//! ```

use crate::state::QueryState;
use crate::types::{CombineMode, KeywordGroup, KeywordSide};

/// Render the structured sides of a query state to a boolean expression.
///
/// Returns an empty string when both sides carry no keywords.
pub fn render(state: &QueryState) -> String {
    render_sides(&state.inclusion, &state.exclusion)
}

/// Render a pair of keyword sides to a boolean expression.
///
/// Empty groups are omitted. Inclusion groups render as `("a" OR "b")`,
/// exclusion groups as `NOT ("a" OR "b")`. Sibling groups are joined with
/// `AND` when the side's combine mode is `All`, `OR` when it is `Any`, and
/// the two sides are joined with `AND`.
pub fn render_sides(inclusion: &KeywordSide, exclusion: &KeywordSide) -> String {
    let inclusion_part = inclusion
        .non_empty_groups()
        .map(render_group)
        .collect::<Vec<_>>()
        .join(joiner(inclusion.combine_mode));

    let exclusion_part = exclusion
        .non_empty_groups()
        .map(|group| format!("NOT {}", render_group(group)))
        .collect::<Vec<_>>()
        .join(joiner(exclusion.combine_mode));

    if inclusion_part.is_empty() {
        exclusion_part
    } else if exclusion_part.is_empty() {
        inclusion_part
    } else {
        format!("{} AND {}", inclusion_part, exclusion_part)
    }
}

fn render_group(group: &KeywordGroup) -> String {
    let terms = group
        .keywords
        .iter()
        .map(|keyword| format!("\"{}\"", keyword))
        .collect::<Vec<_>>()
        .join(" OR ");
    format!("({})", terms)
}

fn joiner(mode: CombineMode) -> &'static str {
    match mode {
        CombineMode::All => " AND ",
        CombineMode::Any => " OR ",
    }
}
