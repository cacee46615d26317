//! End-to-end round-trip tests for the boolean query expression.
//!
//! Covers render -> parse -> render stability, the documented
//! canonicalization of mixed-operator exclusion joins, and mode-switch
//! stability at the draft level.

use pretty_assertions::assert_eq;

use e2e_tests::complete_draft;
use sensor_query::{
    parse, render, render_sides, CombineMode, EditorMode, KeywordGroup, KeywordSide, QueryState,
    SideKind,
};

fn side(lists: &[&[&str]], mode: CombineMode) -> KeywordSide {
    let groups = lists
        .iter()
        .map(|keywords| {
            KeywordGroup::with_keywords(keywords.iter().map(|k| k.to_string()).collect())
        })
        .collect();
    KeywordSide::from_groups(groups, mode)
}

fn state(inclusion: KeywordSide, exclusion: KeywordSide) -> QueryState {
    QueryState {
        inclusion,
        exclusion,
        mode: EditorMode::Basic,
        advanced_text: String::new(),
    }
}

fn reparse(expression: &str) -> String {
    let parsed = parse(expression);
    render_sides(&parsed.inclusion, &parsed.exclusion)
}

/// The canonical example: two inclusion groups AND-joined plus one NOT
/// group survives a full render -> parse -> render pass unchanged.
#[test]
fn test_canonical_expression_round_trips() {
    let q = state(
        side(&[&["bitcoin", "btc"], &["regulation"]], CombineMode::All),
        side(&[&["spam"]], CombineMode::Any),
    );

    // 1. Render the structured state.
    let s1 = render(&q);
    assert_eq!(
        s1,
        "(\"bitcoin\" OR \"btc\") AND (\"regulation\") AND NOT (\"spam\")"
    );

    // 2. Parse it back and verify the recovered grouping.
    let parsed = parse(&s1);
    assert_eq!(
        parsed.inclusion.keyword_lists(),
        vec![
            vec!["bitcoin".to_string(), "btc".to_string()],
            vec!["regulation".to_string()],
        ]
    );
    assert_eq!(
        parsed.exclusion.keyword_lists(),
        vec![vec!["spam".to_string()]]
    );

    // 3. Rendering the parsed state reproduces the expression.
    assert_eq!(reparse(&s1), s1);
}

#[test]
fn test_pure_or_expression_round_trips() {
    let q = state(
        side(&[&["solar"], &["wind"]], CombineMode::Any),
        KeywordSide::new(),
    );
    let s1 = render(&q);
    assert_eq!(s1, "(\"solar\") OR (\"wind\")");
    assert_eq!(reparse(&s1), s1);
}

#[test]
fn test_all_and_expression_round_trips() {
    let q = state(
        side(&[&["bitcoin"]], CombineMode::All),
        side(&[&["spam"], &["scam"]], CombineMode::All),
    );
    let s1 = render(&q);
    assert_eq!(s1, "(\"bitcoin\") AND NOT (\"spam\") AND NOT (\"scam\")");
    assert_eq!(reparse(&s1), s1);
}

#[test]
fn test_exclusion_only_expression_round_trips() {
    let q = state(
        KeywordSide::new(),
        side(&[&["spam"], &["scam"]], CombineMode::Any),
    );
    let s1 = render(&q);
    assert_eq!(s1, "NOT (\"spam\") OR NOT (\"scam\")");
    assert_eq!(reparse(&s1), s1);
}

/// Mixing an AND side-join with OR-joined NOT groups is the known
/// lossy shape: the mode heuristic reads the " AND NOT " literal and
/// canonicalizes the exclusion join to AND. One pass changes the
/// string, a second pass is the fixpoint.
#[test]
fn test_mixed_joins_canonicalize_after_one_pass() {
    let q = state(
        side(&[&["x"]], CombineMode::All),
        side(&[&["spam"], &["scam"]], CombineMode::Any),
    );
    let s1 = render(&q);
    assert_eq!(s1, "(\"x\") AND NOT (\"spam\") OR NOT (\"scam\")");

    let s2 = reparse(&s1);
    assert_eq!(s2, "(\"x\") AND NOT (\"spam\") AND NOT (\"scam\")");

    let s3 = reparse(&s2);
    assert_eq!(s3, s2);

    let s4 = reparse(&s3);
    assert_eq!(s4, s3);
}

#[test]
fn test_empty_state_renders_empty_and_reparses_fresh() {
    assert_eq!(render(&QueryState::new()), "");
    let parsed = parse("");
    assert_eq!(parsed.inclusion.groups.len(), 1);
    assert!(parsed.inclusion.groups[0].is_empty());
    assert_eq!(parsed.inclusion.combine_mode, CombineMode::Any);
}

/// Switching the editor to advanced mode and straight back must not
/// change what the user built in basic mode.
#[test]
fn test_draft_mode_switch_is_stable() {
    let mut draft = complete_draft("Stability", &["bitcoin", "btc"]);
    let g2 = draft.add_group(SideKind::Inclusion);
    draft.add_keyword(SideKind::Inclusion, &g2, "regulation");
    draft.set_combine_mode(SideKind::Inclusion, CombineMode::All);

    let lists_before = draft.query.inclusion.keyword_lists();
    draft.set_mode(EditorMode::Advanced);
    draft.set_mode(EditorMode::Basic);

    assert_eq!(draft.query.inclusion.keyword_lists(), lists_before);
    assert_eq!(draft.query.inclusion.combine_mode, CombineMode::All);
}

/// Edits typed in advanced mode replace the structured groups on the
/// way back to basic mode.
#[test]
fn test_advanced_edits_flow_back_to_groups() {
    let mut draft = complete_draft("Rewrite", &["bitcoin"]);
    draft.set_mode(EditorMode::Advanced);
    assert_eq!(draft.query.advanced_text, "(\"bitcoin\")");

    draft.set_advanced_text("(\"ethereum\" OR \"eth\") AND NOT (\"scam\")");
    draft.set_mode(EditorMode::Basic);

    assert_eq!(
        draft.query.inclusion.keyword_lists(),
        vec![vec!["ethereum".to_string(), "eth".to_string()]]
    );
    assert_eq!(
        draft.query.exclusion.keyword_lists(),
        vec![vec!["scam".to_string()]]
    );
}
