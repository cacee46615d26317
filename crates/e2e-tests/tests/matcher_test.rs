//! End-to-end filter preview over the sample mention corpus.

use pretty_assertions::assert_eq;

use e2e_tests::{complete_draft, sample_mentions};
use sensor_query::{CombineMode, EditorMode, SideKind};

fn matched_ids(draft: &sensor_topics::TopicDraft) -> Vec<String> {
    draft.preview(&sample_mentions()).matched_mentions
}

/// One OR-group of tracked terms picks up every mention naming either.
#[test]
fn test_single_group_matches_across_corpus() {
    let draft = complete_draft("Bitcoin Monitor", &["bitcoin", "btc"]);
    assert_eq!(
        matched_ids(&draft),
        vec!["m1", "m2", "m3", "m4", "m5", "m8", "m10"]
    );
}

/// An exclusion group prunes giveaway and airdrop bait from the stream.
#[test]
fn test_exclusion_group_prunes_bait() {
    let mut draft = complete_draft("Bitcoin Monitor", &["bitcoin", "btc"]);
    let e1 = draft.query.exclusion.groups[0].id.clone();
    draft.add_keyword(SideKind::Exclusion, &e1, "giveaway");
    draft.add_keyword(SideKind::Exclusion, &e1, "airdrop");

    assert_eq!(matched_ids(&draft), vec!["m1", "m2", "m3", "m8", "m10"]);
}

/// Requiring a second AND-joined group narrows the stream to mentions
/// carrying both themes.
#[test]
fn test_all_mode_requires_both_groups() {
    let mut draft = complete_draft("Bitcoin Regulation", &["bitcoin", "btc"]);
    let g2 = draft.add_group(SideKind::Inclusion);
    draft.add_keyword(SideKind::Inclusion, &g2, "regulation");
    draft.set_combine_mode(SideKind::Inclusion, CombineMode::All);

    assert_eq!(matched_ids(&draft), vec!["m2", "m8"]);
}

/// The same filter typed as an advanced expression behaves identically.
#[test]
fn test_advanced_expression_drives_preview() {
    let mut draft = complete_draft("Advanced", &["placeholder"]);
    draft.set_mode(EditorMode::Advanced);
    draft.set_advanced_text("(\"bitcoin\" OR \"btc\") AND NOT (\"giveaway\" OR \"airdrop\")");

    let preview = draft.preview(&sample_mentions());
    assert_eq!(
        preview.matched_mentions,
        vec!["m1", "m2", "m3", "m8", "m10"]
    );
    assert_eq!(
        preview.expression(),
        "(\"bitcoin\" OR \"btc\") AND NOT (\"giveaway\" OR \"airdrop\")"
    );
    assert_eq!(preview.summary.inclusion_groups, 1);
    assert_eq!(preview.summary.exclusion_terms, 2);
}

/// A draft with no keywords previews an empty stream rather than the
/// whole corpus.
#[test]
fn test_empty_query_matches_nothing() {
    let draft = complete_draft("Empty", &[]);
    assert!(matched_ids(&draft).is_empty());
    assert_eq!(draft.preview(&sample_mentions()).expression(), "");
}
