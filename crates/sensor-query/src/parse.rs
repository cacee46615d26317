//! Best-effort parsing of a boolean expression back into keyword sides.
//!
//! The parser is a coarse whitespace tokenizer, not a precedence-correct
//! grammar. Terms between a `(` and the matching `)` land in one group,
//! `AND`/`OR` between groups start a new one, and `NOT` switches all
//! following groups to the exclusion side. Malformed input degrades to
//! best-effort grouping rather than failing.
//!
//! Combine modes are inferred from the raw text with a literal substring
//! check (`" AND "` for inclusion, `" AND NOT "` for exclusion). The check
//! is deliberately coarse and can misread expressions that mix `AND` and
//! `OR` between `NOT` groups; callers that need a faithful round trip must
//! feed the parser strings produced by [`crate::render`].

use crate::types::{CombineMode, KeywordGroup, KeywordSide, SideKind};

/// The structured sides recovered from a boolean expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuery {
    pub inclusion: KeywordSide,
    pub exclusion: KeywordSide,
}

/// Parse a boolean expression into inclusion and exclusion sides.
///
/// Never fails. An empty or blank string yields one empty group per side,
/// the same shape a fresh editor starts with.
pub fn parse(text: &str) -> ParsedQuery {
    let mut inclusion_groups: Vec<KeywordGroup> = Vec::new();
    let mut exclusion_groups: Vec<KeywordGroup> = Vec::new();
    let mut buffer: Vec<String> = Vec::new();
    let mut side = SideKind::Inclusion;
    let mut in_group = false;

    for token in text.split_whitespace() {
        if token.eq_ignore_ascii_case("not") {
            flush(&mut buffer, &mut inclusion_groups, &mut exclusion_groups, side);
            side = SideKind::Exclusion;
            continue;
        }
        if token.eq_ignore_ascii_case("and") || token.eq_ignore_ascii_case("or") {
            // Inside parentheses the operator separates terms of one
            // group; outside it separates sibling groups.
            if !in_group {
                flush(&mut buffer, &mut inclusion_groups, &mut exclusion_groups, side);
            }
            continue;
        }
        if token.starts_with('(') {
            in_group = true;
        }
        let closes_group = token.ends_with(')');
        if let Some(term) = clean_token(token) {
            buffer.push(term);
        }
        if closes_group {
            flush(&mut buffer, &mut inclusion_groups, &mut exclusion_groups, side);
            in_group = false;
        }
    }
    flush(&mut buffer, &mut inclusion_groups, &mut exclusion_groups, side);

    ParsedQuery {
        inclusion: KeywordSide::from_groups(inclusion_groups, infer_inclusion_mode(text)),
        exclusion: KeywordSide::from_groups(exclusion_groups, infer_exclusion_mode(text)),
    }
}

/// Inclusion groups are assumed AND-joined when the literal `" AND "`
/// appears anywhere in the raw text.
fn infer_inclusion_mode(text: &str) -> CombineMode {
    if text.contains(" AND ") {
        CombineMode::All
    } else {
        CombineMode::Any
    }
}

/// Exclusion groups are assumed AND-joined when the literal `" AND NOT "`
/// appears anywhere in the raw text.
fn infer_exclusion_mode(text: &str) -> CombineMode {
    if text.contains(" AND NOT ") {
        CombineMode::All
    } else {
        CombineMode::Any
    }
}

fn flush(
    buffer: &mut Vec<String>,
    inclusion: &mut Vec<KeywordGroup>,
    exclusion: &mut Vec<KeywordGroup>,
    side: SideKind,
) {
    if buffer.is_empty() {
        return;
    }
    let group = KeywordGroup::with_keywords(std::mem::take(buffer));
    match side {
        SideKind::Inclusion => inclusion.push(group),
        SideKind::Exclusion => exclusion.push(group),
    }
}

/// Strip one leading `(`, one leading `"`, one trailing `)` and one
/// trailing `"`, then lowercase. Returns None for tokens that were pure
/// punctuation.
fn clean_token(token: &str) -> Option<String> {
    let token = token.strip_prefix('(').unwrap_or(token);
    let token = token.strip_prefix('"').unwrap_or(token);
    let token = token.strip_suffix(')').unwrap_or(token);
    let token = token.strip_suffix('"').unwrap_or(token);
    let term = token.to_lowercase();
    if term.is_empty() {
        None
    } else {
        Some(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_string_yields_fresh_sides() {
        let parsed = parse("");
        assert_eq!(parsed.inclusion.groups.len(), 1);
        assert!(parsed.inclusion.groups[0].is_empty());
        assert_eq!(parsed.inclusion.combine_mode, CombineMode::Any);
        assert_eq!(parsed.exclusion.groups.len(), 1);
        assert!(parsed.exclusion.groups[0].is_empty());
        assert_eq!(parsed.exclusion.combine_mode, CombineMode::Any);
    }

    #[test]
    fn test_parse_full_expression() {
        let parsed = parse("(\"bitcoin\" OR \"btc\") AND (\"regulation\") AND NOT (\"spam\")");
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
        assert_eq!(parsed.inclusion.combine_mode, CombineMode::All);
        assert_eq!(parsed.exclusion.combine_mode, CombineMode::All);
    }

    #[test]
    fn test_parse_or_inside_group_keeps_terms_together() {
        let parsed = parse("(\"solar\" OR \"wind\" OR \"hydro\")");
        assert_eq!(
            parsed.inclusion.keyword_lists(),
            vec![vec![
                "solar".to_string(),
                "wind".to_string(),
                "hydro".to_string(),
            ]]
        );
        assert_eq!(parsed.inclusion.combine_mode, CombineMode::Any);
    }

    #[test]
    fn test_parse_bare_words_split_on_operators() {
        let parsed = parse("bitcoin AND ethereum");
        assert_eq!(
            parsed.inclusion.keyword_lists(),
            vec![vec!["bitcoin".to_string()], vec!["ethereum".to_string()]]
        );
        assert_eq!(parsed.inclusion.combine_mode, CombineMode::All);
    }

    #[test]
    fn test_parse_not_switches_to_exclusion() {
        let parsed = parse("NOT (\"spam\")");
        assert!(!parsed.inclusion.has_keywords());
        assert_eq!(
            parsed.exclusion.keyword_lists(),
            vec![vec!["spam".to_string()]]
        );
    }

    #[test]
    fn test_parse_operators_match_case_insensitively() {
        let parsed = parse("(\"a\") and not (\"b\")");
        assert_eq!(parsed.inclusion.keyword_lists(), vec![vec!["a".to_string()]]);
        assert_eq!(parsed.exclusion.keyword_lists(), vec![vec!["b".to_string()]]);
    }

    #[test]
    fn test_parse_mode_heuristic_is_case_sensitive() {
        // The operator walk accepts lowercase, the mode heuristic does not.
        let parsed = parse("(\"a\") and (\"b\")");
        assert_eq!(parsed.inclusion.combine_mode, CombineMode::Any);
        let parsed = parse("(\"a\") AND (\"b\")");
        assert_eq!(parsed.inclusion.combine_mode, CombineMode::All);
    }

    #[test]
    fn test_parse_exclusion_mode_follows_and_not_literal() {
        // Mixed joins between NOT groups are misread: the literal
        // " AND NOT " wins even though the second join is OR.
        let parsed = parse("(\"x\") AND NOT (\"a\") OR NOT (\"b\")");
        assert_eq!(parsed.exclusion.combine_mode, CombineMode::All);
        assert_eq!(
            parsed.exclusion.keyword_lists(),
            vec![vec!["a".to_string()], vec!["b".to_string()]]
        );
    }

    #[test]
    fn test_parse_lowercases_terms() {
        let parsed = parse("(\"Bitcoin\" OR \"BTC\")");
        assert_eq!(
            parsed.inclusion.keyword_lists(),
            vec![vec!["bitcoin".to_string(), "btc".to_string()]]
        );
    }

    #[test]
    fn test_parse_dedups_within_group() {
        let parsed = parse("(\"btc\" OR \"BTC\")");
        assert_eq!(
            parsed.inclusion.keyword_lists(),
            vec![vec!["btc".to_string()]]
        );
    }

    #[test]
    fn test_parse_malformed_input_degrades() {
        let parsed = parse("(((\"a broken");
        assert_eq!(parsed.inclusion.non_empty_groups().count(), 1);
        assert_eq!(parsed.inclusion.groups[0].keywords.len(), 2);
    }

    #[test]
    fn test_clean_token_strips_one_layer() {
        assert_eq!(clean_token("(\"bitcoin\""), Some("bitcoin".to_string()));
        assert_eq!(clean_token("\"btc\")"), Some("btc".to_string()));
        assert_eq!(clean_token("(\"spam\")"), Some("spam".to_string()));
        assert_eq!(clean_token("plain"), Some("plain".to_string()));
        assert_eq!(clean_token("(\""), None);
    }
}
