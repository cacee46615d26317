//! Shared fixtures for SENSOR end-to-end tests.
//!
//! Provides a deterministic cross-channel mention corpus and draft
//! builders used by the scenario tests.

use chrono::{DateTime, TimeZone, Utc};

use sensor_query::SideKind;
use sensor_topics::TopicDraft;
use sensor_types::{Channel, Mention};

/// Fixed base time so fixture mentions are deterministic.
fn fixture_time(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 9, minute, 0).unwrap()
}

/// Build one fixture mention.
pub fn mention(
    id: &str,
    channel: Channel,
    author: &str,
    text: &str,
    minute: u32,
    engagement: u64,
) -> Mention {
    Mention::new(
        id.to_string(),
        channel,
        author.to_string(),
        text.to_string(),
        fixture_time(minute),
    )
    .with_engagement(engagement)
}

/// A small cross-channel corpus themed around crypto chatter.
///
/// Ids are stable (`m1`..`m10`) so tests can assert exact match sets.
pub fn sample_mentions() -> Vec<Mention> {
    vec![
        mention(
            "m1",
            Channel::Twitter,
            "marketwatcher",
            "Bitcoin breaks above 80k as ETF inflows accelerate",
            0,
            4200,
        ),
        mention(
            "m2",
            Channel::News,
            "coindesk",
            "New bitcoin regulation package clears committee vote",
            3,
            1800,
        ),
        mention(
            "m3",
            Channel::Reddit,
            "hodler99",
            "BTC mining difficulty hits another record high",
            7,
            950,
        ),
        mention(
            "m4",
            Channel::Twitter,
            "freecoins4u",
            "Huge bitcoin giveaway, claim your free BTC now",
            9,
            120,
        ),
        mention(
            "m5",
            Channel::Forums,
            "skeptic",
            "Is this btc airdrop a scam or legit?",
            14,
            45,
        ),
        mention(
            "m6",
            Channel::News,
            "reuters",
            "Ethereum upgrade ships on schedule",
            18,
            2300,
        ),
        mention(
            "m7",
            Channel::Blogs,
            "finblog",
            "Regulation outlook for crypto exchanges in the EU",
            22,
            310,
        ),
        mention(
            "m8",
            Channel::Youtube,
            "cryptodaily",
            "Bitcoin and regulation: what the new rules mean for miners",
            26,
            5100,
        ),
        mention(
            "m9",
            Channel::Tiktok,
            "memecoins",
            "dogecoin to the moon, again",
            31,
            9000,
        ),
        mention(
            "m10",
            Channel::Instagram,
            "influencer",
            "My bitcoin portfolio update, not financial advice",
            35,
            780,
        ),
    ]
}

/// A draft that passes validation: named, two channels ticked, and the
/// given keywords in the first inclusion group.
pub fn complete_draft(name: &str, keywords: &[&str]) -> TopicDraft {
    let mut draft = TopicDraft::new();
    draft.name = name.to_string();
    draft.toggle_channel(Channel::Twitter);
    draft.toggle_channel(Channel::News);
    let group_id = draft.query.inclusion.groups[0].id.clone();
    for keyword in keywords {
        draft.add_keyword(SideKind::Inclusion, &group_id, keyword);
    }
    draft
}
