//! Social channels a topic can be scoped to.

use serde::{Deserialize, Serialize};

/// A social-media source the dashboard can monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Twitter,
    Facebook,
    Instagram,
    Reddit,
    Youtube,
    Tiktok,
    News,
    Blogs,
    Forums,
}

impl Channel {
    /// Stable string code for storage and display keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Twitter => "twitter",
            Channel::Facebook => "facebook",
            Channel::Instagram => "instagram",
            Channel::Reddit => "reddit",
            Channel::Youtube => "youtube",
            Channel::Tiktok => "tiktok",
            Channel::News => "news",
            Channel::Blogs => "blogs",
            Channel::Forums => "forums",
        }
    }

    /// Parse from a string code, returning None for unknown channels.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "twitter" => Some(Channel::Twitter),
            "facebook" => Some(Channel::Facebook),
            "instagram" => Some(Channel::Instagram),
            "reddit" => Some(Channel::Reddit),
            "youtube" => Some(Channel::Youtube),
            "tiktok" => Some(Channel::Tiktok),
            "news" => Some(Channel::News),
            "blogs" => Some(Channel::Blogs),
            "forums" => Some(Channel::Forums),
            _ => None,
        }
    }

    /// All supported channels, in the order the channel picker lists them.
    pub fn all() -> &'static [Channel] {
        &[
            Channel::Twitter,
            Channel::Facebook,
            Channel::Instagram,
            Channel::Reddit,
            Channel::Youtube,
            Channel::Tiktok,
            Channel::News,
            Channel::Blogs,
            Channel::Forums,
        ]
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown channel: {}", s))
    }
}
