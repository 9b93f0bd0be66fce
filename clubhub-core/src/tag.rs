//! Event tag classification.
//!
//! Tags are inferred from the event title by an ordered rule table with
//! first-match-wins semantics. Order is policy: a pathological title can match
//! more than one pattern, and practice/game must take precedence over the
//! broader event/meeting markers.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::HubError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventTag {
    Practice,
    Game,
    Event,
    Meeting,
    Unknown,
}

impl EventTag {
    pub const ALL: [EventTag; 5] = [
        EventTag::Practice,
        EventTag::Game,
        EventTag::Event,
        EventTag::Meeting,
        EventTag::Unknown,
    ];
}

/// Ordered classification rules. Titles carry a hash marker, fullwidth or
/// ASCII, e.g. "＃練習" or "#game-day BBQ #event".
static RULES: LazyLock<Vec<(Regex, EventTag)>> = LazyLock::new(|| {
    vec![
        (Regex::new(r"[＃#]練習").unwrap(), EventTag::Practice),
        (Regex::new(r"[＃#]試合").unwrap(), EventTag::Game),
        (Regex::new(r"(?i)[＃#](?:イベント|event)").unwrap(), EventTag::Event),
        (Regex::new(r"(?i)[＃#](?:ミーティング|meeting|mtg)").unwrap(), EventTag::Meeting),
    ]
});

static IGNORE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)[＃#]ignore$").unwrap());

/// Classify a title. The first matching rule wins; no match is `Unknown`.
pub fn tag(title: &str) -> EventTag {
    RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(title))
        .map(|(_, tag)| *tag)
        .unwrap_or(EventTag::Unknown)
}

/// Titles ending with the ignore marker are excluded from listings by the
/// row-level consumer.
pub fn is_ignored(title: &str) -> bool {
    IGNORE.is_match(title)
}

impl fmt::Display for EventTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Practice => "practice",
            Self::Game => "game",
            Self::Event => "event",
            Self::Meeting => "meeting",
            Self::Unknown => "unknown",
        };
        write!(f, "{s}")
    }
}

impl FromStr for EventTag {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "practice" => Ok(Self::Practice),
            "game" => Ok(Self::Game),
            "event" => Ok(Self::Event),
            "meeting" => Ok(Self::Meeting),
            "unknown" => Ok(Self::Unknown),
            other => Err(HubError::UnknownTag(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_classify_each_tag() {
        assert_eq!(tag("＃練習 walkthrough"), EventTag::Practice);
        assert_eq!(tag("vs Bears #試合"), EventTag::Game);
        assert_eq!(tag("BBQ ＃イベント"), EventTag::Event);
        assert_eq!(tag("season kickoff #EVENT"), EventTag::Event);
        assert_eq!(tag("coaches #mtg"), EventTag::Meeting);
        assert_eq!(tag("#ミーティング 月例"), EventTag::Meeting);
    }

    #[test]
    fn no_marker_is_unknown() {
        assert_eq!(tag("練習"), EventTag::Unknown);
        assert_eq!(tag("regular catch-up"), EventTag::Unknown);
        assert_eq!(tag(""), EventTag::Unknown);
    }

    #[test]
    fn earlier_rule_wins_on_ambiguous_titles() {
        // Both the practice and meeting patterns match; practice is first.
        assert_eq!(tag("＃練習 のあとで #meeting"), EventTag::Practice);
        assert_eq!(tag("#試合 review #mtg"), EventTag::Game);
    }

    #[test]
    fn ignore_marker_must_end_the_title() {
        assert!(is_ignored("staff only ＃ignore"));
        assert!(is_ignored("staff only #IGNORE"));
        assert!(!is_ignored("#ignore this one not"));
        assert!(!is_ignored("＃練習"));
    }

    #[test]
    fn fullwidth_and_ascii_hashes_are_equivalent() {
        assert_eq!(tag("#練習"), EventTag::Practice);
        assert_eq!(tag("＃試合"), EventTag::Game);
    }
}
