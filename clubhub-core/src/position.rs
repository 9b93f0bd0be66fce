//! Position classification for roster grouping.
//!
//! Profile titles are free text ("QB/WR", "DB・STAFF", "Kicker"). Grouping
//! needs a total mapping into a fixed bucket list, so everything unrecognized
//! lands in `Others` — never "no bucket".

use std::fmt;

use serde::{Deserialize, Serialize};

/// Delimiters seen in profile titles listing more than one position.
const DELIMITERS: [char; 5] = ['/', '／', ',', '、', '・'];

/// Canonical roster buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    OL,
    QB,
    RB,
    WR,
    TE,
    DL,
    LB,
    DB,
    Trainer,
    Staff,
    Others,
}

impl Position {
    /// Display order for grouped rosters: offense, defense, staff, then the
    /// catch-all last.
    pub const ORDER: [Position; 11] = [
        Position::OL,
        Position::QB,
        Position::RB,
        Position::WR,
        Position::TE,
        Position::DL,
        Position::LB,
        Position::DB,
        Position::Trainer,
        Position::Staff,
        Position::Others,
    ];

    /// Map a free-text position title into its canonical bucket.
    ///
    /// Splits on the delimiter set, takes the first non-empty segment, and
    /// uppercases it. Total: every input maps to exactly one bucket.
    pub fn classify(text: &str) -> Position {
        text.split(&DELIMITERS[..])
            .map(str::trim)
            .find(|segment| !segment.is_empty())
            .map(|segment| Self::from_code(&segment.to_uppercase()))
            .unwrap_or(Position::Others)
    }

    fn from_code(code: &str) -> Position {
        match code {
            "OL" => Position::OL,
            "QB" => Position::QB,
            "RB" => Position::RB,
            "WR" => Position::WR,
            "TE" => Position::TE,
            "DL" => Position::DL,
            "LB" => Position::LB,
            "DB" => Position::DB,
            "TRAINER" => Position::Trainer,
            "STAFF" => Position::Staff,
            _ => Position::Others,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::OL => "OL",
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::DL => "DL",
            Position::LB => "LB",
            Position::DB => "DB",
            Position::Trainer => "TRAINER",
            Position::Staff => "STAFF",
            Position::Others => "OTHERS",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_segment_decides_the_bucket() {
        assert_eq!(Position::classify("QB/WR"), Position::QB);
        assert_eq!(Position::classify("DB・STAFF"), Position::DB);
        assert_eq!(Position::classify("WR、DB"), Position::WR);
        assert_eq!(Position::classify("TE,LB"), Position::TE);
    }

    #[test]
    fn empty_and_unknown_fall_into_others() {
        assert_eq!(Position::classify(""), Position::Others);
        assert_eq!(Position::classify("   "), Position::Others);
        assert_eq!(Position::classify("Kicker"), Position::Others);
        assert_eq!(Position::classify("HC"), Position::Others);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(Position::classify("qb"), Position::QB);
        assert_eq!(Position::classify("trainer"), Position::Trainer);
        assert_eq!(Position::classify("Staff"), Position::Staff);
    }

    #[test]
    fn leading_delimiters_and_whitespace_are_skipped() {
        assert_eq!(Position::classify("／WR"), Position::WR);
        assert_eq!(Position::classify(" / OL , QB"), Position::OL);
    }

    #[test]
    fn others_is_last_in_display_order() {
        assert_eq!(Position::ORDER.last(), Some(&Position::Others));
        assert_eq!(Position::ORDER.len(), 11);
    }
}
