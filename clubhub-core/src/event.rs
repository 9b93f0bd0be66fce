//! Wire models for team events and RSVP answers.
//!
//! Events come from the hub backend exactly as its calendar sync stored them.
//! The per-member answer map is double-encoded: the backend keeps it as a JSON
//! string inside the event record and returns that string verbatim.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{HubError, HubResult};
use crate::tag::{self, EventTag};

/// A scheduled team event as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub google: GoogleEvent,

    #[serde(default)]
    pub participations_json_str: String,
}

/// The calendar-sourced part of an event. Immutable from the client's
/// perspective except for deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleEvent {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub location: String,
    /// Epoch milliseconds.
    pub start_time: i64,
    /// Epoch milliseconds. Zero when the source event carries no end.
    #[serde(default)]
    pub end_time: i64,
}

/// Per-member answers keyed by member id. At most one entry per member;
/// a missing key means "unanswered", which is distinct from `absent`.
pub type Participations = BTreeMap<String, Participation>;

/// One member's answer for one event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participation {
    #[serde(rename = "type")]
    pub kind: ParticipationType,

    #[serde(default)]
    pub params: Option<AnswerParams>,

    // Legacy denormalized display fields. Old entries carry these; current
    // rendering resolves display data through the member directory instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

/// Optional answer parameters. The only meaningful key today is a clock time
/// ("18:30"), attached to late-join and early-leave answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipationType {
    Join,
    JoinLate,
    LeaveEarly,
    Absent,
}

impl ParticipationType {
    /// Whether this answer counts as attendance in any form.
    pub fn joins_anyhow(&self) -> bool {
        matches!(self, Self::Join | Self::JoinLate | Self::LeaveEarly)
    }

    /// Late-join and early-leave answers carry a clock time.
    pub fn requires_time(&self) -> bool {
        matches!(self, Self::JoinLate | Self::LeaveEarly)
    }
}

impl fmt::Display for ParticipationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Join => "join",
            Self::JoinLate => "join_late",
            Self::LeaveEarly => "leave_early",
            Self::Absent => "absent",
        };
        write!(f, "{s}")
    }
}

impl FromStr for ParticipationType {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "join" => Ok(Self::Join),
            "join_late" => Ok(Self::JoinLate),
            "leave_early" => Ok(Self::LeaveEarly),
            "absent" => Ok(Self::Absent),
            other => Err(HubError::UnknownAnswer(other.to_string())),
        }
    }
}

impl Event {
    /// Decode the embedded answer map. An empty or missing string is an empty
    /// map, not an error.
    pub fn participations(&self) -> HubResult<Participations> {
        if self.participations_json_str.trim().is_empty() {
            return Ok(Participations::new());
        }
        Ok(serde_json::from_str(&self.participations_json_str)?)
    }

    pub fn start(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.google.start_time).unwrap_or(DateTime::UNIX_EPOCH)
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        if self.google.end_time == 0 {
            return None;
        }
        DateTime::from_timestamp_millis(self.google.end_time)
    }

    /// Answers close once the event has started. This is a wall-clock policy
    /// evaluated at render/submit time, not a server-enforced invariant.
    pub fn accepts_rsvp(&self, now: DateTime<Utc>) -> bool {
        self.start() > now
    }

    pub fn tag(&self) -> EventTag {
        tag::tag(&self.google.title)
    }

    /// Events carrying the ignore marker are skipped by listing consumers.
    /// The aggregator itself never filters.
    pub fn is_ignored(&self) -> bool {
        tag::is_ignored(&self.google.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event(title: &str, start_time: i64, pats: &str) -> Event {
        Event {
            google: GoogleEvent {
                id: "ev1".to_string(),
                title: title.to_string(),
                location: String::new(),
                start_time,
                end_time: 0,
            },
            participations_json_str: pats.to_string(),
        }
    }

    #[test]
    fn empty_participation_string_is_empty_map() {
        let ev = event("＃練習", 0, "");
        assert!(ev.participations().unwrap().is_empty());
    }

    #[test]
    fn participations_decode_from_embedded_json() {
        let ev = event(
            "＃練習",
            0,
            r#"{"U01":{"type":"join_late","params":{"time":"19:00"}},"U02":{"type":"absent","params":null}}"#,
        );
        let pats = ev.participations().unwrap();
        assert_eq!(pats.len(), 2);
        assert_eq!(pats["U01"].kind, ParticipationType::JoinLate);
        assert_eq!(pats["U01"].params.as_ref().unwrap().time.as_deref(), Some("19:00"));
        assert_eq!(pats["U02"].kind, ParticipationType::Absent);
        assert!(pats["U02"].params.is_none());
    }

    #[test]
    fn legacy_entries_keep_denormalized_fields() {
        let ev = event(
            "＃試合",
            0,
            r#"{"U01":{"type":"join","params":null,"name":"Taro","title":"QB/WR","picture":"https://img"}}"#,
        );
        let pats = ev.participations().unwrap();
        assert_eq!(pats["U01"].title.as_deref(), Some("QB/WR"));
        assert_eq!(pats["U01"].name.as_deref(), Some("Taro"));
    }

    #[test]
    fn malformed_participation_string_is_an_error() {
        let ev = event("x", 0, "{not json");
        assert!(ev.participations().is_err());
    }

    #[test]
    fn past_events_do_not_accept_answers() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let past = event("x", now.timestamp_millis() - 1, "");
        let future = event("x", now.timestamp_millis() + 60_000, "");
        assert!(!past.accepts_rsvp(now));
        assert!(future.accepts_rsvp(now));
    }

    #[test]
    fn answer_type_predicates() {
        assert!(ParticipationType::Join.joins_anyhow());
        assert!(ParticipationType::JoinLate.joins_anyhow());
        assert!(ParticipationType::LeaveEarly.joins_anyhow());
        assert!(!ParticipationType::Absent.joins_anyhow());

        assert!(ParticipationType::JoinLate.requires_time());
        assert!(ParticipationType::LeaveEarly.requires_time());
        assert!(!ParticipationType::Join.requires_time());
        assert!(!ParticipationType::Absent.requires_time());
    }

    #[test]
    fn answer_type_parses_wire_names() {
        assert_eq!("join".parse::<ParticipationType>().unwrap(), ParticipationType::Join);
        assert_eq!(
            "leave_early".parse::<ParticipationType>().unwrap(),
            ParticipationType::LeaveEarly
        );
        assert!("yes".parse::<ParticipationType>().is_err());
    }
}
