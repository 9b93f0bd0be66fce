//! Event participation aggregation.
//!
//! Turns a sparse per-member answer map and the full roster into attendance
//! rosters: answered-yes, answered-no, and the unanswered complement,
//! optionally grouped by canonical position. The aggregator never filters
//! events; the ignore marker is the listing consumer's job.

use log::warn;

use crate::directory::{MemberDirectory, MemberSource};
use crate::event::{Participation, Participations};
use crate::member::Member;
use crate::position::Position;

/// One answered entry annotated with the member resolved from the directory.
/// `member` is `None` while the directory has not yet seen that id.
#[derive(Debug, Clone)]
pub struct Attendance {
    pub member_id: String,
    pub entry: Participation,
    pub member: Option<Member>,
}

impl Attendance {
    /// Position title used for grouping: the entry's own recorded title wins,
    /// else the resolved member's profile title.
    pub fn position_title(&self) -> Option<&str> {
        if let Some(title) = self.entry.title.as_deref().filter(|t| !t.is_empty()) {
            return Some(title);
        }
        self.member.as_ref().map(|m| m.position_title())
    }
}

/// yes / no / unanswered partition of a roster for one event.
///
/// By member identity, `yes ∪ no ∪ unanswered` equals the roster and the
/// three sets are pairwise disjoint. An `absent` answer is an answer: those
/// members are in `no`, never in `unanswered`.
#[derive(Debug, Clone, Default)]
pub struct EventSummary {
    pub yes: Vec<Attendance>,
    pub no: Vec<Attendance>,
    pub unanswered: Vec<Member>,
}

pub fn summarize<S: MemberSource>(
    participations: &Participations,
    roster: &[Member],
    directory: &MemberDirectory<S>,
) -> EventSummary {
    let mut summary = EventSummary::default();

    for (id, entry) in participations {
        let attendance = Attendance {
            member_id: id.clone(),
            entry: entry.clone(),
            member: directory.pick(id).cloned(),
        };
        if entry.kind.joins_anyhow() {
            summary.yes.push(attendance);
        } else {
            summary.no.push(attendance);
        }
    }

    summary.unanswered = roster
        .iter()
        .filter(|m| !participations.contains_key(m.id()))
        .cloned()
        .collect();

    summary
}

/// Group answered entries by canonical position, in `Position::ORDER` with
/// empty groups dropped. Input order is preserved within a group. Entries
/// whose member is not yet resolved are logged and skipped, never fatal.
pub fn group_by_position(entries: &[Attendance]) -> Vec<(Position, Vec<Attendance>)> {
    let mut groups: Vec<(Position, Vec<Attendance>)> =
        Position::ORDER.iter().map(|p| (*p, Vec::new())).collect();

    for attendance in entries {
        if attendance.member.is_none() {
            warn!(
                "member {} not resolved in directory, skipping in position grouping",
                attendance.member_id
            );
            continue;
        }
        let position = attendance
            .position_title()
            .map(Position::classify)
            .unwrap_or(Position::Others);
        if let Some((_, bucket)) = groups.iter_mut().find(|(p, _)| *p == position) {
            bucket.push(attendance.clone());
        }
    }

    groups.retain(|(_, bucket)| !bucket.is_empty());
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{MemberDirectory, MemberSource};
    use crate::error::HubResult;
    use crate::event::{AnswerParams, Participation, ParticipationType};
    use crate::member::{MemberStatus, SlackProfile, SlackUser};
    use std::collections::BTreeMap;

    fn member(id: &str, title: &str) -> Member {
        Member {
            slack: SlackUser {
                id: id.to_string(),
                name: None,
                real_name: Some(format!("Member {id}")),
                profile: SlackProfile {
                    title: title.to_string(),
                    ..Default::default()
                },
                is_admin: false,
                deleted: false,
            },
            number: None,
            status: MemberStatus::Active,
            team: None,
        }
    }

    fn entry(kind: ParticipationType) -> Participation {
        Participation {
            kind,
            params: None,
            name: None,
            title: None,
            picture: None,
        }
    }

    struct RosterSource(Vec<Member>);

    impl MemberSource for RosterSource {
        async fn fetch_member(&self, id: &str) -> HubResult<Member> {
            Ok(self
                .0
                .iter()
                .find(|m| m.id() == id)
                .cloned()
                .unwrap_or_else(|| member(id, "")))
        }

        async fn fetch_members(&self, _cached: bool) -> HubResult<Vec<Member>> {
            Ok(self.0.clone())
        }
    }

    async fn warm_directory(roster: &[Member]) -> MemberDirectory<RosterSource> {
        let mut dir = MemberDirectory::new(RosterSource(roster.to_vec()));
        dir.list(true).await.unwrap();
        dir
    }

    #[tokio::test]
    async fn one_join_one_absent_one_silent() {
        let roster = vec![member("U01", "QB"), member("U02", "OL"), member("U03", "DB")];
        let mut pats: Participations = BTreeMap::new();
        pats.insert("U01".to_string(), entry(ParticipationType::Join));
        pats.insert("U02".to_string(), entry(ParticipationType::Absent));

        let dir = warm_directory(&roster).await;
        let summary = summarize(&pats, &roster, &dir);

        assert_eq!(summary.yes.len(), 1);
        assert_eq!(summary.no.len(), 1);
        assert_eq!(summary.unanswered.len(), 1);
        assert_eq!(summary.yes[0].member_id, "U01");
        assert_eq!(summary.no[0].member_id, "U02");
        assert_eq!(summary.unanswered[0].id(), "U03");
    }

    #[tokio::test]
    async fn partition_is_a_disjoint_cover_of_the_roster() {
        let roster: Vec<Member> = (1..=6).map(|i| member(&format!("U{i:02}"), "WR")).collect();
        let mut pats: Participations = BTreeMap::new();
        pats.insert("U01".to_string(), entry(ParticipationType::Join));
        pats.insert("U02".to_string(), entry(ParticipationType::JoinLate));
        pats.insert("U03".to_string(), entry(ParticipationType::LeaveEarly));
        pats.insert("U04".to_string(), entry(ParticipationType::Absent));

        let dir = warm_directory(&roster).await;
        let summary = summarize(&pats, &roster, &dir);

        let mut ids: Vec<&str> = summary
            .yes
            .iter()
            .map(|a| a.member_id.as_str())
            .chain(summary.no.iter().map(|a| a.member_id.as_str()))
            .chain(summary.unanswered.iter().map(|m| m.id()))
            .collect();
        ids.sort();
        let mut expected: Vec<String> = roster.iter().map(|m| m.id().to_string()).collect();
        expected.sort();

        assert_eq!(ids.len(), roster.len());
        assert_eq!(ids, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn absent_members_are_never_unanswered() {
        let roster = vec![member("U01", "")];
        let mut pats: Participations = BTreeMap::new();
        pats.insert("U01".to_string(), entry(ParticipationType::Absent));

        let dir = warm_directory(&roster).await;
        let summary = summarize(&pats, &roster, &dir);

        assert!(summary.unanswered.is_empty());
        assert_eq!(summary.no.len(), 1);
    }

    #[tokio::test]
    async fn late_and_early_answers_count_as_yes() {
        let roster = vec![member("U01", ""), member("U02", "")];
        let mut pats: Participations = BTreeMap::new();
        let mut late = entry(ParticipationType::JoinLate);
        late.params = Some(AnswerParams {
            time: Some("19:30".to_string()),
        });
        pats.insert("U01".to_string(), late);
        pats.insert("U02".to_string(), entry(ParticipationType::LeaveEarly));

        let dir = warm_directory(&roster).await;
        let summary = summarize(&pats, &roster, &dir);
        assert_eq!(summary.yes.len(), 2);
        assert!(summary.no.is_empty());
    }

    #[tokio::test]
    async fn grouping_follows_canonical_order_with_others_last() {
        let roster = vec![
            member("U01", "Kicker"),
            member("U02", "QB/WR"),
            member("U03", "OL"),
            member("U04", "DB・STAFF"),
        ];
        let mut pats: Participations = BTreeMap::new();
        for m in &roster {
            pats.insert(m.id().to_string(), entry(ParticipationType::Join));
        }

        let dir = warm_directory(&roster).await;
        let summary = summarize(&pats, &roster, &dir);
        let groups = group_by_position(&summary.yes);

        let order: Vec<Position> = groups.iter().map(|(p, _)| *p).collect();
        assert_eq!(order, vec![Position::OL, Position::QB, Position::DB, Position::Others]);
    }

    #[tokio::test]
    async fn entry_title_wins_over_profile_title() {
        let roster = vec![member("U01", "OL")];
        let mut pats: Participations = BTreeMap::new();
        let mut answered = entry(ParticipationType::Join);
        answered.title = Some("QB".to_string());
        pats.insert("U01".to_string(), answered);

        let dir = warm_directory(&roster).await;
        let summary = summarize(&pats, &roster, &dir);
        let groups = group_by_position(&summary.yes);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, Position::QB);
    }

    #[tokio::test]
    async fn unresolved_members_are_skipped_in_grouping() {
        let roster = vec![member("U01", "QB")];
        let mut pats: Participations = BTreeMap::new();
        pats.insert("U01".to_string(), entry(ParticipationType::Join));
        // Answer from someone the directory has never seen.
        pats.insert("U99".to_string(), entry(ParticipationType::Join));

        let dir = warm_directory(&roster).await;
        let summary = summarize(&pats, &roster, &dir);
        assert_eq!(summary.yes.len(), 2);

        let groups = group_by_position(&summary.yes);
        let total: usize = groups.iter().map(|(_, b)| b.len()).sum();
        assert_eq!(total, 1);
    }

    #[tokio::test]
    async fn empty_profile_title_groups_into_others() {
        let roster = vec![member("U01", "")];
        let mut pats: Participations = BTreeMap::new();
        pats.insert("U01".to_string(), entry(ParticipationType::Join));

        let dir = warm_directory(&roster).await;
        let summary = summarize(&pats, &roster, &dir);
        let groups = group_by_position(&summary.yes);
        // classify("") is total: the entry lands in OTHERS, not nowhere.
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, Position::Others);
        assert_eq!(groups[0].1.len(), 1);
    }
}
