//! Terminal rendering for hub types.
//!
//! Extension traits that add colored terminal output to clubhub-core types
//! using owo_colors, plus date/time labels for the backend's epoch-millis
//! timestamps.

use chrono::{DateTime, Local, Utc};
use owo_colors::OwoColorize;

use clubhub_core::event::{Participation, ParticipationType};
use clubhub_core::member::{Member, MemberStatus};
use clubhub_core::tag::EventTag;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventTag {
    fn render(&self) -> String {
        match self {
            EventTag::Practice => "practice".green().to_string(),
            EventTag::Game => "game".red().bold().to_string(),
            EventTag::Event => "event".cyan().to_string(),
            EventTag::Meeting => "meeting".yellow().to_string(),
            EventTag::Unknown => "-".dimmed().to_string(),
        }
    }
}

impl Render for MemberStatus {
    fn render(&self) -> String {
        match self {
            MemberStatus::Active => "active".green().to_string(),
            MemberStatus::Limited => "limited".yellow().to_string(),
            MemberStatus::Inactive => "inactive".dimmed().to_string(),
            MemberStatus::Deleted => "deleted".red().to_string(),
        }
    }
}

impl Render for ParticipationType {
    fn render(&self) -> String {
        match self {
            ParticipationType::Join => "join".green().to_string(),
            ParticipationType::JoinLate => "late".yellow().to_string(),
            ParticipationType::LeaveEarly => "early".yellow().to_string(),
            ParticipationType::Absent => "absent".red().to_string(),
        }
    }
}

impl Render for Participation {
    fn render(&self) -> String {
        let time = self.params.as_ref().and_then(|p| p.time.as_deref());
        match time {
            Some(t) if self.kind.requires_time() => {
                format!("{} {}", self.kind.render(), format!("~{t}").dimmed())
            }
            _ => self.kind.render(),
        }
    }
}

/// Red-bordered style in the original UI; a red badge here.
pub fn unanswered_badge() -> String {
    "unanswered".red().to_string()
}

/// One roster line: name, number, status badge, position title.
pub fn member_line(member: &Member) -> String {
    let number = match member.number {
        Some(n) => format!("#{n:<3}"),
        None => "    ".to_string(),
    };
    let title = member.position_title();
    format!(
        "{} {:<20} {:<10} {}",
        number.bold(),
        member.name(),
        member.status.render(),
        title.dimmed()
    )
}

/// "Today" / "Tomorrow" / "Sat Aug 8" label for an epoch-millis timestamp.
pub fn format_date_label(millis: i64) -> String {
    let today = Local::now().date_naive();
    let date = to_local(millis).date_naive();

    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}

/// Local wall-clock time for an epoch-millis timestamp, e.g. "19:00".
pub fn format_time(millis: i64) -> String {
    to_local(millis).format("%H:%M").to_string()
}

fn to_local(millis: i64) -> DateTime<Local> {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .unwrap_or(DateTime::UNIX_EPOCH)
        .with_timezone(&Local)
}
