use anyhow::Result;
use log::warn;
use owo_colors::OwoColorize;

use clubhub_core::directory::MemberDirectory;
use clubhub_core::member::Member;
use clubhub_core::summary::{Attendance, EventSummary, group_by_position, summarize};

use super::create_spinner;
use crate::client::ApiClient;
use crate::render::{Render, format_date_label, format_time};

pub async fn run(
    client: &ApiClient,
    directory: &mut MemberDirectory<&ApiClient>,
    event_id: &str,
    by_position: bool,
) -> Result<()> {
    let spinner = create_spinner("Fetching event");
    let event = client.get_event(event_id).await;
    spinner.finish_and_clear();
    let event = event?;

    // Warm the directory once; everything below resolves through pick.
    let spinner = create_spinner("Fetching roster");
    let roster = directory.list(true).await;
    spinner.finish_and_clear();
    let roster = roster?;

    let participations = match event.participations() {
        Ok(p) => p,
        Err(e) => {
            warn!("event {}: bad participation data: {e}", event.google.id);
            Default::default()
        }
    };
    let summary = summarize(&participations, &roster, directory);

    println!("{}", event.google.title.bold());
    let when = format!(
        "{} {}",
        format_date_label(event.google.start_time),
        format_time(event.google.start_time)
    );
    match event.end() {
        Some(_) => println!("{} ~ {}", when, format_time(event.google.end_time)),
        None => println!("{when}"),
    }
    if !event.google.location.is_empty() {
        println!("{}", event.google.location.dimmed());
    }
    println!();

    render_answered("Going", &summary.yes, by_position);
    println!();
    render_answered("Not going", &summary.no, by_position);
    println!();
    render_unanswered(&summary);

    Ok(())
}

fn render_answered(heading: &str, entries: &[Attendance], by_position: bool) {
    println!("{} {}", heading.bold(), format!("({})", entries.len()).dimmed());

    if by_position {
        for (position, group) in group_by_position(entries) {
            println!("  {}", position.to_string().underline());
            for attendance in group {
                print_attendance(&attendance);
            }
        }
        return;
    }

    // Flat view: sorted by position title, the way the hub's detail page
    // orders its rows.
    let mut sorted: Vec<&Attendance> = entries.iter().collect();
    sorted.sort_by(|a, b| {
        a.position_title()
            .unwrap_or_default()
            .cmp(b.position_title().unwrap_or_default())
    });
    for attendance in sorted {
        print_attendance(attendance);
    }
}

fn print_attendance(attendance: &Attendance) {
    // Current rendering resolves display data through the directory; entries
    // whose member is not yet resolved are logged and skipped, never mixed
    // with the legacy denormalized fields.
    let Some(member) = &attendance.member else {
        warn!("member {} not resolved in directory, skipping row", attendance.member_id);
        return;
    };
    let title = attendance.position_title().unwrap_or_default();
    println!(
        "    {:<20} {:<12} {}",
        member.name(),
        title.dimmed(),
        attendance.entry.render()
    );
}

fn render_unanswered(summary: &EventSummary) {
    println!(
        "{} {}",
        "Unanswered".bold(),
        format!("({})", summary.unanswered.len()).dimmed()
    );
    for member in &summary.unanswered {
        println!("    {:<20} {}", member.name(), annotate(member).dimmed());
    }
}

fn annotate(member: &Member) -> String {
    if member.is_expected_to_rsvp() {
        member.position_title().to_string()
    } else {
        // Limited and dormant members are listed but not chased.
        format!("{} ({})", member.position_title(), member.status)
    }
}
