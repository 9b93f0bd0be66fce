use anyhow::Result;
use chrono::Utc;
use log::warn;
use owo_colors::OwoColorize;

use clubhub_core::event::Event;
use clubhub_core::member::Member;
use clubhub_core::tag::EventTag;

use super::create_spinner;
use crate::client::ApiClient;
use crate::render::{Render, format_date_label, format_time, unanswered_badge};

/// Default listing filter: practice and game rows, like the hub's web view.
const DEFAULT_TAGS: [EventTag; 2] = [EventTag::Practice, EventTag::Game];

pub async fn run(client: &ApiClient, filter: Option<String>, all: bool) -> Result<()> {
    let tags = resolve_tags(filter.as_deref(), all)?;

    let spinner = create_spinner("Fetching events");
    let events = client.list_events().await;
    let myself = client.myself().await;
    spinner.finish_and_clear();

    let events = events?;
    // Without a session the listing still works; rows just lose the
    // own-answer column.
    let myself = match myself {
        Ok(me) => Some(me),
        Err(e) => {
            warn!("could not resolve calling member: {e}");
            None
        }
    };

    let now = Utc::now();
    let mut shown = 0usize;
    let mut current_date: Option<String> = None;

    for event in &events {
        // Row-level exclusion: the aggregator never filters, listings do.
        if event.is_ignored() {
            continue;
        }
        if !tags.contains(&event.tag()) {
            continue;
        }
        shown += 1;

        let date_label = format_date_label(event.google.start_time);
        if current_date.as_ref() != Some(&date_label) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", date_label.bold());
            current_date = Some(date_label);
        }

        println!("  {}", render_row(event, myself.as_ref(), now));
    }

    if shown == 0 {
        println!("{}", "No events found".dimmed());
    }

    Ok(())
}

fn resolve_tags(filter: Option<&str>, all: bool) -> Result<Vec<EventTag>> {
    if all {
        return Ok(EventTag::ALL.to_vec());
    }
    match filter {
        Some(list) => list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| Ok(s.parse::<EventTag>()?))
            .collect(),
        None => Ok(DEFAULT_TAGS.to_vec()),
    }
}

fn render_row(event: &Event, myself: Option<&Member>, now: chrono::DateTime<Utc>) -> String {
    let time = format_time(event.google.start_time);
    let tag = event.tag().render();

    let participations = match event.participations() {
        Ok(p) => p,
        Err(e) => {
            warn!("event {}: bad participation data: {e}", event.google.id);
            Default::default()
        }
    };
    let going = participations.values().filter(|p| p.kind.joins_anyhow()).count();

    let answer = match myself {
        Some(me) => match participations.get(me.id()) {
            Some(entry) => entry.render(),
            // The unanswered badge only matters while answers are open.
            None if event.accepts_rsvp(now) => unanswered_badge(),
            None => String::new(),
        },
        None => String::new(),
    };

    let mut row = format!("{} {} [{}] ({} going)", time, event.google.title, tag, going);
    if !event.google.location.is_empty() {
        row = format!("{} {}", row, event.google.location.dimmed());
    }
    if !answer.is_empty() {
        row = format!("{} {}", row, answer);
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_practice_and_game() {
        let tags = resolve_tags(None, false).unwrap();
        assert_eq!(tags, vec![EventTag::Practice, EventTag::Game]);
    }

    #[test]
    fn all_flag_includes_unknown() {
        let tags = resolve_tags(Some("practice"), true).unwrap();
        assert!(tags.contains(&EventTag::Unknown));
        assert_eq!(tags.len(), 5);
    }

    #[test]
    fn filter_parses_a_comma_list() {
        let tags = resolve_tags(Some("event, meeting"), false).unwrap();
        assert_eq!(tags, vec![EventTag::Event, EventTag::Meeting]);
        assert!(resolve_tags(Some("practice,party"), false).is_err());
    }
}
