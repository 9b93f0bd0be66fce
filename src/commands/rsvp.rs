use anyhow::Result;
use chrono::Utc;
use owo_colors::OwoColorize;

use clubhub_core::event::ParticipationType;
use clubhub_core::protocol::AnswerRequest;

use super::create_spinner;
use crate::client::ApiClient;
use crate::render::Render;

pub async fn run(
    client: &ApiClient,
    event_id: &str,
    answer: &str,
    time: Option<String>,
) -> Result<()> {
    let kind: ParticipationType = answer.parse()?;
    // Validated before anything leaves the machine: late/early need a time.
    let request = AnswerRequest::new(event_id, kind, time)?;

    let spinner = create_spinner("Fetching event");
    let event = client.get_event(event_id).await;
    spinner.finish_and_clear();
    let event = event?;

    // Time-gate, evaluated against wall-clock now. The server does not
    // enforce this; the client refuses to submit once the event has started.
    if !event.accepts_rsvp(Utc::now()) {
        anyhow::bail!(
            "'{}' has already started; answers are closed",
            event.google.title
        );
    }

    let spinner = create_spinner("Submitting answer");
    let result = client.answer(&request).await;
    // Cleared whether the submission succeeded or not.
    spinner.finish_and_clear();
    let updated = result?;

    // The response supersedes the event fetched above; render from it only.
    let participations = updated.participations()?;
    let going = participations.values().filter(|p| p.kind.joins_anyhow()).count();
    let not_going = participations
        .values()
        .filter(|p| p.kind == ParticipationType::Absent)
        .count();

    println!(
        "{} {} for '{}'",
        "Recorded".green().bold(),
        kind.render(),
        updated.google.title
    );
    println!("{}", format!("{going} going, {not_going} not going").dimmed());

    Ok(())
}
