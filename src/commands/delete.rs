use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use super::create_spinner;
use crate::client::ApiClient;

pub async fn run(client: &ApiClient, event_id: &str, yes: bool) -> Result<()> {
    let spinner = create_spinner("Fetching event");
    let event = client.get_event(event_id).await;
    spinner.finish_and_clear();
    let event = event?;

    // Destructive and unrecoverable, so gated behind a blocking prompt.
    let confirmed = yes
        || Confirm::new()
            .with_prompt(format!(
                "Delete '{}'? This cannot be undone",
                event.google.title
            ))
            .default(false)
            .interact()?;
    if !confirmed {
        println!("Aborted");
        return Ok(());
    }

    let spinner = create_spinner("Deleting event");
    let ack = client.delete_event(event_id).await;
    spinner.finish_and_clear();
    let ack = ack?;

    if ack.ok {
        println!("{} {}", "Deleted".red().bold(), event.google.title);
    } else {
        println!("Backend refused to delete {}", ack.id);
    }

    Ok(())
}
