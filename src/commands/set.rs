use anyhow::Result;
use owo_colors::OwoColorize;

use clubhub_core::member::MemberStatus;
use clubhub_core::protocol::MemberProps;

use super::create_spinner;
use crate::client::ApiClient;
use crate::render::member_line;

pub async fn run(
    client: &ApiClient,
    id: &str,
    status: Option<String>,
    number: Option<u32>,
) -> Result<()> {
    if status.is_none() && number.is_none() {
        anyhow::bail!("Nothing to update: pass --status and/or --number");
    }

    let status = status
        .map(|s| s.parse::<MemberStatus>())
        .transpose()?;
    let props = MemberProps { status, number };

    let spinner = create_spinner("Updating member");
    let updated = client.update_member(id, &props).await;
    spinner.finish_and_clear();
    let updated = updated?;

    println!("{}", "Updated".green().bold());
    println!("{}", member_line(&updated));

    Ok(())
}
