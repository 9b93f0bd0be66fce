use anyhow::Result;
use owo_colors::OwoColorize;

use clubhub_core::directory::MemberDirectory;
use clubhub_core::member::Member;

use super::create_spinner;
use crate::client::ApiClient;
use crate::render::member_line;

pub async fn run(directory: &mut MemberDirectory<&ApiClient>, active: bool) -> Result<()> {
    let spinner = create_spinner("Fetching roster");
    let roster = directory.list(true).await;
    spinner.finish_and_clear();
    let mut roster = roster?;

    if active {
        roster.retain(Member::is_expected_to_rsvp);
    }

    // Numbered members first, in jersey order; the rest by name.
    roster.sort_by(|a, b| match (a.number, b.number) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.name().cmp(b.name()),
    });

    if roster.is_empty() {
        println!("{}", "No members found".dimmed());
        return Ok(());
    }

    for member in &roster {
        println!("{}", member_line(member));
    }
    println!();
    println!("{}", format!("{} members", roster.len()).dimmed());

    Ok(())
}
