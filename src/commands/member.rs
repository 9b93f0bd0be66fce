use anyhow::Result;
use owo_colors::OwoColorize;

use clubhub_core::directory::MemberDirectory;
use clubhub_core::position::Position;

use super::create_spinner;
use crate::client::ApiClient;
use crate::render::Render;

pub async fn run(directory: &mut MemberDirectory<&ApiClient>, id: &str) -> Result<()> {
    let spinner = create_spinner("Fetching member");
    let member = directory.get(id).await;
    spinner.finish_and_clear();
    let member = member?;

    println!("{}", member.name().bold());
    println!("id       {}", member.id());
    println!("status   {}", member.status.render());
    match member.number {
        Some(n) => println!("number   #{n}"),
        None => println!("number   {}", "-".dimmed()),
    }
    let title = member.position_title();
    if title.is_empty() {
        println!("position {}", "not set".dimmed());
    } else {
        println!("position {} ({})", title, Position::classify(title));
    }
    if member.slack.is_admin {
        println!("{}", "admin".yellow());
    }

    Ok(())
}
