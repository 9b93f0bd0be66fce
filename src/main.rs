mod client;
mod commands;
mod config;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

use clubhub_core::directory::MemberDirectory;

use crate::client::ApiClient;
use crate::config::GlobalConfig;

#[derive(Parser)]
#[command(name = "clubhub")]
#[command(about = "Team schedule, RSVP answers, and roster from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upcoming events
    Events {
        /// Comma-separated tags to show (practice,game,event,meeting,unknown)
        #[arg(short, long)]
        filter: Option<String>,

        /// Show every event regardless of tag
        #[arg(long)]
        all: bool,
    },
    /// Event detail with attendance rosters
    Show {
        event_id: String,

        /// Group attendees by position
        #[arg(long)]
        by_position: bool,
    },
    /// Answer an event (join, join_late, leave_early, absent)
    Rsvp {
        event_id: String,
        answer: String,

        /// Clock time for join_late / leave_early, e.g. 19:30
        #[arg(short, long)]
        time: Option<String>,
    },
    /// Delete an event
    Delete {
        event_id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Roster
    Members {
        /// Only members expected to answer RSVPs
        #[arg(long)]
        active: bool,
    },
    /// Single member detail
    Member { id: String },
    /// Update a member's status or jersey number
    Set {
        id: String,

        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        number: Option<u32>,
    },
    /// The member this session belongs to
    Whoami,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = GlobalConfig::load()?;

    let session_cookie = config
        .session
        .as_ref()
        .map(|value| format!("{}={}", config.session_cookie, value));
    let client = ApiClient::new(&config.api_base_url, session_cookie);

    // One directory per process: warm once, read many. Every command that
    // needs member resolution borrows this same cache.
    let mut directory = MemberDirectory::new(&client);

    match cli.command {
        Commands::Events { filter, all } => commands::events::run(&client, filter, all).await,
        Commands::Show {
            event_id,
            by_position,
        } => commands::show::run(&client, &mut directory, &event_id, by_position).await,
        Commands::Rsvp {
            event_id,
            answer,
            time,
        } => commands::rsvp::run(&client, &event_id, &answer, time).await,
        Commands::Delete { event_id, yes } => {
            commands::delete::run(&client, &event_id, yes).await
        }
        Commands::Members { active } => commands::members::run(&mut directory, active).await,
        Commands::Member { id } => commands::member::run(&mut directory, &id).await,
        Commands::Set { id, status, number } => {
            commands::set::run(&client, &id, status, number).await
        }
        Commands::Whoami => commands::whoami::run(&client).await,
    }
}
