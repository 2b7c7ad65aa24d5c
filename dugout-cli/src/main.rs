mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dugout_core::config::DugoutConfig;
use dugout_core::filter::MonthFilter;
use dugout_core::seed;
use dugout_core::store::{JsonFileStorage, ScheduleStore};

#[derive(Parser)]
#[command(name = "dugout")]
#[command(about = "Track the home-game schedule, pre-booking dates, and your attendance memos")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the schedule, optionally filtered
    List {
        /// Search term matched against opponent or location
        search: Option<String>,

        /// Month to show: "all" or 1-12
        #[arg(short, long, default_value = "all")]
        month: MonthFilter,
    },
    /// Show full details for one game
    Show {
        /// Game id (e.g. "g7")
        id: String,
    },
    /// Attach an attendance memo to a game
    Memo {
        /// Game id
        id: String,

        /// Who is going (free text)
        attendees: String,

        /// Ticket count; anything that isn't a positive number becomes 1
        #[arg(short, long, default_value = "1")]
        tickets: String,
    },
    /// Delete a game from the working schedule
    Delete {
        /// Game id
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Month grid with game and pre-booking days marked
    Calendar {
        /// Month 1-12 (defaults to the current month)
        #[arg(short, long)]
        month: Option<u32>,
    },
    /// Upload the working schedule to the remote document store
    Mirror,
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();

    let cli = Cli::parse();
    let config = DugoutConfig::load()?;
    let storage = JsonFileStorage::new(config.schedule_path());
    let mut store = ScheduleStore::load(storage, seed::home_schedule());

    match cli.command {
        Commands::List { search, month } => {
            commands::list::run(&store, search.as_deref().unwrap_or(""), month)
        }
        Commands::Show { id } => commands::show::run(&store, &id),
        Commands::Memo {
            id,
            attendees,
            tickets,
        } => commands::memo::run(&mut store, &id, &attendees, &tickets),
        Commands::Delete { id, yes } => commands::delete::run(&mut store, &id, yes),
        Commands::Calendar { month } => commands::calendar::run(&store, month),
        Commands::Mirror => commands::mirror::run(&store, &config),
    }
}
