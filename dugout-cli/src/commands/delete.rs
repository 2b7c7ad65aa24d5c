use anyhow::Result;
use dialoguer::Confirm;
use dugout_core::dates;
use dugout_core::store::{ScheduleStore, StorageBackend};
use owo_colors::OwoColorize;

pub fn run<S: StorageBackend>(store: &mut ScheduleStore<S>, id: &str, yes: bool) -> Result<()> {
    let (date, opponent) = match store.get(id) {
        Some(game) => (game.date.clone(), game.opponent.clone()),
        None => {
            println!("{}", format!("No game with id '{}'", id).dimmed());
            return Ok(());
        }
    };

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete the {} game vs {}?",
                dates::format_date(&date),
                opponent
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Cancelled");
            return Ok(());
        }
    }

    store.delete_game(id)?;
    println!("{}", format!("Deleted {}", id).green());
    Ok(())
}
