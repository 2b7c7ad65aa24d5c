use anyhow::Result;
use dugout_core::filter::MonthFilter;
use dugout_core::store::{ScheduleStore, StorageBackend};
use owo_colors::OwoColorize;

use crate::render;

pub fn run<S: StorageBackend>(
    store: &ScheduleStore<S>,
    search: &str,
    month: MonthFilter,
) -> Result<()> {
    let games = store.filtered(search, month);

    if games.is_empty() {
        println!("{}", "No games match".dimmed());
        return Ok(());
    }

    for game in games {
        println!("{}", render::game_line(game));
    }
    Ok(())
}
