use anyhow::Result;
use dugout_core::calendar::is_past_game;
use dugout_core::dates;
use dugout_core::store::{ScheduleStore, StorageBackend};
use owo_colors::OwoColorize;

pub fn run<S: StorageBackend>(store: &ScheduleStore<S>, id: &str) -> Result<()> {
    let Some(game) = store.get(id) else {
        println!("{}", format!("No game with id '{}'", id).dimmed());
        return Ok(());
    };

    let heading = if game.is_pre_booking == Some(true) {
        "Pre-booking entry"
    } else {
        "Game"
    };
    println!("{}", heading.bold());
    println!(
        "  {} at {}",
        dates::format_long_date(&game.date),
        dates::format_time(&game.date)
    );
    println!("  vs {}", game.opponent.bold());
    println!("  {}", game.location);
    println!(
        "  Tickets: {}",
        if game.is_available {
            "available"
        } else {
            "not on sale"
        }
    );
    if let Some(pre) = &game.pre_booking_date {
        println!(
            "  Pre-booking opens: {} at {}",
            dates::format_date(pre),
            dates::format_time(pre)
        );
    }
    if game.is_special_game == Some(true) {
        println!("  {}", "Special game".yellow());
    }
    if let Some(memo) = &game.memo {
        println!(
            "  Memo: {} ({} tickets)",
            memo.attendees, memo.ticket_count
        );
    }
    if let Some(notes) = &game.notes {
        println!("  Notes: {}", notes);
    }
    if is_past_game(game) {
        println!("  {}", "This game has already been played".dimmed());
    }
    Ok(())
}
