use anyhow::Result;
use dugout_core::store::{ScheduleStore, StorageBackend};
use owo_colors::OwoColorize;

pub fn run<S: StorageBackend>(
    store: &mut ScheduleStore<S>,
    id: &str,
    attendees: &str,
    tickets: &str,
) -> Result<()> {
    // Anything that isn't a positive number falls back to one ticket
    let count = tickets.trim().parse::<i64>().unwrap_or(1);

    if store.get(id).is_none() {
        println!("{}", format!("No game with id '{}', nothing saved", id).dimmed());
        return Ok(());
    }

    store.set_memo(id, attendees, count)?;

    let memo = store.get(id).and_then(|g| g.memo.as_ref());
    if let Some(memo) = memo {
        println!(
            "{}",
            format!(
                "Memo saved for {}: {} ({} tickets)",
                id, memo.attendees, memo.ticket_count
            )
            .green()
        );
    }
    Ok(())
}
