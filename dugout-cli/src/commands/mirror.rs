use anyhow::Result;
use dugout_core::config::DugoutConfig;
use dugout_core::remote::{DocumentStore, NewGame};
use dugout_core::store::{ScheduleStore, StorageBackend};
use owo_colors::OwoColorize;
use tracing::{debug, warn};

/// Fire-and-forget upload of the working collection. Per-record
/// failures are logged and skipped; the local schedule is never
/// touched.
pub fn run<S: StorageBackend>(store: &ScheduleStore<S>, config: &DugoutConfig) -> Result<()> {
    let Some(url) = &config.remote_url else {
        anyhow::bail!(
            "No remote_url configured in {}",
            DugoutConfig::config_path()?.display()
        );
    };

    let remote = DocumentStore::new(url.clone());
    let mut uploaded = 0usize;
    let mut failed = 0usize;

    for game in store.games() {
        match remote.create_game(&NewGame::from(game)) {
            Ok(id) => {
                uploaded += 1;
                debug!(local = %game.id, remote = %id, "Mirrored game");
            }
            Err(e) => {
                failed += 1;
                warn!(game = %game.id, error = %e, "Failed to mirror game");
            }
        }
    }

    if failed > 0 {
        println!(
            "{}",
            format!("Mirrored {} games, {} failed", uploaded, failed).yellow()
        );
    } else {
        println!("{}", format!("Mirrored {} games", uploaded).green());
    }
    Ok(())
}
