//! The schedule store: working collection, persistence, derived views.
//!
//! The store is the only mutation surface over the working collection.
//! Persistence is an injected hook so tests can substitute an in-memory
//! backend for the JSON file.

use std::cell::RefCell;
use std::path::PathBuf;

use tracing::warn;

use crate::error::{DugoutError, DugoutResult};
use crate::filter::{self, MonthFilter};
use crate::game::{Game, Memo};

/// Persistence hook for the working collection. Every save replaces the
/// whole collection; backends never patch.
pub trait StorageBackend {
    /// `Ok(None)` means nothing has been persisted yet.
    fn load(&self) -> DugoutResult<Option<Vec<Game>>>;
    fn save(&self, games: &[Game]) -> DugoutResult<()>;
}

/// Whole-collection JSON file storage.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: PathBuf) -> Self {
        JsonFileStorage { path }
    }
}

impl StorageBackend for JsonFileStorage {
    fn load(&self) -> DugoutResult<Option<Vec<Game>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        let games = serde_json::from_str(&content)
            .map_err(|e| DugoutError::Serialization(e.to_string()))?;
        Ok(Some(games))
    }

    fn save(&self, games: &[Game]) -> DugoutResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(games)
            .map_err(|e| DugoutError::Serialization(e.to_string()))?;

        // Write to a temp file and rename into place
        let temp = self.path.with_extension("json.tmp");
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

/// In-memory backend for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryStorage {
    games: RefCell<Option<Vec<Game>>>,
}

impl StorageBackend for MemoryStorage {
    fn load(&self) -> DugoutResult<Option<Vec<Game>>> {
        Ok(self.games.borrow().clone())
    }

    fn save(&self, games: &[Game]) -> DugoutResult<()> {
        *self.games.borrow_mut() = Some(games.to_vec());
        Ok(())
    }
}

/// The working collection of games plus its persistence hook.
///
/// Order is authored/storage order; the store never re-sorts.
pub struct ScheduleStore<S: StorageBackend> {
    games: Vec<Game>,
    storage: S,
}

impl<S: StorageBackend> ScheduleStore<S> {
    /// Initialize from persisted storage, falling back to the seed when
    /// nothing is persisted or the payload does not deserialize. Read
    /// failures are logged, never propagated. Nothing is written back
    /// until the first mutation.
    pub fn load(storage: S, seed: Vec<Game>) -> Self {
        let games = match storage.load() {
            Ok(Some(persisted)) => merge_seed(persisted, &seed),
            Ok(None) => seed,
            Err(e) => {
                warn!(error = %e, "Failed to read persisted schedule, falling back to seed");
                seed
            }
        };
        ScheduleStore { games, storage }
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn get(&self, id: &str) -> Option<&Game> {
        self.games.iter().find(|g| g.id == id)
    }

    /// Filtered view in working-collection order.
    pub fn filtered(&self, term: &str, month: MonthFilter) -> Vec<&Game> {
        self.games
            .iter()
            .filter(|g| filter::matches(g, term, month))
            .collect()
    }

    /// Attach or replace the memo on the matching record, leaving every
    /// other record untouched. Unknown ids are a silent no-op. Counts
    /// below 1 coerce to 1. Persists the whole collection.
    pub fn set_memo(&mut self, id: &str, attendees: &str, ticket_count: i64) -> DugoutResult<()> {
        for game in &mut self.games {
            if game.id == id {
                game.memo = Some(Memo {
                    attendees: attendees.to_string(),
                    ticket_count: Memo::coerce_count(ticket_count),
                });
            }
        }
        self.persist()
    }

    /// Remove the record with the matching id, if present. Unknown ids
    /// are a no-op. Irreversible; there is no tombstone, so a deleted
    /// game cannot come back from the seed.
    pub fn delete_game(&mut self, id: &str) -> DugoutResult<()> {
        self.games.retain(|g| g.id != id);
        self.persist()
    }

    fn persist(&self) -> DugoutResult<()> {
        self.storage.save(&self.games)
    }
}

/// Reconcile a persisted working copy with the authored seed: the
/// seed's authored fields refresh matching records, the persisted memo
/// survives, and records absent from the working copy stay absent
/// (deletions win over seed updates).
fn merge_seed(persisted: Vec<Game>, seed: &[Game]) -> Vec<Game> {
    persisted
        .into_iter()
        .map(|game| match seed.iter().find(|s| s.id == game.id) {
            Some(authored) => Game {
                memo: game.memo,
                ..authored.clone()
            },
            None => game,
        })
        .collect()
}
