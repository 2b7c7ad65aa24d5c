//! Best-effort client for the remote document store.
//!
//! Every operation is an independent request/response against a plain
//! HTTP/JSON document store. Nothing here is retried, nothing local
//! blocks on it, and a transport failure only ever propagates to the
//! caller of that one operation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DugoutError, DugoutResult};
use crate::game::{Game, Memo};

/// The by-month query is fixed to the season the schedule is authored
/// for, mirroring the document-store schema.
pub const SEASON_YEAR: i32 = 2025;

/// A game record without an id; the server assigns one on create.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGame {
    pub date: String,
    pub opponent: String,
    pub location: String,
    pub is_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_special_game: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_booking_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_pre_booking: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<Memo>,
}

impl From<&Game> for NewGame {
    fn from(game: &Game) -> Self {
        NewGame {
            date: game.date.clone(),
            opponent: game.opponent.clone(),
            location: game.location.clone(),
            is_available: game.is_available,
            is_special_game: game.is_special_game,
            pre_booking_date: game.pre_booking_date.clone(),
            is_pre_booking: game.is_pre_booking,
            notes: game.notes.clone(),
            memo: game.memo.clone(),
        }
    }
}

/// Sparse update for a game record; only set fields go on the wire.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GamePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opponent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<Memo>,
}

#[derive(Debug, Deserialize)]
struct CreatedId {
    id: String,
}

/// Client for the remote document store, bound to a base URL.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    base_url: String,
}

impl DocumentStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        DocumentStore { base_url }
    }

    /// Fetch every game record.
    pub fn fetch_games(&self) -> DugoutResult<Vec<Game>> {
        let url = format!("{}/games", self.base_url);
        let response = ureq::get(&url)
            .call()
            .map_err(|e| DugoutError::Remote(format!("Request failed: {}", e)))?;
        parse_body(response)
    }

    /// Fetch games whose date falls within the given month of the
    /// fixed season year.
    pub fn games_for_month(&self, month: u32) -> DugoutResult<Vec<Game>> {
        let (from, to) = month_bounds(month)?;
        let url = format!("{}/games?from={}&to={}", self.base_url, from, to);
        let response = ureq::get(&url)
            .call()
            .map_err(|e| DugoutError::Remote(format!("Request failed: {}", e)))?;
        parse_body(response)
    }

    /// Create a game record; returns the server-assigned id.
    pub fn create_game(&self, game: &NewGame) -> DugoutResult<String> {
        let url = format!("{}/games", self.base_url);
        let response = ureq::post(&url)
            .send_json(game)
            .map_err(|e| DugoutError::Remote(format!("Create failed: {}", e)))?;
        let created: CreatedId = parse_body(response)?;
        Ok(created.id)
    }

    /// Partially update a game record by id.
    pub fn update_game(&self, id: &str, patch: &GamePatch) -> DugoutResult<()> {
        let url = format!("{}/games/{}", self.base_url, id);
        ureq::put(&url)
            .send_json(patch)
            .map_err(|e| DugoutError::Remote(format!("Update failed: {}", e)))?;
        Ok(())
    }

    /// Delete a game record by id.
    pub fn delete_game(&self, id: &str) -> DugoutResult<()> {
        let url = format!("{}/games/{}", self.base_url, id);
        ureq::delete(&url)
            .call()
            .map_err(|e| DugoutError::Remote(format!("Delete failed: {}", e)))?;
        Ok(())
    }

    /// Create a free-standing note record; returns the server-assigned
    /// id.
    pub fn create_note(&self, content: &str) -> DugoutResult<String> {
        let payload = serde_json::json!({ "content": content });
        let url = format!("{}/notes", self.base_url);
        let response = ureq::post(&url)
            .send_json(payload)
            .map_err(|e| DugoutError::Remote(format!("Create failed: {}", e)))?;
        let created: CreatedId = parse_body(response)?;
        Ok(created.id)
    }

    /// Delete a free-standing note record by id.
    pub fn delete_note(&self, id: &str) -> DugoutResult<()> {
        let url = format!("{}/notes/{}", self.base_url, id);
        ureq::delete(&url)
            .call()
            .map_err(|e| DugoutError::Remote(format!("Delete failed: {}", e)))?;
        Ok(())
    }
}

fn parse_body<T: serde::de::DeserializeOwned>(
    response: ureq::http::Response<ureq::Body>,
) -> DugoutResult<T> {
    let body = response
        .into_body()
        .read_to_string()
        .map_err(|e| DugoutError::Remote(format!("Failed to read response body: {}", e)))?;
    serde_json::from_str(&body)
        .map_err(|e| DugoutError::Remote(format!("Failed to parse response: {}", e)))
}

/// First and last calendar day of a month in the season year.
fn month_bounds(month: u32) -> DugoutResult<(String, String)> {
    let start = NaiveDate::from_ymd_opt(SEASON_YEAR, month, 1)
        .ok_or_else(|| DugoutError::Remote(format!("Invalid month: {}", month)))?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(SEASON_YEAR + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(SEASON_YEAR, month + 1, 1)
    }
    .ok_or_else(|| DugoutError::Remote(format!("Invalid month: {}", month)))?;
    let end = next.pred_opt().unwrap_or(start);

    Ok((
        start.format("%Y-%m-%d").to_string(),
        end.format("%Y-%m-%d").to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_bounds_cover_the_whole_month() {
        assert_eq!(
            month_bounds(4).unwrap(),
            ("2025-04-01".to_string(), "2025-04-30".to_string())
        );
        assert_eq!(
            month_bounds(2).unwrap(),
            ("2025-02-01".to_string(), "2025-02-28".to_string())
        );
        assert_eq!(
            month_bounds(12).unwrap(),
            ("2025-12-01".to_string(), "2025-12-31".to_string())
        );
        assert!(month_bounds(0).is_err());
        assert!(month_bounds(13).is_err());
    }

    #[test]
    fn patch_serializes_only_set_fields() {
        let patch = GamePatch {
            is_available: Some(false),
            ..GamePatch::default()
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, "{\"isAvailable\":false}");
    }

    #[test]
    fn new_game_drops_the_local_id() {
        let game = Game {
            id: "g1".to_string(),
            date: "2025-04-19T17:00".to_string(),
            opponent: "Bay City Pilots".to_string(),
            location: "Riverside Park".to_string(),
            is_available: true,
            is_special_game: None,
            pre_booking_date: None,
            is_pre_booking: None,
            notes: None,
            memo: None,
        };
        let json = serde_json::to_string(&NewGame::from(&game)).unwrap();
        assert!(!json.contains("\"id\""));
        assert!(json.contains("\"opponent\":\"Bay City Pilots\""));
    }

    #[test]
    fn base_url_trailing_slashes_are_trimmed() {
        let store = DocumentStore::new("https://example.com/api///");
        assert_eq!(store.base_url, "https://example.com/api");
    }
}
