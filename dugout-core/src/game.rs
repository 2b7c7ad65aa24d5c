//! Schedule record types.
//!
//! `Game` keeps the camelCase wire names of the historical JSON
//! payload, so a previously persisted schedule file loads unchanged.

use serde::{Deserialize, Serialize};

/// One entry in the home-game schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// Unique, stable, assigned when the schedule was authored.
    pub id: String,
    /// First-pitch instant as an ISO-8601 string. Parsed leniently at
    /// each use site; a malformed value never fails an operation.
    pub date: String,
    pub opponent: String,
    pub location: String,
    /// Whether tickets are currently purchasable. Informational only.
    pub is_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_special_game: Option<bool>,
    /// Instant priority ticket sales open. Assumed (not validated) to
    /// be at or before `date`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_booking_date: Option<String>,
    /// Marks a pre-booking-only entry rather than a main game record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_pre_booking: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<Memo>,
}

/// User-authored attendance record attached to a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memo {
    /// Who is going (free text).
    pub attendees: String,
    pub ticket_count: u32,
}

impl Memo {
    /// Coerce a requested ticket count to a positive integer.
    /// Non-positive and out-of-range values fall back to 1.
    pub fn coerce_count(requested: i64) -> u32 {
        if requested >= 1 {
            u32::try_from(requested).unwrap_or(1)
        } else {
            1
        }
    }
}
