//! The authored 2025 home schedule.
//!
//! This is the immutable baseline the store falls back to; user edits
//! only ever touch the persisted working copy.

use crate::game::Game;

fn game(id: &str, date: &str, opponent: &str, location: &str) -> Game {
    Game {
        id: id.to_string(),
        date: date.to_string(),
        opponent: opponent.to_string(),
        location: location.to_string(),
        is_available: true,
        is_special_game: None,
        pre_booking_date: None,
        is_pre_booking: None,
        notes: None,
        memo: None,
    }
}

/// The full authored home season, in schedule order.
///
/// Pre-booking dates follow the season's sales rule: Tue/Wed/Thu games
/// open the Sunday before at 14:00, Fri/Sat/Sun games the Wednesday
/// before at 14:00.
pub fn home_schedule() -> Vec<Game> {
    vec![
        Game {
            is_special_game: Some(true),
            pre_booking_date: Some("2025-03-19T14:00".to_string()),
            notes: Some("Opening day. Ceremony starts an hour before first pitch.".to_string()),
            ..game("g1", "2025-03-22T14:00", "Harbor Gulls", "Riverside Park")
        },
        Game {
            pre_booking_date: Some("2025-03-19T14:00".to_string()),
            ..game("g2", "2025-03-23T14:00", "Harbor Gulls", "Riverside Park")
        },
        Game {
            pre_booking_date: Some("2025-03-30T14:00".to_string()),
            ..game("g3", "2025-04-01T18:30", "Northside Comets", "Riverside Park")
        },
        Game {
            pre_booking_date: Some("2025-03-30T14:00".to_string()),
            ..game("g4", "2025-04-02T18:30", "Northside Comets", "Riverside Park")
        },
        Game {
            pre_booking_date: Some("2025-03-30T14:00".to_string()),
            ..game("g5", "2025-04-03T18:30", "Northside Comets", "Riverside Park")
        },
        Game {
            pre_booking_date: Some("2025-04-16T14:00".to_string()),
            ..game("g6", "2025-04-18T18:30", "Bay City Pilots", "Riverside Park")
        },
        Game {
            pre_booking_date: Some("2025-04-16T14:00".to_string()),
            notes: Some("Saturday games start at 17:00 from this date.".to_string()),
            ..game("g7", "2025-04-19T17:00", "Bay City Pilots", "Riverside Park")
        },
        Game {
            pre_booking_date: Some("2025-04-16T14:00".to_string()),
            ..game("g8", "2025-04-20T14:00", "Bay City Pilots", "Riverside Park")
        },
        game("g9", "2025-05-06T18:30", "Capital Foxes", "Riverside Park"),
        game("g10", "2025-05-07T18:30", "Capital Foxes", "Riverside Park"),
        Game {
            pre_booking_date: Some("2025-06-11T14:00".to_string()),
            ..game("g11", "2025-06-13T18:30", "Summit Bears", "Riverside Park")
        },
        game("g12", "2025-06-14T17:00", "Summit Bears", "Riverside Park"),
        Game {
            is_available: false,
            notes: Some("Fireworks night, sold out within the pre-booking window.".to_string()),
            ..game("g13", "2025-07-25T18:30", "Northside Comets", "Riverside Park")
        },
        game("g14", "2025-08-12T18:30", "Harbor Gulls", "Riverside Park"),
        Game {
            pre_booking_date: Some("2025-09-17T14:00".to_string()),
            ..game("g15", "2025-09-19T18:30", "Capital Foxes", "Riverside Park")
        },
        game("g16", "2025-09-20T17:00", "Capital Foxes", "Riverside Park"),
        Game {
            is_pre_booking: Some(true),
            notes: Some("Priority ticket window for the final home series.".to_string()),
            ..game("p1", "2025-09-17T14:00", "Capital Foxes", "Riverside Park")
        },
    ]
}
