//! Calendar-day classification and past-game detection.

use chrono::{Datelike, Local, NaiveDate, Weekday};

use crate::dates::parse_instant;
use crate::game::Game;

/// What a calendar day holds, compared by local calendar date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayClassification {
    pub has_game: bool,
    pub has_pre_booking: bool,
}

/// Classify one calendar day against the collection. Instants are
/// truncated to their local calendar date before comparison, and both
/// flags can be set at once (a game day can also be another game's
/// pre-booking day).
pub fn classify_day(games: &[Game], day: NaiveDate) -> DayClassification {
    let mut class = DayClassification::default();
    for game in games {
        if parse_instant(&game.date).map(|dt| dt.date()) == Some(day) {
            class.has_game = true;
        }
        let pre = game.pre_booking_date.as_deref().and_then(parse_instant);
        if pre.map(|dt| dt.date()) == Some(day) {
            class.has_pre_booking = true;
        }
    }
    class
}

/// True iff the game's instant is strictly earlier than now.
///
/// Recomputed on every call, so "past" status can flip while a view is
/// open. Unparseable dates are never "past", so bad data can't become
/// delete-eligible.
pub fn is_past_game(game: &Game) -> bool {
    match parse_instant(&game.date) {
        Some(dt) => dt < Local::now().naive_local(),
        None => false,
    }
}

/// Display style tag for a weekday. The CLI colors Sunday red and
/// Saturday blue in list and calendar views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStyle {
    Weekday,
    Saturday,
    Sunday,
}

pub fn day_style(day: NaiveDate) -> DayStyle {
    match day.weekday() {
        Weekday::Sun => DayStyle::Sunday,
        Weekday::Sat => DayStyle::Saturday,
        _ => DayStyle::Weekday,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn game(id: &str, date: &str, pre_booking: Option<&str>) -> Game {
        Game {
            id: id.to_string(),
            date: date.to_string(),
            opponent: "Opponent".to_string(),
            location: "Location".to_string(),
            is_available: true,
            is_special_game: None,
            pre_booking_date: pre_booking.map(String::from),
            is_pre_booking: None,
            notes: None,
            memo: None,
        }
    }

    #[test]
    fn classifies_game_and_pre_booking_days() {
        let games = vec![
            game("g1", "2025-04-19T17:00", Some("2025-04-16T14:00")),
            game("g2", "2025-04-20T14:00", None),
        ];

        let game_day = classify_day(&games, NaiveDate::from_ymd_opt(2025, 4, 19).unwrap());
        assert!(game_day.has_game);
        assert!(!game_day.has_pre_booking);

        let pre_day = classify_day(&games, NaiveDate::from_ymd_opt(2025, 4, 16).unwrap());
        assert!(!pre_day.has_game);
        assert!(pre_day.has_pre_booking);

        let empty_day = classify_day(&games, NaiveDate::from_ymd_opt(2025, 4, 17).unwrap());
        assert_eq!(empty_day, DayClassification::default());
    }

    #[test]
    fn a_day_can_be_both_game_and_pre_booking() {
        let games = vec![
            game("g1", "2025-04-16T18:30", None),
            game("g2", "2025-04-19T17:00", Some("2025-04-16T14:00")),
        ];
        let day = classify_day(&games, NaiveDate::from_ymd_opt(2025, 4, 16).unwrap());
        assert!(day.has_game);
        assert!(day.has_pre_booking);
    }

    #[test]
    fn comparison_truncates_to_calendar_day() {
        let games = vec![game("g1", "2025-04-19T23:59", None)];
        let day = classify_day(&games, NaiveDate::from_ymd_opt(2025, 4, 19).unwrap());
        assert!(day.has_game);
    }

    #[test]
    fn past_game_boundary_one_second_either_side_of_now() {
        let now = Local::now().naive_local();
        let fmt = "%Y-%m-%dT%H:%M:%S";

        let just_before = (now - Duration::seconds(1)).format(fmt).to_string();
        assert!(is_past_game(&game("g1", &just_before, None)));

        let just_after = (now + Duration::seconds(1)).format(fmt).to_string();
        assert!(!is_past_game(&game("g2", &just_after, None)));
    }

    #[test]
    fn unparseable_date_is_never_past() {
        assert!(!is_past_game(&game("g1", "not-a-date", None)));
    }

    #[test]
    fn weekend_days_get_their_own_style() {
        // 2025-04-19 Sat, 2025-04-20 Sun, 2025-04-21 Mon
        assert_eq!(
            day_style(NaiveDate::from_ymd_opt(2025, 4, 19).unwrap()),
            DayStyle::Saturday
        );
        assert_eq!(
            day_style(NaiveDate::from_ymd_opt(2025, 4, 20).unwrap()),
            DayStyle::Sunday
        );
        assert_eq!(
            day_style(NaiveDate::from_ymd_opt(2025, 4, 21).unwrap()),
            DayStyle::Weekday
        );
    }
}
