//! Search and month filtering over the schedule.

use std::str::FromStr;

use chrono::Datelike;

use crate::dates::parse_instant;
use crate::game::Game;

/// Month selection for the schedule list: the "all" sentinel or a
/// calendar month 1-12, compared against each game's date in local
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Month(u32),
}

impl FromStr for MonthFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(MonthFilter::All);
        }
        match s.parse::<u32>() {
            Ok(m) if (1..=12).contains(&m) => Ok(MonthFilter::Month(m)),
            _ => Err(format!("Invalid month '{}'. Expected \"all\" or 1-12", s)),
        }
    }
}

impl MonthFilter {
    /// Whether a game's date falls in this month. Records whose date
    /// does not parse only pass the `All` sentinel.
    pub fn matches(&self, game: &Game) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Month(m) => parse_instant(&game.date).map(|dt| dt.month()) == Some(*m),
        }
    }
}

/// Case-insensitive substring match against opponent or location.
/// An empty term matches every record.
pub fn matches_search(game: &Game, term: &str) -> bool {
    let term = term.to_lowercase();
    game.opponent.to_lowercase().contains(&term) || game.location.to_lowercase().contains(&term)
}

/// A record passes iff both predicates pass.
pub fn matches(game: &Game, term: &str, month: MonthFilter) -> bool {
    matches_search(game, term) && month.matches(game)
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn fixture() -> Vec<Game> {
        vec![
            game("g1", "2025-04-19T17:00", "Opponent A", "Location X"),
            game("g2", "2025-04-20T14:00", "Opponent B", "Location X"),
            game("g3", "2025-05-06T18:30", "Opponent A", "Location Y"),
            game("g4", "not-a-date", "Opponent C", "Location Z"),
        ]
    }

    fn apply(games: &[Game], term: &str, month: MonthFilter) -> Vec<Game> {
        games
            .iter()
            .filter(|g| matches(g, term, month))
            .cloned()
            .collect()
    }

    #[test]
    fn month_filter_parses_sentinel_and_numbers() {
        assert_eq!("all".parse::<MonthFilter>().unwrap(), MonthFilter::All);
        assert_eq!("ALL".parse::<MonthFilter>().unwrap(), MonthFilter::All);
        assert_eq!("4".parse::<MonthFilter>().unwrap(), MonthFilter::Month(4));
        assert!("0".parse::<MonthFilter>().is_err());
        assert!("13".parse::<MonthFilter>().is_err());
        assert!("april".parse::<MonthFilter>().is_err());
    }

    #[test]
    fn empty_term_and_all_months_return_everything_in_order() {
        let games = fixture();
        let result = apply(&games, "", MonthFilter::All);
        assert_eq!(result, games);
    }

    #[test]
    fn search_is_case_insensitive_on_opponent_or_location() {
        let games = fixture();
        let by_opponent = apply(&games, "opponent a", MonthFilter::All);
        assert_eq!(by_opponent.len(), 2);
        let by_location = apply(&games, "location x", MonthFilter::All);
        assert_eq!(by_location.len(), 2);
    }

    #[test]
    fn search_and_month_combine_with_and() {
        let games = fixture();
        let result = apply(&games, "opponent a", MonthFilter::Month(4));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "g1");
    }

    #[test]
    fn filtering_never_adds_records() {
        let games = fixture();
        let all = apply(&games, "", MonthFilter::All);
        let subset = apply(&games, "opponent", MonthFilter::All);
        assert!(subset.iter().all(|g| all.contains(g)));
        assert!(subset.len() <= all.len());
    }

    #[test]
    fn filtering_is_idempotent() {
        let games = fixture();
        let once = apply(&games, "opponent a", MonthFilter::Month(4));
        let twice = apply(&once, "opponent a", MonthFilter::Month(4));
        assert_eq!(once, twice);
    }

    #[test]
    fn unparseable_dates_only_pass_the_all_sentinel() {
        let games = fixture();
        assert!(apply(&games, "opponent c", MonthFilter::All).len() == 1);
        for m in 1..=12 {
            assert!(apply(&games, "opponent c", MonthFilter::Month(m)).is_empty());
        }
    }
}
