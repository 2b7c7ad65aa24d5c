//! Colored terminal rendering for schedule records.

use dugout_core::calendar::{DayStyle, day_style, is_past_game};
use dugout_core::dates::{self, parse_instant};
use dugout_core::game::Game;
use owo_colors::OwoColorize;

/// Colorize a weekday label: Sunday red, Saturday blue.
pub fn style_day_label(label: &str, style: DayStyle) -> String {
    match style {
        DayStyle::Sunday => label.red().to_string(),
        DayStyle::Saturday => label.blue().to_string(),
        DayStyle::Weekday => label.to_string(),
    }
}

/// Date label for a record, colored by weekday when it parses.
pub fn date_label(date: &str) -> String {
    match parse_instant(date) {
        Some(dt) => style_day_label(&dates::format_date(date), day_style(dt.date())),
        None => dates::DATE_UNAVAILABLE.to_string(),
    }
}

/// One list row: id, date, time, matchup, location, badges.
pub fn game_line(game: &Game) -> String {
    let mut line = format!(
        "{} {} {}  vs {:<18} {}",
        format!("{:<4}", game.id).bold(),
        date_label(&game.date),
        dates::format_time(&game.date),
        game.opponent,
        game.location.dimmed(),
    );

    for badge in badges(game) {
        line.push(' ');
        line.push_str(&badge);
    }
    line
}

fn badges(game: &Game) -> Vec<String> {
    let mut badges = Vec::new();
    if let Some(pre) = &game.pre_booking_date {
        badges.push(
            format!("[pre-booking {}]", dates::format_date(pre))
                .green()
                .to_string(),
        );
    }
    if let Some(memo) = &game.memo {
        badges.push(
            format!("[{} ({} tickets)]", memo.attendees, memo.ticket_count)
                .purple()
                .to_string(),
        );
    }
    if game.is_special_game == Some(true) {
        badges.push("[special]".yellow().to_string());
    }
    if game.is_pre_booking == Some(true) {
        badges.push("[pre-booking only]".cyan().to_string());
    }
    if !game.is_available {
        badges.push("[sold out]".dimmed().to_string());
    }
    if is_past_game(game) {
        badges.push("[past]".dimmed().to_string());
    }
    badges
}
