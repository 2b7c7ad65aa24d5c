use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate, Weekday};
use dugout_core::calendar::{DayStyle, classify_day, day_style};
use dugout_core::remote::SEASON_YEAR;
use dugout_core::store::{ScheduleStore, StorageBackend};
use owo_colors::OwoColorize;

pub fn run<S: StorageBackend>(store: &ScheduleStore<S>, month: Option<u32>) -> Result<()> {
    let month = month.unwrap_or_else(|| Local::now().month());
    let first = NaiveDate::from_ymd_opt(SEASON_YEAR, month, 1)
        .ok_or_else(|| anyhow::anyhow!("Invalid month: {}", month))?;

    println!("{}", first.format("%B %Y").to_string().bold());
    println!(" Su  Mo  Tu  We  Th  Fr  Sa");

    let mut line = String::new();
    for _ in 0..first.weekday().num_days_from_sunday() {
        line.push_str("    ");
    }

    let mut day = first;
    while day.month() == month {
        let class = classify_day(store.games(), day);
        let marker = match (class.has_game, class.has_pre_booking) {
            (true, true) => '#',
            (true, false) => '*',
            (false, true) => '+',
            (false, false) => ' ',
        };
        let cell = format!("{:>2}{}", day.day(), marker);
        let styled = match day_style(day) {
            DayStyle::Sunday => cell.red().to_string(),
            DayStyle::Saturday => cell.blue().to_string(),
            DayStyle::Weekday => cell,
        };
        line.push_str(&styled);
        line.push(' ');

        if day.weekday() == Weekday::Sat {
            println!("{}", line.trim_end());
            line.clear();
        }
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    if !line.trim().is_empty() {
        println!("{}", line.trim_end());
    }

    println!();
    println!("{}", "* game day   + pre-booking day   # both".dimmed());
    Ok(())
}
