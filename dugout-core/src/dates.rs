//! Lenient date parsing and display formatting.
//!
//! Schedule records carry their date as a raw string. Every consumer
//! parses at the point of use and substitutes a fixed placeholder when
//! the value does not parse; a bad date never blocks rendering the rest
//! of the record.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Placeholder shown when a record's date string does not parse.
pub const DATE_UNAVAILABLE: &str = "date unavailable";
/// Placeholder shown when the time portion does not parse.
pub const TIME_UNAVAILABLE: &str = "time unavailable";

/// Parse a schedule date string into a local-time instant.
///
/// Accepts RFC 3339 (converted to local time), `YYYY-MM-DDTHH:MM[:SS]`
/// (interpreted as local time), and a bare `YYYY-MM-DD` (midnight).
pub fn parse_instant(s: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Local).naive_local())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").ok())
        .or_else(|| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Format a date as e.g. "Apr 19 (Sat)", or the placeholder.
pub fn format_date(s: &str) -> String {
    match parse_instant(s) {
        Some(dt) => dt.format("%b %-d (%a)").to_string(),
        None => DATE_UNAVAILABLE.to_string(),
    }
}

/// Format a date with the year, e.g. "Sat, Apr 19 2025".
pub fn format_long_date(s: &str) -> String {
    match parse_instant(s) {
        Some(dt) => dt.format("%a, %b %-d %Y").to_string(),
        None => DATE_UNAVAILABLE.to_string(),
    }
}

/// Format the time portion as e.g. "17:00", or the placeholder.
pub fn format_time(s: &str) -> String {
    match parse_instant(s) {
        Some(dt) => dt.format("%H:%M").to_string(),
        None => TIME_UNAVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_naive_datetime_without_seconds() {
        let dt = parse_instant("2025-04-19T17:00").unwrap();
        assert_eq!(dt.hour(), 17);
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2025, 4, 19).unwrap());
    }

    #[test]
    fn parses_bare_date_as_midnight() {
        let dt = parse_instant("2025-03-22").unwrap();
        assert_eq!(dt.hour(), 0);
        assert_eq!(dt.minute(), 0);
    }

    #[test]
    fn parses_naive_datetime_with_seconds() {
        assert!(parse_instant("2025-04-19T17:00:30").is_some());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_instant("not-a-date").is_none());
        assert!(parse_instant("").is_none());
        assert!(parse_instant("2025-13-01").is_none());
    }

    #[test]
    fn malformed_date_renders_both_placeholders() {
        assert_eq!(format_date("not-a-date"), DATE_UNAVAILABLE);
        assert_eq!(format_time("not-a-date"), TIME_UNAVAILABLE);
        assert_eq!(format_long_date("not-a-date"), DATE_UNAVAILABLE);
    }

    #[test]
    fn formats_date_and_time() {
        assert_eq!(format_date("2025-04-19T17:00"), "Apr 19 (Sat)");
        assert_eq!(format_time("2025-04-19T17:00"), "17:00");
        assert_eq!(format_long_date("2025-04-19T17:00"), "Sat, Apr 19 2025");
    }
}
