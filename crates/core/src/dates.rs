//! Calendar math and timestamp normalization.
//!
//! Every date that crosses the API boundary is a `YYYY-MM-DD` string; the
//! backend, however, emits time-series keys in several formats (RFC 3339,
//! `YYYY-MM-DD HH:MM:SS`, bare dates). Everything here is pure `chrono`.

use chrono::{DateTime, Duration, Months, NaiveDate, NaiveDateTime, Utc};

pub const DAY_FORMAT: &str = "%Y-%m-%d";

pub fn parse_day(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DAY_FORMAT).ok()
}

pub fn format_day(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

/// Normalize a backend timestamp to a `YYYY-MM-DD` day string.
///
/// RFC 3339 timestamps are converted to their UTC day; `YYYY-MM-DD HH:MM:SS`
/// to the date part; anything that merely starts with a date keeps its first
/// ten characters. A string that does not look like a date at all passes
/// through unchanged so callers can decide what to do with it.
pub fn normalize_timestamp(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return format_day(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return format_day(dt.date());
    }
    if starts_with_day(raw) {
        return raw[..10].to_string();
    }
    raw.to_string()
}

fn starts_with_day(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() >= 10
        && b[..4].iter().all(u8::is_ascii_digit)
        && b[4] == b'-'
        && b[5..7].iter().all(u8::is_ascii_digit)
        && b[7] == b'-'
        && b[8..10].iter().all(u8::is_ascii_digit)
}

/// Inclusive end of a window that starts at `start` and spans `days` days.
pub fn end_of_window(start: NaiveDate, days: u32) -> NaiveDate {
    start + Duration::days(i64::from(days.max(1)) - 1)
}

/// Default dashboard range: the 30 days ending today.
pub fn default_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today - Duration::days(30), today)
}

/// Preset for the comparison page's two windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodPreset {
    Month,
    Week,
}

impl PeriodPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodPreset::Month => "month",
            PeriodPreset::Week => "week",
        }
    }

    pub fn parse(s: &str) -> Option<PeriodPreset> {
        match s {
            "month" => Some(PeriodPreset::Month),
            "week" => Some(PeriodPreset::Week),
            _ => None,
        }
    }
}

/// Starts of the two compared windows plus the shared day count.
///
/// Month mode compares the two prior calendar months as 30-day windows; week
/// mode compares the two prior weeks as 7-day windows.
pub fn preset_windows(today: NaiveDate, preset: PeriodPreset) -> (NaiveDate, NaiveDate, u32) {
    match preset {
        PeriodPreset::Month => (
            today.checked_sub_months(Months::new(2)).unwrap_or(today),
            today.checked_sub_months(Months::new(1)).unwrap_or(today),
            30,
        ),
        PeriodPreset::Week => (today - Duration::days(14), today - Duration::days(7), 7),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        parse_day(s).unwrap()
    }

    #[test]
    fn test_normalize_rfc3339() {
        assert_eq!(normalize_timestamp("2024-03-05T10:00:00Z"), "2024-03-05");
        assert_eq!(
            normalize_timestamp("2024-03-05T23:30:00+00:00"),
            "2024-03-05"
        );
    }

    #[test]
    fn test_normalize_space_separated() {
        assert_eq!(normalize_timestamp("2024-03-05 00:00:00"), "2024-03-05");
    }

    #[test]
    fn test_normalize_bare_date_and_prefix() {
        assert_eq!(normalize_timestamp("2024-03-05"), "2024-03-05");
        assert_eq!(normalize_timestamp("2024-03-05T10:00:00"), "2024-03-05");
    }

    #[test]
    fn test_normalize_passes_through_garbage() {
        assert_eq!(normalize_timestamp("last tuesday"), "last tuesday");
        assert_eq!(normalize_timestamp(""), "");
    }

    #[test]
    fn test_end_of_window_inclusive() {
        assert_eq!(end_of_window(day("2024-01-01"), 7), day("2024-01-07"));
        assert_eq!(end_of_window(day("2024-01-01"), 1), day("2024-01-01"));
        // Zero days is clamped to a one-day window.
        assert_eq!(end_of_window(day("2024-01-01"), 0), day("2024-01-01"));
    }

    #[test]
    fn test_default_range_spans_30_days() {
        let (start, end) = default_range(day("2024-04-30"));
        assert_eq!(start, day("2024-03-31"));
        assert_eq!(end, day("2024-04-30"));
    }

    #[test]
    fn test_preset_windows_week() {
        let (p1, p2, days) = preset_windows(day("2024-04-15"), PeriodPreset::Week);
        assert_eq!(p1, day("2024-04-01"));
        assert_eq!(p2, day("2024-04-08"));
        assert_eq!(days, 7);
    }

    #[test]
    fn test_preset_windows_month() {
        let (p1, p2, days) = preset_windows(day("2024-04-15"), PeriodPreset::Month);
        assert_eq!(p1, day("2024-02-15"));
        assert_eq!(p2, day("2024-03-15"));
        assert_eq!(days, 30);
    }
}
