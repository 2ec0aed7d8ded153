//! Display-date handling.
//!
//! Workout dates are stored as `MM/DD/YYYY`-like display strings. All
//! parsing of that form goes through [`parse_display_date`] so that
//! malformed dates are handled in exactly one place: the aggregator sorts
//! unparseable dates first and excludes them from time-bucketed groups.

use chrono::{Datelike, Duration, NaiveDate};

/// Parses an `MM/DD/YYYY`-like display string. Non-padded months and days
/// are accepted (`4/4/2025`).
#[must_use]
pub fn parse_display_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%m/%d/%Y").ok()
}

/// The Sunday on or before the given date, used as the week anchor.
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// Chart label for a day group: `"M/D"`.
#[must_use]
pub fn day_label(date: NaiveDate) -> String {
    format!("{}/{}", date.month(), date.day())
}

/// Chart label for a week group: short month and day of the Sunday anchor,
/// e.g. `"Mar 24"`.
#[must_use]
pub fn week_label(date: NaiveDate) -> String {
    format!("{} {}", date.format("%b"), date.day())
}

/// Truncates a display date to its first two `/`-separated parts
/// (`"4/4/2025"` becomes `"4/4"`). Lossy across years; strings without two
/// parts pass through unchanged.
#[must_use]
pub fn month_day_label(date: &str) -> String {
    let mut parts = date.split('/');
    match (parts.next(), parts.next()) {
        (Some(month), Some(day)) => format!("{month}/{day}"),
        _ => date.to_string(),
    }
}
