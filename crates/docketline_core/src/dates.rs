//! Date arithmetic primitives.
//!
//! # Responsibility
//! - Provide the calendar-day, court-day and weekday offset functions every
//!   rule offset resolves through.
//! - Provide the month-window bounds used by calendar queries.
//!
//! # Invariants
//! - Court-day offsets never land on a Saturday or Sunday and count only
//!   Monday–Friday while walking.
//! - All functions are pure and total over in-range `NaiveDate` values.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Returns whether a date falls on Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Adds `days` calendar days; negative values move backward.
pub fn add_calendar_days(date: NaiveDate, days: i64) -> NaiveDate {
    if days < 0 {
        date - Days::new(days.unsigned_abs())
    } else {
        date + Days::new(days.unsigned_abs())
    }
}

/// Subtracts `days` calendar days; negative values move forward.
pub fn subtract_calendar_days(date: NaiveDate, days: i64) -> NaiveDate {
    add_calendar_days(date, -days)
}

/// Walks backward until exactly `court_days` weekdays have been consumed.
///
/// Weekend days are stepped over without being counted, so the result is
/// always a Monday–Friday date strictly before `date` for `court_days > 0`.
pub fn subtract_court_days(date: NaiveDate, court_days: u32) -> NaiveDate {
    let mut current = date;
    let mut consumed = 0;
    while consumed < court_days {
        current = current - Days::new(1);
        if !is_weekend(current) {
            consumed += 1;
        }
    }
    current
}

/// Returns the nearest date strictly before `date` whose day-of-week equals
/// `target` (e.g. the Friday before trial).
pub fn nearest_weekday_before(date: NaiveDate, target: Weekday) -> NaiveDate {
    let mut current = date - Days::new(1);
    while current.weekday() != target {
        current = current - Days::new(1);
    }
    current
}

/// Chronologically later of two possibly-unresolved dates.
///
/// One absent side yields the other side; `None` only when both are absent.
/// This is what makes "later of X or Y" degrade to the resolvable branch
/// when one anchor is unset.
pub fn later(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Option<NaiveDate> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

/// First and last day of the calendar month containing `day`, inclusive.
pub fn month_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = day.with_day(1).expect("day 1 exists in every month");
    let (next_year, next_month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    let first_of_next =
        NaiveDate::from_ymd_opt(next_year, next_month, 1).expect("first of month is valid");
    (first, first_of_next - Days::new(1))
}
