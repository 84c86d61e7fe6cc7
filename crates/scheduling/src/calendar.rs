//! Working-day calendar arithmetic.
//!
//! A working day is any weekday; Saturday and Sunday are skipped. Holiday
//! calendars are out of scope, so the arithmetic is pure date stepping.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Whether `date` is a working day (Monday through Friday).
pub fn is_working_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Step `n` working days from `date`, skipping weekends.
///
/// `n` may be negative, in which case the same skipping rule is applied
/// walking backward. `advance(date, 0) == date` for any date, weekend
/// included; for `n != 0` the result is always a weekday. Monotonic in `n`.
pub fn advance(date: NaiveDate, n: i64) -> NaiveDate {
    let step = Duration::days(if n >= 0 { 1 } else { -1 });
    let mut remaining = n.abs();
    let mut current = date;
    while remaining > 0 {
        current += step;
        if is_working_day(current) {
            remaining -= 1;
        }
    }
    current
}

/// Roll `date` forward to the nearest working day (identity on weekdays).
///
/// Used to normalize a project anchor that falls on a weekend.
pub fn next_working_day(date: NaiveDate) -> NaiveDate {
    let mut current = date;
    while !is_working_day(current) {
        current += Duration::days(1);
    }
    current
}
