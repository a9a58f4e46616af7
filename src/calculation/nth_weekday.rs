//! Holidays defined as the nth weekday of a month.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use super::calendar_date;
use crate::models::Holiday;

/// Returns the `n`th occurrence of `weekday` in `month` of `year`.
///
/// Finds the first `weekday` of the month and advances `n - 1` weeks.
/// `n` must be at least 1 and the month must contain `n` occurrences of
/// `weekday`; past that the result runs into the following month.
///
/// # Example
///
/// ```
/// use nz_holiday_engine::calculation::nth_weekday;
/// use chrono::{NaiveDate, Weekday};
///
/// // Labour Day 2025: fourth Monday of October
/// assert_eq!(
///     nth_weekday(2025, 10, Weekday::Mon, 4),
///     NaiveDate::from_ymd_opt(2025, 10, 27).unwrap()
/// );
/// ```
pub fn nth_weekday(year: i32, month: u32, weekday: Weekday, n: u32) -> NaiveDate {
    debug_assert!(n >= 1, "nth_weekday requires n >= 1");
    let first = calendar_date(year, month, 1);
    let offset = (7 + weekday.num_days_from_monday() - first.weekday().num_days_from_monday()) % 7;
    first + Duration::days(i64::from(offset) + 7 * i64::from(n.saturating_sub(1)))
}

/// King's Birthday: the first Monday of June.
pub fn kings_birthday(year: i32) -> Holiday {
    Holiday::public(
        format!("kings-{year}"),
        "King's Birthday",
        nth_weekday(year, 6, Weekday::Mon, 1),
    )
}

/// The date of Labour Day: the fourth Monday of October.
pub fn labour_day_date(year: i32) -> NaiveDate {
    nth_weekday(year, 10, Weekday::Mon, 4)
}

/// Labour Day as a public holiday.
pub fn labour_day(year: i32) -> Holiday {
    Holiday::public(format!("labour-{year}"), "Labour Day", labour_day_date(year))
}
