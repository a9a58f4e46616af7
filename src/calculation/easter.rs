//! Easter Sunday and the holidays anchored to it.

use chrono::{Duration, NaiveDate};

use super::calendar_date;
use crate::models::Holiday;

/// Computes Gregorian Easter Sunday for `year`.
///
/// Uses the anonymous Gregorian algorithm (Meeus/Jones/Butcher), which is
/// exact for the whole Gregorian calendar.
///
/// # Example
///
/// ```
/// use nz_holiday_engine::calculation::easter_sunday;
/// use chrono::NaiveDate;
///
/// assert_eq!(easter_sunday(2025), NaiveDate::from_ymd_opt(2025, 4, 20).unwrap());
/// ```
pub fn easter_sunday(year: i32) -> NaiveDate {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;

    let month = (n / 31) as u32;
    let day = (n % 31 + 1) as u32;
    calendar_date(year, month, day)
}

/// Good Friday and Easter Monday for `year`, in that order.
pub fn easter_holidays(year: i32) -> [Holiday; 2] {
    let easter = easter_sunday(year);
    [
        Holiday::public(
            format!("goodfri-{year}"),
            "Good Friday",
            easter - Duration::days(2),
        ),
        Holiday::public(
            format!("eastermon-{year}"),
            "Easter Monday",
            easter + Duration::days(1),
        ),
    ]
}
