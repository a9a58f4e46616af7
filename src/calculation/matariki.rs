//! Matariki public holiday.
//!
//! Matariki follows the maramataka and is fixed by gazette, so there is no
//! rule to compute it. Dates come from a hand-maintained table and years
//! outside the table simply have no Matariki holiday.

use chrono::NaiveDate;

use super::calendar_date;
use crate::models::Holiday;

/// Gazetted Matariki dates as (year, month, day).
const MATARIKI_DATES: [(i32, u32, u32); 6] = [
    (2023, 7, 14),
    (2024, 6, 28),
    (2025, 6, 20),
    (2026, 7, 10),
    (2027, 6, 25),
    (2028, 7, 14),
];

/// Looks up the Matariki date for `year`.
///
/// Returns `None` for any year the table does not cover.
///
/// # Example
///
/// ```
/// use nz_holiday_engine::calculation::matariki_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(matariki_date(2025), NaiveDate::from_ymd_opt(2025, 6, 20));
/// assert_eq!(matariki_date(2029), None);
/// ```
pub fn matariki_date(year: i32) -> Option<NaiveDate> {
    MATARIKI_DATES
        .iter()
        .find(|(y, _, _)| *y == year)
        .map(|&(y, month, day)| calendar_date(y, month, day))
}

/// Matariki as a public holiday, when the year is covered.
pub fn matariki(year: i32) -> Option<Holiday> {
    matariki_date(year).map(|date| Holiday::public(format!("matariki-{year}"), "Matariki", date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};

    #[test]
    fn test_present_for_2023_through_2028() {
        for year in 2023..=2028 {
            let holiday = matariki(year).expect("Matariki should be known");
            assert_eq!(holiday.id(), format!("matariki-{year}"));
            assert_eq!(holiday.date().year(), year);
        }
    }

    #[test]
    fn test_absent_outside_table() {
        assert!(matariki(2022).is_none());
        assert!(matariki(2029).is_none());
        assert!(matariki(1900).is_none());
    }

    #[test]
    fn test_known_dates_fall_on_friday() {
        for (year, _, _) in MATARIKI_DATES {
            let date = matariki_date(year).unwrap();
            assert_eq!(date.weekday(), Weekday::Fri, "Matariki {}", year);
        }
    }

    #[test]
    fn test_2024_date() {
        assert_eq!(matariki_date(2024), NaiveDate::from_ymd_opt(2024, 6, 28));
    }
}
