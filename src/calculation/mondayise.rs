//! Weekend-to-Monday observance ("Mondayisation").
//!
//! A holiday whose nominal date falls on a weekend is observed on the
//! following Monday. Consecutive pairs (New Year and Christmas) cascade so
//! the two holidays never land on the same observed day.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Moves a weekend date to the following Monday.
///
/// Sunday moves forward one day and Saturday two; weekdays are returned
/// unchanged. The result is never a weekend, so applying the function
/// twice gives the same date as applying it once.
///
/// # Example
///
/// ```
/// use nz_holiday_engine::calculation::mondayise;
/// use chrono::NaiveDate;
///
/// // 2021-12-25 is a Saturday
/// let christmas = NaiveDate::from_ymd_opt(2021, 12, 25).unwrap();
/// assert_eq!(mondayise(christmas), NaiveDate::from_ymd_opt(2021, 12, 27).unwrap());
/// ```
pub fn mondayise(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sun => date + Duration::days(1),
        Weekday::Sat => date + Duration::days(2),
        _ => date,
    }
}

/// Observes a pair of consecutive holidays.
///
/// Both dates are Mondayised independently. If the second observed date then
/// collides with the first, the second moves forward one more day.
///
/// # Example
///
/// ```
/// use nz_holiday_engine::calculation::observe_pair;
/// use chrono::NaiveDate;
///
/// // 2023-01-01 is a Sunday, so New Year's Day is observed Monday 2 January
/// // and the day after moves to Tuesday 3 January.
/// let (first, second) = observe_pair(
///     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 1, 2).unwrap(),
/// );
/// assert_eq!(first, NaiveDate::from_ymd_opt(2023, 1, 2).unwrap());
/// assert_eq!(second, NaiveDate::from_ymd_opt(2023, 1, 3).unwrap());
/// ```
pub fn observe_pair(first: NaiveDate, second: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first_observed = mondayise(first);
    let mut second_observed = mondayise(second);
    if second_observed == first_observed {
        second_observed += Duration::days(1);
    }
    (first_observed, second_observed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_weekday_is_unchanged() {
        // 2025-04-25 is a Friday
        let date = make_date("2025-04-25");
        assert_eq!(mondayise(date), date);
    }

    #[test]
    fn test_sunday_moves_to_monday() {
        // 2027-04-25 is a Sunday
        assert_eq!(mondayise(make_date("2027-04-25")), make_date("2027-04-26"));
    }

    #[test]
    fn test_saturday_moves_to_monday() {
        // 2026-04-25 is a Saturday
        assert_eq!(mondayise(make_date("2026-04-25")), make_date("2026-04-27"));
    }

    #[test]
    fn test_monday_is_unchanged() {
        // 2024-02-05 is a Monday
        let date = make_date("2024-02-05");
        assert_eq!(mondayise(date), date);
    }

    // ==========================================================================
    // Consecutive pairs
    // ==========================================================================

    #[test]
    fn test_pair_first_on_sunday_cascades_second() {
        // 2023-01-01 is a Sunday, 2023-01-02 a Monday
        let (first, second) = observe_pair(make_date("2023-01-01"), make_date("2023-01-02"));
        assert_eq!(first, make_date("2023-01-02"));
        assert_eq!(second, make_date("2023-01-03"));
    }

    #[test]
    fn test_pair_first_on_saturday_cascades_second() {
        // 2022-01-01 is a Saturday, 2022-01-02 a Sunday
        let (first, second) = observe_pair(make_date("2022-01-01"), make_date("2022-01-02"));
        assert_eq!(first, make_date("2022-01-03"));
        assert_eq!(second, make_date("2022-01-04"));
    }

    #[test]
    fn test_pair_second_on_saturday_only_moves_second() {
        // 2021-01-01 is a Friday, 2021-01-02 a Saturday
        let (first, second) = observe_pair(make_date("2021-01-01"), make_date("2021-01-02"));
        assert_eq!(first, make_date("2021-01-01"));
        assert_eq!(second, make_date("2021-01-04"));
    }

    #[test]
    fn test_christmas_pair_on_weekend() {
        // 2021-12-25 is a Saturday, 2021-12-26 a Sunday
        let (christmas, boxing) = observe_pair(make_date("2021-12-25"), make_date("2021-12-26"));
        assert_eq!(christmas, make_date("2021-12-27"));
        assert_eq!(boxing, make_date("2021-12-28"));
    }

    #[test]
    fn test_christmas_pair_on_weekdays() {
        // 2024-12-25 is a Wednesday
        let (christmas, boxing) = observe_pair(make_date("2024-12-25"), make_date("2024-12-26"));
        assert_eq!(christmas, make_date("2024-12-25"));
        assert_eq!(boxing, make_date("2024-12-26"));
    }

    proptest! {
        #[test]
        fn prop_mondayise_is_idempotent(days in 0i64..80_000) {
            let date = make_date("1900-01-01") + Duration::days(days);
            let once = mondayise(date);
            prop_assert_eq!(mondayise(once), once);
        }

        #[test]
        fn prop_mondayise_never_lands_on_weekend(days in 0i64..80_000) {
            let date = make_date("1900-01-01") + Duration::days(days);
            let observed = mondayise(date);
            prop_assert!(!matches!(observed.weekday(), Weekday::Sat | Weekday::Sun));
            prop_assert!(observed >= date);
            prop_assert!(observed - date <= Duration::days(2));
        }

        #[test]
        fn prop_pair_never_collides(days in 0i64..80_000) {
            let first = make_date("1900-01-01") + Duration::days(days);
            let (a, b) = observe_pair(first, first + Duration::days(1));
            prop_assert!(a < b);
        }
    }
}
