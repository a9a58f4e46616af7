//! Aggregation of every holiday rule for one year.

use std::ops::RangeInclusive;

use chrono::NaiveDate;
use tracing::{debug, warn};

use super::easter::easter_holidays;
use super::fixed_date::{anzac_day, christmas_holidays, new_year_holidays, waitangi_day};
use super::matariki::matariki;
use super::nth_weekday::{kings_birthday, labour_day};
use super::regional_anniversary::regional_anniversaries;
use super::school_terms::school_holidays;
use crate::error::{EngineError, EngineResult};
use crate::models::Holiday;

/// Years accepted at the service boundary.
///
/// The rules assume the proleptic Gregorian calendar; results are only
/// meaningful from roughly 1900 to 2099.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1..=9999;

/// Checks that `year` is inside [`SUPPORTED_YEARS`].
pub fn validate_year(year: i32) -> EngineResult<i32> {
    if SUPPORTED_YEARS.contains(&year) {
        Ok(year)
    } else {
        Err(EngineError::YearOutOfRange { year })
    }
}

/// Computes every public, regional and school holiday for `year`.
///
/// The result is a pure function of `year`: the same input always yields the
/// same sequence in the same order. National holidays come first (New Year
/// pair, Waitangi Day, Good Friday, Easter Monday, ANZAC Day, King's
/// Birthday, Matariki when known, Labour Day, Christmas pair), then the
/// regional anniversaries, then every school holiday day.
///
/// Years chrono cannot represent in full (beyond roughly ±262,000) yield an
/// empty list. Use [`validate_year`] to reject them up front.
///
/// # Example
///
/// ```
/// use nz_holiday_engine::calculation::year_holidays;
/// use nz_holiday_engine::models::HolidayType;
///
/// let holidays = year_holidays(2025);
/// assert_eq!(holidays[0].name(), "New Year's Day");
/// assert!(holidays.iter().any(|h| h.name() == "Matariki"));
/// assert!(holidays.iter().any(|h| h.kind() == HolidayType::School));
/// ```
pub fn year_holidays(year: i32) -> Vec<Holiday> {
    // Every rule lands between 1 January and 31 December of `year`.
    if NaiveDate::from_ymd_opt(year, 1, 1).is_none()
        || NaiveDate::from_ymd_opt(year, 12, 31).is_none()
    {
        warn!(year, "Year not representable, no holidays computed");
        return Vec::new();
    }

    let mut holidays = Vec::with_capacity(96);

    holidays.extend(new_year_holidays(year));
    holidays.push(waitangi_day(year));
    holidays.extend(easter_holidays(year));
    holidays.push(anzac_day(year));
    holidays.push(kings_birthday(year));
    holidays.extend(matariki(year));
    holidays.push(labour_day(year));
    holidays.extend(christmas_holidays(year));

    holidays.extend(regional_anniversaries(year));
    holidays.extend(school_holidays(year));

    debug!(year, count = holidays.len(), "Computed holidays for year");
    holidays
}

/// Finds the holiday with `id` among the holidays of `year`.
pub fn find_holiday(year: i32, id: &str) -> EngineResult<Holiday> {
    year_holidays(year)
        .into_iter()
        .find(|h| h.id() == id)
        .ok_or_else(|| EngineError::HolidayNotFound { id: id.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HolidayType;
    use chrono::Datelike;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn by_id<'a>(holidays: &'a [Holiday], id: &str) -> &'a Holiday {
        holidays
            .iter()
            .find(|h| h.id() == id)
            .unwrap_or_else(|| panic!("missing holiday {id}"))
    }

    #[test]
    fn test_unrepresentable_year_yields_no_holidays() {
        assert!(year_holidays(i32::MAX).is_empty());
        assert!(year_holidays(i32::MIN).is_empty());
        assert!(matches!(
            find_holiday(i32::MAX, "ny1-2147483647"),
            Err(EngineError::HolidayNotFound { .. })
        ));
    }

    #[test]
    fn test_national_order_2025() {
        let holidays = year_holidays(2025);
        let ids: Vec<&str> = holidays.iter().take(12).map(|h| h.id()).collect();
        assert_eq!(
            ids,
            vec![
                "ny1-2025",
                "ny2-2025",
                "waitangi-2025",
                "goodfri-2025",
                "eastermon-2025",
                "anzac-2025",
                "kings-2025",
                "matariki-2025",
                "labour-2025",
                "xmas-2025",
                "boxing-2025",
                "well-ann-2025",
            ]
        );
    }

    #[test]
    fn test_regional_follows_national_and_school_comes_last() {
        let holidays = year_holidays(2024);
        let kinds: Vec<HolidayType> = holidays.iter().map(|h| h.kind()).collect();
        let first_regional = kinds.iter().position(|k| *k == HolidayType::Regional).unwrap();
        let first_school = kinds.iter().position(|k| *k == HolidayType::School).unwrap();
        assert!(kinds[..first_regional].iter().all(|k| *k == HolidayType::Public));
        assert!(kinds[first_regional..first_school]
            .iter()
            .all(|k| *k == HolidayType::Regional));
        assert!(kinds[first_school..].iter().all(|k| *k == HolidayType::School));
    }

    #[test]
    fn test_total_count_with_and_without_matariki() {
        // 11 national + 10 regional + 59 school days
        assert_eq!(year_holidays(2025).len(), 80);
        assert_eq!(year_holidays(2022).len(), 79);
    }

    #[test]
    fn test_new_year_2023_cascade() {
        let holidays = year_holidays(2023);
        assert_eq!(by_id(&holidays, "ny1-2023").date(), make_date("2023-01-02"));
        assert_eq!(by_id(&holidays, "ny2-2023").date(), make_date("2023-01-03"));
    }

    #[test]
    fn test_kings_birthday_2025() {
        let holidays = year_holidays(2025);
        assert_eq!(by_id(&holidays, "kings-2025").date(), make_date("2025-06-02"));
    }

    #[test]
    fn test_matariki_presence() {
        for year in 2023..=2028 {
            assert!(year_holidays(year).iter().any(|h| h.name() == "Matariki"));
        }
        for year in [2022, 2029] {
            assert!(!year_holidays(year).iter().any(|h| h.name() == "Matariki"));
        }
    }

    #[test]
    fn test_region_invariants() {
        for holiday in year_holidays(2025) {
            match holiday.kind() {
                HolidayType::Public | HolidayType::School => {
                    assert!(holiday.region_ids().is_none(), "{}", holiday.id())
                }
                HolidayType::Regional => {
                    assert!(
                        holiday.region_ids().is_some_and(|r| !r.is_empty()),
                        "{}",
                        holiday.id()
                    )
                }
            }
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(year_holidays(2026), year_holidays(2026));
    }

    #[test]
    fn test_find_holiday() {
        let holiday = find_holiday(2025, "anzac-2025").unwrap();
        assert_eq!(holiday.name(), "ANZAC Day");
    }

    #[test]
    fn test_find_holiday_unknown_id() {
        match find_holiday(2025, "anzac-2024") {
            Err(EngineError::HolidayNotFound { id }) => assert_eq!(id, "anzac-2024"),
            other => panic!("Expected HolidayNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_year() {
        assert_eq!(validate_year(2025).unwrap(), 2025);
        assert!(matches!(
            validate_year(0),
            Err(EngineError::YearOutOfRange { year: 0 })
        ));
        assert!(matches!(
            validate_year(10_000),
            Err(EngineError::YearOutOfRange { year: 10_000 })
        ));
    }

    proptest! {
        #[test]
        fn prop_ids_are_unique(year in 1900i32..2100) {
            let holidays = year_holidays(year);
            let ids: HashSet<&str> = holidays.iter().map(|h| h.id()).collect();
            prop_assert_eq!(ids.len(), holidays.len());
        }

        #[test]
        fn prop_dates_fall_in_requested_year(year in 1900i32..2100) {
            for holiday in year_holidays(year) {
                prop_assert_eq!(holiday.date().year(), year);
            }
        }
    }
}
