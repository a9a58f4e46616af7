//! Regional anniversary days.
//!
//! Statute defines most of these as "the Monday nearest" a fixed date. The
//! rules here are simplified: Wellington, Auckland, Nelson, Otago,
//! Marlborough and Westland use the raw nominal date. Southland is Easter
//! Tuesday, Taranaki the second Monday of March, Hawke's Bay the Friday
//! before Labour Day, and Canterbury Show Day ten days after the first
//! Tuesday of November.

use chrono::{Duration, NaiveDate, Weekday};

use super::calendar_date;
use super::easter::easter_sunday;
use super::nth_weekday::{labour_day_date, nth_weekday};
use crate::models::{Holiday, RegionId};

/// A regional anniversary day.
///
/// # Example
///
/// ```
/// use nz_holiday_engine::calculation::Anniversary;
/// use nz_holiday_engine::models::RegionId;
///
/// assert_eq!(Anniversary::Nelson.regions(), &[RegionId::Nelson, RegionId::Tasman]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anniversary {
    /// Wellington Anniversary.
    Wellington,
    /// Auckland Anniversary.
    Auckland,
    /// Nelson Anniversary.
    Nelson,
    /// Otago Anniversary.
    Otago,
    /// Southland Anniversary.
    Southland,
    /// Taranaki Anniversary.
    Taranaki,
    /// Hawke's Bay Anniversary.
    HawkesBay,
    /// Marlborough Anniversary.
    Marlborough,
    /// Canterbury Anniversary (Show Day).
    Canterbury,
    /// Westland Anniversary.
    Westland,
}

impl Anniversary {
    /// Every anniversary, in the order they are emitted for a year.
    pub const ALL: [Anniversary; 10] = [
        Anniversary::Wellington,
        Anniversary::Auckland,
        Anniversary::Nelson,
        Anniversary::Otago,
        Anniversary::Southland,
        Anniversary::Taranaki,
        Anniversary::HawkesBay,
        Anniversary::Marlborough,
        Anniversary::Canterbury,
        Anniversary::Westland,
    ];

    /// Prefix of the holiday id; the year is appended.
    pub fn id_prefix(self) -> &'static str {
        match self {
            Anniversary::Wellington => "well-ann",
            Anniversary::Auckland => "auck-ann",
            Anniversary::Nelson => "nel-ann",
            Anniversary::Otago => "otago-ann",
            Anniversary::Southland => "south-ann",
            Anniversary::Taranaki => "tara-ann",
            Anniversary::HawkesBay => "hb-ann",
            Anniversary::Marlborough => "marl-ann",
            Anniversary::Canterbury => "cant-ann",
            Anniversary::Westland => "west-ann",
        }
    }

    /// Display name of the holiday.
    pub fn name(self) -> &'static str {
        match self {
            Anniversary::Wellington => "Wellington Anniversary",
            Anniversary::Auckland => "Auckland Anniversary",
            Anniversary::Nelson => "Nelson Anniversary",
            Anniversary::Otago => "Otago Anniversary",
            Anniversary::Southland => "Southland Anniversary",
            Anniversary::Taranaki => "Taranaki Anniversary",
            Anniversary::HawkesBay => "Hawke's Bay Anniversary",
            Anniversary::Marlborough => "Marlborough Anniversary",
            Anniversary::Canterbury => "Canterbury Anniversary",
            Anniversary::Westland => "Westland Anniversary",
        }
    }

    /// Regions that observe the anniversary.
    pub fn regions(self) -> &'static [RegionId] {
        match self {
            Anniversary::Wellington => &[RegionId::Wellington, RegionId::ManawatuWhanganui],
            Anniversary::Auckland => &[
                RegionId::Auckland,
                RegionId::Northland,
                RegionId::Waikato,
                RegionId::BayOfPlenty,
                RegionId::Gisborne,
            ],
            Anniversary::Nelson => &[RegionId::Nelson, RegionId::Tasman],
            Anniversary::Otago => &[RegionId::Otago],
            Anniversary::Southland => &[RegionId::Southland],
            Anniversary::Taranaki => &[RegionId::Taranaki],
            Anniversary::HawkesBay => &[RegionId::HawkesBay],
            Anniversary::Marlborough => &[RegionId::Marlborough],
            Anniversary::Canterbury => &[RegionId::Canterbury],
            Anniversary::Westland => &[RegionId::WestCoast],
        }
    }

    /// The date the anniversary is observed in `year`.
    pub fn observed_date(self, year: i32) -> NaiveDate {
        match self {
            Anniversary::Wellington => calendar_date(year, 1, 22),
            Anniversary::Auckland => calendar_date(year, 1, 29),
            Anniversary::Nelson => calendar_date(year, 2, 1),
            Anniversary::Otago => calendar_date(year, 3, 23),
            Anniversary::Southland => easter_sunday(year) + Duration::days(2),
            Anniversary::Taranaki => nth_weekday(year, 3, Weekday::Mon, 2),
            Anniversary::HawkesBay => labour_day_date(year) - Duration::days(3),
            Anniversary::Marlborough => calendar_date(year, 11, 1),
            Anniversary::Canterbury => {
                nth_weekday(year, 11, Weekday::Tue, 1) + Duration::days(10)
            }
            Anniversary::Westland => calendar_date(year, 12, 1),
        }
    }

    /// Builds the holiday for `year`.
    pub fn holiday(self, year: i32) -> Holiday {
        Holiday::regional(
            format!("{}-{year}", self.id_prefix()),
            self.name(),
            self.observed_date(year),
            self.regions(),
        )
    }
}

/// All regional anniversary days for `year`.
pub fn regional_anniversaries(year: i32) -> Vec<Holiday> {
    Anniversary::ALL.iter().map(|a| a.holiday(year)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HolidayType;
    use chrono::Datelike;
    use std::collections::HashSet;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_ten_anniversaries_per_year() {
        let holidays = regional_anniversaries(2025);
        assert_eq!(holidays.len(), 10);
        assert!(holidays.iter().all(|h| h.kind() == HolidayType::Regional));
    }

    #[test]
    fn test_fixed_date_placeholders_are_not_mondayised() {
        // 2025-01-22 is a Wednesday, 2025-02-01 a Saturday
        assert_eq!(Anniversary::Wellington.observed_date(2025), make_date("2025-01-22"));
        assert_eq!(Anniversary::Auckland.observed_date(2025), make_date("2025-01-29"));
        assert_eq!(Anniversary::Nelson.observed_date(2025), make_date("2025-02-01"));
        assert_eq!(Anniversary::Otago.observed_date(2025), make_date("2025-03-23"));
        assert_eq!(Anniversary::Marlborough.observed_date(2025), make_date("2025-11-01"));
        assert_eq!(Anniversary::Westland.observed_date(2025), make_date("2025-12-01"));
    }

    #[test]
    fn test_southland_is_easter_tuesday() {
        // Easter 2025 is 20 April
        assert_eq!(Anniversary::Southland.observed_date(2025), make_date("2025-04-22"));
        assert_eq!(
            Anniversary::Southland.observed_date(2025).weekday(),
            Weekday::Tue
        );
    }

    #[test]
    fn test_taranaki_is_second_monday_of_march() {
        assert_eq!(Anniversary::Taranaki.observed_date(2025), make_date("2025-03-10"));
    }

    #[test]
    fn test_hawkes_bay_is_friday_before_labour_day() {
        // Labour Day 2025 is 27 October
        let date = Anniversary::HawkesBay.observed_date(2025);
        assert_eq!(date, make_date("2025-10-24"));
        assert_eq!(date.weekday(), Weekday::Fri);
    }

    #[test]
    fn test_canterbury_show_day() {
        // First Tuesday of November 2025 is the 4th
        let date = Anniversary::Canterbury.observed_date(2025);
        assert_eq!(date, make_date("2025-11-14"));
        assert_eq!(date.weekday(), Weekday::Fri);

        // First Tuesday of November 2024 is the 5th
        assert_eq!(Anniversary::Canterbury.observed_date(2024), make_date("2024-11-15"));
    }

    #[test]
    fn test_region_mapping() {
        assert_eq!(
            Anniversary::Wellington.regions(),
            &[RegionId::Wellington, RegionId::ManawatuWhanganui]
        );
        assert_eq!(
            Anniversary::Auckland.regions(),
            &[
                RegionId::Auckland,
                RegionId::Northland,
                RegionId::Waikato,
                RegionId::BayOfPlenty,
                RegionId::Gisborne,
            ]
        );
        assert_eq!(Anniversary::Westland.regions(), &[RegionId::WestCoast]);
        assert_eq!(Anniversary::HawkesBay.regions(), &[RegionId::HawkesBay]);
    }

    #[test]
    fn test_every_region_but_chatham_has_an_anniversary() {
        let covered: HashSet<RegionId> = Anniversary::ALL
            .iter()
            .flat_map(|a| a.regions().iter().copied())
            .collect();
        assert_eq!(covered.len(), 16);
        assert!(!covered.contains(&RegionId::ChathamIslands));
    }

    #[test]
    fn test_holiday_ids() {
        let ids: Vec<String> = regional_anniversaries(2026)
            .iter()
            .map(|h| h.id().to_string())
            .collect();
        assert_eq!(
            ids,
            vec![
                "well-ann-2026",
                "auck-ann-2026",
                "nel-ann-2026",
                "otago-ann-2026",
                "south-ann-2026",
                "tara-ann-2026",
                "hb-ann-2026",
                "marl-ann-2026",
                "cant-ann-2026",
                "west-ann-2026",
            ]
        );
    }
}
