//! School holiday breaks.
//!
//! Four approximate breaks per year. Each break is expanded into one
//! [`Holiday`] per calendar day rather than kept as a range, so a calendar
//! cell can find its school holiday by date alone.

use chrono::{Duration, NaiveDate};

use super::calendar_date;
use super::easter::easter_sunday;
use crate::models::Holiday;

/// An inclusive range of school holiday days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchoolBreak {
    /// Display label, e.g. "Term 1 Break".
    pub label: &'static str,
    /// Id segment for the days of this break.
    pub slug: &'static str,
    /// First day of the break.
    pub start: NaiveDate,
    /// Last day of the break (inclusive).
    pub end: NaiveDate,
}

impl SchoolBreak {
    /// Number of days in the break.
    pub fn len_days(&self) -> usize {
        ((self.end - self.start).num_days() + 1).max(0) as usize
    }

    /// Expands the break into one school holiday per day.
    ///
    /// # Example
    ///
    /// ```
    /// use nz_holiday_engine::calculation::school_breaks;
    ///
    /// let summer = school_breaks(2025)[3];
    /// let days = summer.expand();
    /// assert_eq!(days.len(), 12);
    /// assert_eq!(days[0].id(), "school-summer-break-2025-12-20");
    /// ```
    pub fn expand(&self) -> Vec<Holiday> {
        let name = format!("School Holiday ({})", self.label);
        self.start
            .iter_days()
            .take_while(|day| *day <= self.end)
            .map(|day| {
                Holiday::school(
                    format!("school-{}-{}", self.slug, day.format("%Y-%m-%d")),
                    name.clone(),
                    day,
                )
            })
            .collect()
    }
}

/// The four school breaks for `year`.
///
/// Term 1 starts two weeks after Easter Sunday and runs 15 days. Terms 2
/// and 3 use fixed windows. The summer break is cut off at 31 December.
pub fn school_breaks(year: i32) -> [SchoolBreak; 4] {
    let term_1_start = easter_sunday(year) + Duration::days(14);
    [
        SchoolBreak {
            label: "Term 1 Break",
            slug: "term-1-break",
            start: term_1_start,
            end: term_1_start + Duration::days(14),
        },
        SchoolBreak {
            label: "Term 2 Break",
            slug: "term-2-break",
            start: calendar_date(year, 7, 6),
            end: calendar_date(year, 7, 21),
        },
        SchoolBreak {
            label: "Term 3 Break",
            slug: "term-3-break",
            start: calendar_date(year, 9, 28),
            end: calendar_date(year, 10, 13),
        },
        SchoolBreak {
            label: "Summer Break",
            slug: "summer-break",
            start: calendar_date(year, 12, 20),
            end: calendar_date(year, 12, 31),
        },
    ]
}

/// Every school holiday day for `year`, break by break.
pub fn school_holidays(year: i32) -> Vec<Holiday> {
    school_breaks(year)
        .iter()
        .flat_map(SchoolBreak::expand)
        .collect()
}
