//! A single cell of a month grid.

use chrono::NaiveDate;
use serde::Serialize;

use super::Holiday;

/// One day in a six-week month grid.
///
/// Derived from a year's holidays on demand and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    /// The calendar date of the cell.
    pub date: NaiveDate,
    /// Whether the cell belongs to the month being displayed.
    pub is_current_month: bool,
    /// Holidays falling on this date. Always empty for filler cells.
    pub holidays: Vec<Holiday>,
}

impl CalendarDay {
    /// Creates a filler cell from an adjacent month.
    pub fn filler(date: NaiveDate) -> Self {
        Self {
            date,
            is_current_month: false,
            holidays: Vec::new(),
        }
    }
}
