//! Six-week month grid.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::{CalendarDay, Holiday};

/// Number of cells in a month grid: six Sunday-first weeks.
pub const GRID_CELLS: usize = 42;

/// Buckets `holidays` into the month grid for `month` of `year`.
///
/// The grid starts on the Sunday on or before the 1st, so leading cells are
/// the tail of the previous month and trailing cells fill up to
/// [`GRID_CELLS`] from the next month. Only cells of the requested month
/// carry holidays.
///
/// # Errors
///
/// Returns [`EngineError::InvalidMonth`] if `month` is not 1-12, and
/// [`EngineError::YearOutOfRange`] if the month cannot be represented.
///
/// # Example
///
/// ```
/// use nz_holiday_engine::calculation::year_holidays;
/// use nz_holiday_engine::projection::month_grid;
///
/// let holidays = year_holidays(2025);
/// let grid = month_grid(&holidays, 2025, 12)?;
/// assert_eq!(grid.len(), 42);
/// // 2025-12-01 is a Monday, so the grid opens on Sunday 30 November
/// assert!(!grid[0].is_current_month);
/// assert_eq!(grid[1].holidays[0].name(), "Westland Anniversary");
/// # Ok::<(), nz_holiday_engine::error::EngineError>(())
/// ```
pub fn month_grid(holidays: &[Holiday], year: i32, month: u32) -> EngineResult<Vec<CalendarDay>> {
    if !(1..=12).contains(&month) {
        return Err(EngineError::InvalidMonth { month });
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(EngineError::YearOutOfRange { year })?;

    let leading = i64::from(first.weekday().num_days_from_sunday());
    let grid_start = first
        .checked_sub_signed(Duration::days(leading))
        .ok_or(EngineError::YearOutOfRange { year })?;

    let days: Vec<CalendarDay> = grid_start
        .iter_days()
        .take(GRID_CELLS)
        .map(|date| {
            if date.year() == year && date.month() == month {
                CalendarDay {
                    date,
                    is_current_month: true,
                    holidays: holidays
                        .iter()
                        .filter(|h| h.date() == date)
                        .cloned()
                        .collect(),
                }
            } else {
                CalendarDay::filler(date)
            }
        })
        .collect();

    // iter_days stops early at the end of chrono's range
    if days.len() < GRID_CELLS {
        return Err(EngineError::YearOutOfRange { year });
    }

    Ok(days)
}
