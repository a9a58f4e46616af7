//! Region highlighting for the map view.

use std::collections::BTreeSet;

use chrono::Datelike;

use crate::models::{Holiday, HolidayType, RegionId};

/// Regions with a regional holiday in `month`.
///
/// Unions the regions of every regional holiday dated in `month`. Public and
/// school holidays are nationwide and never highlight a region.
///
/// # Example
///
/// ```
/// use nz_holiday_engine::calculation::year_holidays;
/// use nz_holiday_engine::models::RegionId;
/// use nz_holiday_engine::projection::highlighted_regions;
///
/// let regions = highlighted_regions(&year_holidays(2025), 3);
/// assert!(regions.contains(&RegionId::Otago));
/// assert!(regions.contains(&RegionId::Taranaki));
/// ```
pub fn highlighted_regions(holidays: &[Holiday], month: u32) -> BTreeSet<RegionId> {
    holidays
        .iter()
        .filter(|h| h.kind() == HolidayType::Regional && h.date().month() == month)
        .filter_map(Holiday::region_ids)
        .flat_map(|regions| regions.iter().copied())
        .collect()
}

/// Regions tied to the selected holiday.
///
/// Empty unless a regional holiday is selected.
pub fn focused_regions(selected: Option<&Holiday>) -> &[RegionId] {
    match selected {
        Some(holiday) => match holiday.kind() {
            HolidayType::Regional => holiday.region_ids().unwrap_or_default(),
            HolidayType::Public | HolidayType::School => &[],
        },
        None => &[],
    }
}
