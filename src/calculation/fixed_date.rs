//! National holidays on fixed calendar dates.
//!
//! Every one of these is Mondayised. The New Year and Christmas pairs are
//! observed together so the second day cascades past the first.

use super::calendar_date;
use super::mondayise::{mondayise, observe_pair};
use crate::models::Holiday;

/// New Year's Day and the Day after New Year's Day.
pub fn new_year_holidays(year: i32) -> [Holiday; 2] {
    let (first, second) = observe_pair(calendar_date(year, 1, 1), calendar_date(year, 1, 2));
    [
        Holiday::public(format!("ny1-{year}"), "New Year's Day", first),
        Holiday::public(format!("ny2-{year}"), "Day after New Year's Day", second),
    ]
}

/// Waitangi Day, 6 February.
pub fn waitangi_day(year: i32) -> Holiday {
    Holiday::public(
        format!("waitangi-{year}"),
        "Waitangi Day",
        mondayise(calendar_date(year, 2, 6)),
    )
}

/// ANZAC Day, 25 April.
pub fn anzac_day(year: i32) -> Holiday {
    Holiday::public(
        format!("anzac-{year}"),
        "ANZAC Day",
        mondayise(calendar_date(year, 4, 25)),
    )
}

/// Christmas Day and Boxing Day.
pub fn christmas_holidays(year: i32) -> [Holiday; 2] {
    let (christmas, boxing) =
        observe_pair(calendar_date(year, 12, 25), calendar_date(year, 12, 26));
    [
        Holiday::public(format!("xmas-{year}"), "Christmas Day", christmas),
        Holiday::public(format!("boxing-{year}"), "Boxing Day", boxing),
    ]
}
