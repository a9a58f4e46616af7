//! Holiday date rules for New Zealand.
//!
//! Each rule is a pure function of the year: fixed dates with Mondayisation,
//! Easter-relative holidays, nth-weekday holidays, the Matariki lookup,
//! regional anniversaries and school breaks. [`year_holidays`] combines them
//! into the full sequence for one year.

mod easter;
mod fixed_date;
mod matariki;
mod mondayise;
mod nth_weekday;
mod regional_anniversary;
mod school_terms;
mod year_holidays;

use chrono::NaiveDate;

pub use easter::{easter_holidays, easter_sunday};
pub use fixed_date::{anzac_day, christmas_holidays, new_year_holidays, waitangi_day};
pub use matariki::{matariki, matariki_date};
pub use mondayise::{mondayise, observe_pair};
pub use nth_weekday::{kings_birthday, labour_day, labour_day_date, nth_weekday};
pub use regional_anniversary::{Anniversary, regional_anniversaries};
pub use school_terms::{SchoolBreak, school_breaks, school_holidays};
pub use year_holidays::{SUPPORTED_YEARS, find_holiday, validate_year, year_holidays};

/// Builds a date the rules know to exist.
///
/// Month and day always come from the rule tables, so this only fails for
/// years outside chrono's representable range.
pub(crate) fn calendar_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("Valid calendar date")
}
