//! Core data models for the holiday engine.
//!
//! This module contains the value types produced by the date rules and
//! consumed by the calendar and map views.

mod calendar_day;
mod holiday;
mod region;

pub use calendar_day::CalendarDay;
pub use holiday::{Holiday, HolidayType};
pub use region::RegionId;
