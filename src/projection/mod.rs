//! Views derived from a year's holidays.
//!
//! The month grid used by the calendar and the region sets used by the map.

mod month_grid;
mod region_highlight;

pub use month_grid::{GRID_CELLS, month_grid};
pub use region_highlight::{focused_regions, highlighted_regions};
