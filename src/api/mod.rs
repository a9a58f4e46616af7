//! HTTP API module for the holiday engine.
//!
//! This module provides REST endpoints for a year's holidays, the month
//! grid with highlighted regions, the region list, and activity
//! suggestions for a selected holiday.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalendarQuery, HolidayQuery, SuggestionRequest};
pub use response::{ApiError, MonthView, RegionInfo, SuggestionResponse};
pub use state::AppState;
