//! Request types for the holiday API.

use serde::{Deserialize, Serialize};

use crate::models::HolidayType;

/// Query string of `GET /holidays/:year`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HolidayQuery {
    /// Restricts the result to one holiday type.
    #[serde(default, rename = "type")]
    pub kind: Option<HolidayType>,
}

/// Query string of `GET /calendar/:year/:month`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarQuery {
    /// Id of the selected holiday, which drives the map focus.
    #[serde(default)]
    pub selected: Option<String>,
}

/// Request body for `POST /suggestions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionRequest {
    /// The year the holiday belongs to.
    pub year: i32,
    /// The holiday id, as returned by `GET /holidays/:year`.
    pub holiday_id: String,
}
