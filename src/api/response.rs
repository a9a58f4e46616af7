//! Response types for the holiday API.
//!
//! This module defines the success payloads that are not plain engine
//! models, the error response structure, and the mapping from
//! [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{CalendarDay, RegionId};

/// Body of `GET /calendar/:year/:month`.
#[derive(Debug, Clone, Serialize)]
pub struct MonthView {
    /// The displayed year.
    pub year: i32,
    /// The displayed month (1-12).
    pub month: u32,
    /// The 42 grid cells, Sunday first.
    pub days: Vec<CalendarDay>,
    /// Regions with a regional holiday this month.
    pub highlighted_regions: Vec<RegionId>,
    /// Regions of the selected holiday; empty without a regional selection.
    pub focused_regions: Vec<RegionId>,
}

/// One entry of `GET /regions`.
#[derive(Debug, Clone, Serialize)]
pub struct RegionInfo {
    /// Stable region code.
    pub id: RegionId,
    /// Display name.
    pub name: &'static str,
}

impl From<RegionId> for RegionInfo {
    fn from(region: RegionId) -> Self {
        Self {
            id: region,
            name: region.name(),
        }
    }
}

/// Body of `POST /suggestions`.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionResponse {
    /// The holiday the suggestions are for.
    pub holiday_id: String,
    /// The holiday name used in the prompt.
    pub holiday_name: String,
    /// The region name used in the prompt.
    pub region_name: String,
    /// Suggested activities, or a fallback message.
    pub text: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response with a validation error body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::YearOutOfRange { year } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "YEAR_OUT_OF_RANGE",
                    format!("Year out of supported range: {}", year),
                    "Years from 1 to 9999 are accepted",
                ),
            },
            EngineError::InvalidMonth { month } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_MONTH",
                    format!("Invalid month: {}", month),
                    "Months are numbered 1 to 12",
                ),
            },
            EngineError::HolidayNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("HOLIDAY_NOT_FOUND", format!("Holiday not found: {}", id)),
            },
            EngineError::SuggestionsUnavailable => ApiErrorResponse {
                status: StatusCode::SERVICE_UNAVAILABLE,
                error: ApiError::new(
                    "SUGGESTIONS_UNAVAILABLE",
                    "Suggestion service credential is not configured",
                ),
            },
            EngineError::SuggestionRequest { message } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::with_details(
                    "SUGGESTION_REQUEST_FAILED",
                    "Suggestion request failed",
                    message,
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_month_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::InvalidMonth { month: 13 }.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_MONTH");
    }

    #[test]
    fn test_holiday_not_found_maps_to_not_found() {
        let api_error: ApiErrorResponse = EngineError::HolidayNotFound {
            id: "nope-2025".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert!(api_error.error.message.contains("nope-2025"));
    }

    #[test]
    fn test_region_info_serialization() {
        let json = serde_json::to_string(&RegionInfo::from(RegionId::WestCoast)).unwrap();
        assert_eq!(json, r#"{"id":"west_coast","name":"West Coast"}"#);
    }
}
