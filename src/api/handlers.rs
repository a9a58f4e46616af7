//! HTTP request handlers for the holiday API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{find_holiday, validate_year, year_holidays};
use crate::error::EngineError;
use crate::models::{Holiday, RegionId};
use crate::projection::{focused_regions, highlighted_regions, month_grid};
use crate::suggestions::suggestion_subject;

use super::request::{CalendarQuery, HolidayQuery, SuggestionRequest};
use super::response::{
    ApiError, ApiErrorResponse, MonthView, RegionInfo, SuggestionResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/holidays/:year", get(holidays_handler))
        .route("/calendar/:year/:month", get(calendar_handler))
        .route("/regions", get(regions_handler))
        .route("/suggestions", post(suggestions_handler))
        .with_state(state)
}

/// Converts a failed path extraction into a 400 response.
fn path_error(correlation_id: Uuid, rejection: PathRejection) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %rejection.body_text(),
        "Invalid path parameter"
    );
    ApiErrorResponse::bad_request(ApiError::validation_error(rejection.body_text())).into_response()
}

fn engine_error(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "Request failed");
    ApiErrorResponse::from(err).into_response()
}

/// Handler for `GET /holidays/:year`.
///
/// Returns every holiday of the year in engine order, optionally filtered
/// by `?type=`.
async fn holidays_handler(
    path: Result<Path<i32>, PathRejection>,
    query: Result<Query<HolidayQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let year = match path {
        Ok(Path(year)) => year,
        Err(rejection) => return path_error(correlation_id, rejection),
    };
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection.body_text(), "Invalid query");
            return ApiErrorResponse::bad_request(ApiError::validation_error(
                rejection.body_text(),
            ))
            .into_response();
        }
    };
    if let Err(err) = validate_year(year) {
        return engine_error(correlation_id, err);
    }

    let start_time = Instant::now();
    let holidays: Vec<Holiday> = year_holidays(year)
        .into_iter()
        .filter(|h| query.kind.is_none_or(|kind| h.kind() == kind))
        .collect();

    info!(
        correlation_id = %correlation_id,
        year,
        count = holidays.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Holidays computed"
    );
    (StatusCode::OK, Json(holidays)).into_response()
}

/// Handler for `GET /calendar/:year/:month`.
///
/// An optional `?selected=<holiday_id>` reports the regions of that holiday
/// as `focused_regions`.
async fn calendar_handler(
    path: Result<Path<(i32, u32)>, PathRejection>,
    query: Result<Query<CalendarQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let (year, month) = match path {
        Ok(Path(params)) => params,
        Err(rejection) => return path_error(correlation_id, rejection),
    };
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection.body_text(), "Invalid query");
            return ApiErrorResponse::bad_request(ApiError::validation_error(
                rejection.body_text(),
            ))
            .into_response();
        }
    };
    if let Err(err) = validate_year(year) {
        return engine_error(correlation_id, err);
    }

    let holidays = year_holidays(year);
    let days = match month_grid(&holidays, year, month) {
        Ok(days) => days,
        Err(err) => return engine_error(correlation_id, err),
    };

    let selected = match query.selected.as_deref() {
        Some(id) => match holidays.iter().find(|h| h.id() == id) {
            Some(holiday) => Some(holiday),
            None => {
                return engine_error(
                    correlation_id,
                    EngineError::HolidayNotFound { id: id.to_string() },
                );
            }
        },
        None => None,
    };
    let highlighted_regions = highlighted_regions(&holidays, month).into_iter().collect();
    let focused_regions = focused_regions(selected).to_vec();

    info!(
        correlation_id = %correlation_id,
        year,
        month,
        selected = query.selected.as_deref().unwrap_or("-"),
        "Month view built"
    );
    (
        StatusCode::OK,
        Json(MonthView {
            year,
            month,
            days,
            highlighted_regions,
            focused_regions,
        }),
    )
        .into_response()
}

/// Handler for `GET /regions`.
async fn regions_handler() -> Json<Vec<RegionInfo>> {
    Json(RegionId::ALL.into_iter().map(RegionInfo::from).collect())
}

/// Handler for `POST /suggestions`.
///
/// Looks up the holiday and asks the suggestion service about it. Service
/// failures still answer 200 with a fallback message.
async fn suggestions_handler(
    State(state): State<AppState>,
    payload: Result<Json<SuggestionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing suggestion request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let holiday = match validate_year(request.year)
        .and_then(|year| find_holiday(year, &request.holiday_id))
    {
        Ok(holiday) => holiday,
        Err(err) => return engine_error(correlation_id, err),
    };

    let subject = suggestion_subject(&holiday);
    let start_time = Instant::now();
    let text = state
        .suggestions()
        .activities(&subject.holiday_name, &subject.region_name)
        .await;

    info!(
        correlation_id = %correlation_id,
        holiday_id = %request.holiday_id,
        region = %subject.region_name,
        duration_us = start_time.elapsed().as_micros(),
        "Suggestion request completed"
    );
    (
        StatusCode::OK,
        Json(SuggestionResponse {
            holiday_id: request.holiday_id,
            holiday_name: subject.holiday_name,
            region_name: subject.region_name,
            text,
        }),
    )
        .into_response()
}
