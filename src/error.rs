//! Error types for the holiday engine.
//!
//! The date rules themselves never fail. These errors come from the outer
//! surfaces: configuration loading, request validation and the activity
//! suggestion service.

use thiserror::Error;

/// The main error type for the holiday engine.
///
/// # Example
///
/// ```
/// use nz_holiday_engine::error::EngineError;
///
/// let error = EngineError::InvalidMonth { month: 13 };
/// assert_eq!(error.to_string(), "Invalid month: 13 (expected 1-12)");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The requested year is outside the range the engine accepts.
    #[error("Year out of supported range: {year}")]
    YearOutOfRange {
        /// The rejected year.
        year: i32,
    },

    /// The requested month is not a calendar month.
    #[error("Invalid month: {month} (expected 1-12)")]
    InvalidMonth {
        /// The rejected month number.
        month: u32,
    },

    /// No holiday with the given id exists in the requested year.
    #[error("Holiday not found: {id}")]
    HolidayNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// The suggestion service has no credential configured.
    #[error("Suggestion service credential is not configured")]
    SuggestionsUnavailable,

    /// The suggestion service request failed or returned an unusable response.
    #[error("Suggestion request failed: {message}")]
    SuggestionRequest {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
