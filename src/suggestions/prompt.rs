//! Prompt construction for activity suggestions.

use serde::Serialize;

use crate::models::Holiday;

/// Region name used when a holiday applies nationwide.
pub const NATIONWIDE_REGION_NAME: &str = "New Zealand";

/// What a suggestion is asked about: a holiday in a region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionSubject {
    /// The holiday name.
    pub holiday_name: String,
    /// The region name, or [`NATIONWIDE_REGION_NAME`].
    pub region_name: String,
}

/// Derives the suggestion subject for `holiday`.
///
/// Uses the first listed region, or "New Zealand" when the holiday has none.
///
/// # Example
///
/// ```
/// use nz_holiday_engine::calculation::Anniversary;
/// use nz_holiday_engine::suggestions::suggestion_subject;
///
/// let subject = suggestion_subject(&Anniversary::HawkesBay.holiday(2025));
/// assert_eq!(subject.region_name, "Hawke's Bay");
/// ```
pub fn suggestion_subject(holiday: &Holiday) -> SuggestionSubject {
    let region_name = holiday
        .region_ids()
        .and_then(|regions| regions.first())
        .map(|region| region.name())
        .unwrap_or(NATIONWIDE_REGION_NAME);

    SuggestionSubject {
        holiday_name: holiday.name().to_string(),
        region_name: region_name.to_string(),
    }
}

/// Builds the prompt sent to the generative-content service.
pub fn build_prompt(holiday_name: &str, region_name: &str) -> String {
    format!(
        "Suggest 3 specific, fun, and family-friendly activities to do during {holiday_name} \
         in the {region_name} region of New Zealand.\n\
         Format the output as a simple HTML unordered list (<ul><li>...</li></ul>) without \
         markdown code blocks.\n\
         Keep it brief and inspiring."
    )
}
