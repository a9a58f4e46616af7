//! Activity suggestions for a selected holiday.
//!
//! Suggestions come from an external generative-content service. The fetch is
//! a single request per user action with no retry; every failure degrades to
//! a fixed text message instead of an error.

mod client;
mod prompt;

pub use client::{EMPTY_MESSAGE, RETRY_MESSAGE, SuggestionClient, UNAVAILABLE_MESSAGE};
pub use prompt::{NATIONWIDE_REGION_NAME, SuggestionSubject, build_prompt, suggestion_subject};
