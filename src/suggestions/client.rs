//! HTTP client for the generative-content service.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::SuggestionSettings;
use crate::error::{EngineError, EngineResult};

use super::prompt::build_prompt;

/// Shown when no credential is configured.
pub const UNAVAILABLE_MESSAGE: &str = "AI services unavailable. Please configure API Key.";

/// Shown when the request or the service fails.
pub const RETRY_MESSAGE: &str = "Unable to load suggestions. Please try again later.";

/// Shown when the service answers without any text.
pub const EMPTY_MESSAGE: &str = "No suggestions available at the moment.";

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Joins the text parts of the first candidate.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        if text.trim().is_empty() { None } else { Some(text) }
    }
}

/// Client for activity suggestions.
///
/// Each call sends exactly one request. There is no retry: failures are
/// reported once and [`SuggestionClient::activities`] turns them into a
/// fixed message for the user.
#[derive(Debug, Clone)]
pub struct SuggestionClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl SuggestionClient {
    /// Creates a client with an explicit credential.
    ///
    /// An empty key counts as no key.
    pub fn new(settings: &SuggestionSettings, api_key: Option<String>) -> EngineResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| EngineError::SuggestionRequest {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        let mut endpoint = settings.endpoint.clone();
        if endpoint.ends_with('/') {
            endpoint.pop();
        }

        Ok(Self {
            client,
            endpoint,
            model: settings.model.clone(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        })
    }

    /// Creates a client reading the credential from the environment variable
    /// named by `settings.api_key_env`.
    pub fn from_settings(settings: &SuggestionSettings) -> EngineResult<Self> {
        let api_key = std::env::var(&settings.api_key_env).ok();
        if api_key.is_none() {
            warn!(
                env = %settings.api_key_env,
                "Suggestion API key not found in environment"
            );
        }
        Self::new(settings, api_key)
    }

    /// Returns true if a credential is configured.
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Sends `prompt` and returns the generated text, if any.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SuggestionsUnavailable`] without a credential
    /// and [`EngineError::SuggestionRequest`] for transport, status or
    /// decoding failures.
    pub async fn generate(&self, prompt: &str) -> EngineResult<Option<String>> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(EngineError::SuggestionsUnavailable)?;

        let url = format!("{}/models/{}:generateContent", self.endpoint, self.model);
        let body = GenerateContentRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| EngineError::SuggestionRequest {
                message: format!("HTTP request failed: {e}"),
            })?;

        if !response.status().is_success() {
            return Err(EngineError::SuggestionRequest {
                message: format!("HTTP status: {}", response.status()),
            });
        }

        let decoded: GenerateContentResponse =
            response
                .json()
                .await
                .map_err(|e| EngineError::SuggestionRequest {
                    message: format!("Failed to parse response: {e}"),
                })?;

        Ok(decoded.into_text())
    }

    /// Suggests activities for `holiday_name` in `region_name`.
    ///
    /// Never fails: a missing credential, a failed request and an empty
    /// answer each map to a fixed message.
    pub async fn activities(&self, holiday_name: &str, region_name: &str) -> String {
        let prompt = build_prompt(holiday_name, region_name);

        match self.generate(&prompt).await {
            Ok(Some(text)) => {
                debug!(holiday = holiday_name, region = region_name, "Suggestions received");
                text
            }
            Ok(None) => EMPTY_MESSAGE.to_string(),
            Err(EngineError::SuggestionsUnavailable) => {
                warn!("Suggestion requested without a configured API key");
                UNAVAILABLE_MESSAGE.to_string()
            }
            Err(err) => {
                warn!(error = %err, holiday = holiday_name, "Suggestion request failed");
                RETRY_MESSAGE.to_string()
            }
        }
    }
}
