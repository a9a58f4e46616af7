//! Application state for the holiday API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::suggestions::SuggestionClient;

/// Shared application state.
///
/// Holidays are recomputed per request, so the state only carries the
/// configuration and the suggestion client.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    suggestions: Arc<SuggestionClient>,
}

impl AppState {
    /// Creates the state, reading the suggestion credential from the
    /// environment variable named in the configuration.
    pub fn new(config: ConfigLoader) -> EngineResult<Self> {
        let suggestions = SuggestionClient::from_settings(config.suggestions())?;
        Ok(Self::with_suggestion_client(config, suggestions))
    }

    /// Creates the state with an already built suggestion client.
    pub fn with_suggestion_client(config: ConfigLoader, suggestions: SuggestionClient) -> Self {
        Self {
            config: Arc::new(config),
            suggestions: Arc::new(suggestions),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the suggestion client.
    pub fn suggestions(&self) -> &SuggestionClient {
        &self.suggestions
    }
}
