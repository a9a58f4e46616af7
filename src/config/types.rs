//! Configuration types for the holiday service.
//!
//! These structures are deserialized from the YAML configuration file.
//! Every field has a default, so an empty document is a valid configuration.

use serde::Deserialize;

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Socket address the API listens on.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

/// Activity suggestion service settings.
///
/// The credential itself is never part of the file; `api_key_env` names the
/// environment variable it is read from.
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionSettings {
    /// Base URL of the generative-content API.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Model used to generate suggestions.
    #[serde(default = "default_model")]
    pub model: String,
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SuggestionSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// The complete service configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerSettings,
    /// Activity suggestion settings.
    #[serde(default)]
    pub suggestions: SuggestionSettings,
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_api_key_env() -> String {
    "API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}
