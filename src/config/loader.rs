//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{ServerSettings, Settings, SuggestionSettings};

/// Loads and provides access to the service configuration.
///
/// # File Format
///
/// ```text
/// server:
///   bind_addr: "127.0.0.1:3000"
/// suggestions:
///   endpoint: "https://generativelanguage.googleapis.com/v1beta"
///   model: "gemini-2.5-flash"
///   api_key_env: "API_KEY"
///   timeout_secs: 30
/// ```
///
/// # Example
///
/// ```no_run
/// use nz_holiday_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/holidayviz.yaml")?;
/// println!("Listening on {}", loader.server().bind_addr);
/// # Ok::<(), nz_holiday_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    settings: Settings,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] if the file cannot be read and
    /// [`EngineError::ConfigParseError`] if it is not valid configuration YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::parse(&content, &path_str)?;
        debug!(path = %path_str, "Loaded configuration");
        Ok(loader)
    }

    /// Parses configuration from an in-memory YAML document.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, origin: &str) -> EngineResult<Self> {
        // An empty file deserializes to YAML null, which means all defaults.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings: Settings =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self { settings })
    }

    /// Returns the HTTP server settings.
    pub fn server(&self) -> &ServerSettings {
        &self.settings.server
    }

    /// Returns the activity suggestion settings.
    pub fn suggestions(&self) -> &SuggestionSettings {
        &self.settings.suggestions
    }
}
