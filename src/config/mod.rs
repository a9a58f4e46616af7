//! Configuration loading for the holiday service.
//!
//! Settings come from a single YAML file: the HTTP bind address and the
//! activity suggestion service (endpoint, model, credential variable and
//! timeout).
//!
//! # Example
//!
//! ```no_run
//! use nz_holiday_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/holidayviz.yaml").unwrap();
//! println!("Suggestions model: {}", config.suggestions().model);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ServerSettings, Settings, SuggestionSettings};
