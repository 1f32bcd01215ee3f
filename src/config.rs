//! App Configuration
//!
//! Read once at startup from an optional JSON block in the host page:
//!
//! ```html
//! <script id="app-config" type="application/json">
//!   { "api_url": "https://api.example.com", "log_level": "debug" }
//! </script>
//! ```
//!
//! Missing keys fall back to defaults. `FOOD_API_URL` at build time overrides
//! the default backend URL.

use log::LevelFilter;
use serde::Deserialize;

use crate::error::ConfigError;

const CONFIG_ELEMENT_ID: &str = "app-config";
const DEFAULT_API_URL: &str = "http://localhost:3333";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the REST backend serving `/foods`
    pub api_url: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: option_env!("FOOD_API_URL").unwrap_or(DEFAULT_API_URL).to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from the page, falling back to defaults.
    ///
    /// Runs before the logger exists, so parse errors are returned alongside
    /// the fallback config for the caller to report.
    pub fn load() -> (Self, Option<ConfigError>) {
        let Some(json) = read_config_element() else {
            return (Self::default(), None);
        };
        match Self::from_json(&json) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }
}

fn read_config_element() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}
