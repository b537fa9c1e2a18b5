//! Application configuration
//!
//! Configuration loaded from .dapp-shell.toml file.

use crate::ConfigSource;
use serde::{Deserialize, Serialize};

/// Application configuration loaded from .dapp-shell.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Path to the JSON contact list loaded on startup
    #[serde(default)]
    pub contacts_file: Option<String>,

    /// Interval between animation ticks in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Space-separated style classes for the loading indicator container
    #[serde(default)]
    pub indicator_class: String,

    /// Size multiplier of the loading indicator
    #[serde(default = "default_indicator_size")]
    pub indicator_size: f64,

    /// Close the snackbar automatically once its cooldown elapses
    #[serde(default = "default_snackbar_auto_close")]
    pub snackbar_auto_close: bool,
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_indicator_size() -> f64 {
    2.0
}

fn default_snackbar_auto_close() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            contacts_file: None,
            tick_rate_ms: default_tick_rate_ms(),
            indicator_class: String::new(),
            indicator_size: default_indicator_size(),
            snackbar_auto_close: default_snackbar_auto_close(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        match crate::find_config_file() {
            Some(source) => Self::from_source(&source),
            None => {
                log::debug!("No config file found, using default app config");
                Self::default()
            }
        }
    }

    /// Parse a found config file, falling back to defaults when it is invalid
    pub fn from_source(source: &ConfigSource) -> Self {
        match Self::parse(&source.content) {
            Ok(config) => {
                log::info!("Loaded app config from {}", source.path.display());
                config
            }
            Err(e) => {
                log::warn!(
                    "Failed to parse config file {}, using defaults: {}",
                    source.path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Parse config from TOML content
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
