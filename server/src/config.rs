//! Configuration management

use dashbadge_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::ui::theme::ThemeMode;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Title shown on the gallery page
    #[serde(default = "default_title")]
    pub title: String,

    /// Theme used when a request does not ask for one
    #[serde(default)]
    pub theme: ThemeMode,

    /// Whether role badges show their label unless told otherwise
    #[serde(default = "default_show_labels")]
    pub show_labels: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: default_title(),
            theme: ThemeMode::default(),
            show_labels: default_show_labels(),
        }
    }
}

impl Config {
    /// Load configuration from file or environment
    pub fn load(path: Option<&str>) -> Result<Self> {
        if let Some(p) = path {
            Self::load_from_file(p)
        } else {
            Self::load_from_env()
        }
    }

    /// Load from configuration file
    fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigError(format!("Failed to read config: {}", e)))?;

        Self::parse_toml(&content)
    }

    fn parse_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Load from environment variables
    fn load_from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let title = lookup("DASHBADGE_TITLE").unwrap_or_else(default_title);

        let theme = match lookup("DASHBADGE_THEME") {
            Some(value) => value.trim().parse()?,
            None => ThemeMode::default(),
        };

        let show_labels = match lookup("DASHBADGE_SHOW_LABELS") {
            Some(value) => parse_bool(&value)?,
            None => default_show_labels(),
        };

        Ok(Config {
            title,
            theme,
            show_labels,
        })
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(Error::ConfigError(format!(
            "Invalid boolean for DASHBADGE_SHOW_LABELS: {}",
            other
        ))),
    }
}

fn default_title() -> String {
    "Dashboard Badges".to_string()
}

fn default_show_labels() -> bool {
    true
}
