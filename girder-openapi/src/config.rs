//! Environment-driven settings for docs serving.
//!
//! Variables (all optional):
//! - `DOCS_PATH` - mount path, default `/docs`
//! - `DOCS_TITLE` - page title, default `API Documentation`
//! - `DOCS_ENABLED` - `true`/`false`, default `true`
//! - `DOCS_UI` - `swagger` or `redoc`, default `swagger`

use std::env;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration value for {key}: {value}")]
    ParseError { key: String, value: String },

    #[error("Environment variable error: {0}")]
    EnvError(#[from] env::VarError),
}

/// Which renderer the mount serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiFlavor {
    #[default]
    Swagger,
    Redoc,
}

impl FromStr for UiFlavor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "swagger" => Ok(UiFlavor::Swagger),
            "redoc" => Ok(UiFlavor::Redoc),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocsSettings {
    pub path: String,
    pub title: String,
    pub enabled: bool,
    pub ui: UiFlavor,
}

impl Default for DocsSettings {
    fn default() -> Self {
        Self {
            path: "/docs".to_string(),
            title: "API Documentation".to_string(),
            enabled: true,
            ui: UiFlavor::Swagger,
        }
    }
}

impl DocsSettings {
    /// Read settings from the environment, after a best-effort `.env` load.
    /// Missing variables fall back to defaults; present but malformed values
    /// are errors.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let mut settings = Self::default();

        if let Ok(path) = env::var("DOCS_PATH") {
            settings.path = path;
        }
        if let Ok(title) = env::var("DOCS_TITLE") {
            settings.title = title;
        }
        if let Ok(enabled) = env::var("DOCS_ENABLED") {
            settings.enabled = parse_bool("DOCS_ENABLED", &enabled)?;
        }
        if let Ok(ui) = env::var("DOCS_UI") {
            settings.ui = ui.parse().map_err(|_| ConfigError::ParseError {
                key: "DOCS_UI".to_string(),
                value: ui,
            })?;
        }

        Ok(settings)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::ParseError {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
