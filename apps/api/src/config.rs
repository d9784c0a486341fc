use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_PORT: &str = "8000";
const DEFAULT_MAX_FOCUS_AREA_CHARS: usize = 500;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding `data/` and `prompts/`.
    pub resource_root: PathBuf,
    /// Enables goal generation; prompts-only mode when unset.
    pub anthropic_api_key: Option<String>,
    pub max_focus_area_chars: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            resource_root: optional_env("MYIMPACT_RESOURCE_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(default_resource_root),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            max_focus_area_chars: match optional_env("MAX_FOCUS_AREA_CHARS") {
                Some(v) => v
                    .parse::<usize>()
                    .context("MAX_FOCUS_AREA_CHARS must be a non-negative integer")?,
                None => DEFAULT_MAX_FOCUS_AREA_CHARS,
            },
            port: std::env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Configuration for a given resource root with every other setting at its default.
    pub fn with_resource_root(resource_root: impl Into<PathBuf>) -> Self {
        Config {
            resource_root: resource_root.into(),
            anthropic_api_key: None,
            max_focus_area_chars: DEFAULT_MAX_FOCUS_AREA_CHARS,
            port: 8000,
            rust_log: "info".to_string(),
        }
    }
}

/// The resources shipped alongside the crate.
pub fn default_resource_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources")
}

/// Reads an env var, treating unset and blank the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
