//! Configuration management for Learncast
//!
//! Settings come from an optional TOML file, then environment overrides.
//! Secrets never live in the file; see [`crate::credentials`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ConfigError, Result};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_API_VERSION: &str = "v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-flash-latest";
pub const DEFAULT_X_API_BASE: &str = "https://api.twitter.com/2";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub gemini: GeminiConfig,
    pub x: XConfig,
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeminiConfig {
    pub model: String,
    pub base_url: String,
    pub api_version: String,
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            api_version: DEFAULT_GEMINI_API_VERSION.to_string(),
            timeout_secs: 60,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct XConfig {
    pub api_base: String,
    pub timeout_secs: u64,
}

impl Default for XConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_X_API_BASE.to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    pub input: String,
    pub output: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: crate::input::DEFAULT_INPUT_FILE.to_string(),
            output: crate::recorder::DEFAULT_OUTPUT_FILE.to_string(),
        }
    }
}

impl PathsConfig {
    pub fn input_path(&self) -> PathBuf {
        expand_path(&self.input)
    }

    pub fn output_path(&self) -> PathBuf {
        expand_path(&self.output)
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file is not an error: defaults are used. Environment
    /// overrides are applied in both cases.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;

        let mut config = if config_path.exists() {
            Self::load_from_path(&config_path)?
        } else {
            debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }

    /// Apply `GEMINI_MODEL`, `GEMINI_BASE_URL` and `X_API_BASE_URL`
    pub fn apply_env_overrides(&mut self) {
        if let Some(model) = non_empty_env("GEMINI_MODEL") {
            self.gemini.model = model;
        }
        if let Some(base_url) = non_empty_env("GEMINI_BASE_URL") {
            self.gemini.base_url = base_url;
        }
        if let Some(api_base) = non_empty_env("X_API_BASE_URL") {
            self.x.api_base = api_base;
        }
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("LEARNCAST_CONFIG") {
        return Ok(expand_path(&path));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("learncast").join("config.toml"))
}

/// Whether `DRY_RUN` is set to `true` (case-insensitive)
pub fn dry_run_from_env() -> bool {
    std::env::var("DRY_RUN")
        .map(|v| is_truthy(&v))
        .unwrap_or(false)
}

/// Only the literal string `true`, in any case, enables a flag
pub fn is_truthy(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}
