//! Configuration management for Postula
//!
//! Supports environment variables, config files, and runtime overrides.
//! The configuration is built once at process start and passed by
//! reference into each component; there is no ambient global state.
//!
//! Config file location: ~/.config/postula/config.toml

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::core::error::{PostulaError, Result};

/// Main configuration for Postula
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Job-board configuration
    pub board: BoardConfig,
    /// Browser configuration
    pub browser: BrowserConfig,
    /// Chat-completion service configuration
    pub openai: OpenAiConfig,
}

/// Job-board endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Base URL of the job board (default: https://www.bne.cl)
    pub base_url: String,
}

/// Browser automation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Explicit browser binary to launch; when unset the library
    /// discovers a system Chromium
    pub browser_path: Option<PathBuf>,
    /// Whether to run without a visible window
    pub headless: bool,
    /// Upper bound for element waits, in seconds
    pub wait_timeout_secs: u64,
}

/// Chat-completion service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    /// API credential, usually from OPENAI_API_KEY
    pub api_key: Option<String>,
    /// Service base URL
    pub base_url: String,
    /// Model identifier used for email drafting
    pub model: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            browser: BrowserConfig::default(),
            openai: OpenAiConfig::default(),
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            base_url: env::var("POSTULA_BOARD_URL")
                .unwrap_or_else(|_| "https://www.bne.cl".to_string()),
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            browser_path: env::var("POSTULA_BROWSER_PATH").ok().map(PathBuf::from),
            headless: env::var("POSTULA_BROWSER_HEADED")
                .map(|v| !(v == "true" || v == "1"))
                .unwrap_or(true),
            wait_timeout_secs: 15,
        }
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: env::var("OPENAI_API_KEY").ok(),
            base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            model: env::var("POSTULA_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),
            timeout_secs: 120,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("postula")
    }

    /// Get the config file path
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from file, environment, and defaults
    /// Priority: CLI args > env vars > config file > defaults
    pub fn load() -> Self {
        // Try to load .env file if it exists
        let _ = dotenvy::dotenv();

        // Try to load from config file
        if let Ok(config) = Self::load_from_file() {
            return config;
        }

        // Fall back to defaults (which respect env vars)
        Self::default()
    }

    /// Load configuration from file only
    pub fn load_from_file() -> Result<Self> {
        let config_path = Self::config_file();

        if !config_path.exists() {
            return Err(PostulaError::config("Config file not found"));
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| PostulaError::config(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| PostulaError::config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Get the listing search endpoint
    pub fn search_url(&self) -> String {
        format!("{}/ofertas", self.board.base_url)
    }

    /// Get the detail endpoint for an offer code
    pub fn detail_url(&self, offer_code: &str) -> String {
        format!("{}/oferta/{}", self.board.base_url, offer_code)
    }
}
