//! Server configuration
//!
//! TOML-based configuration with environment overrides. The file is
//! optional; a missing file falls back to defaults so the server can
//! run with nothing but GEMINI_API_KEY set.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: "taskboard.db".to_string(),
        }
    }
}

/// Gemini model settings. The API key itself never lives in the file,
/// only the name of the environment variable that holds it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiSettings {
    pub base_url: String,
    pub model: String,
    pub api_key_env: String,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            base_url: llm::config::DEFAULT_BASE_URL.to_string(),
            model: llm::config::DEFAULT_MODEL.to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
        }
    }
}

/// Top-level server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub server: HttpConfig,
    pub database: DatabaseConfig,
    pub gemini: GeminiSettings,
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from default locations, falling back to
    /// defaults when no file exists.
    ///
    /// Searches:
    /// 1. CONFIG_PATH environment variable
    /// 2. ./config/taskboard-server.toml
    /// 3. ./taskboard-server.toml
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let mut config = if let Ok(config_path) = std::env::var("CONFIG_PATH") {
            Self::from_file(config_path)?
        } else {
            let paths = [
                PathBuf::from("config/taskboard-server.toml"),
                PathBuf::from("taskboard-server.toml"),
            ];
            match paths.iter().find(|p| p.exists()) {
                Some(path) => Self::from_file(path)?,
                None => Self::default(),
            }
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Environment variables take precedence over file values
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Ok(path) = std::env::var("DATABASE_PATH") {
            self.database.path = path;
        }
    }

    /// Listener address as host:port
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Get database URL from configuration
    pub fn database_url(&self) -> String {
        format!("sqlite://{}?mode=rwc", self.database.path)
    }
}
