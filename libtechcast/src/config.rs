//! Configuration management for Techcast

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::path::PathBuf;

use crate::error::{ConfigError, Result};
use crate::types::{Language, Mode};

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub publisher: PublisherConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    #[serde(default = "default_language")]
    pub language: Language,
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PublisherConfig {
    #[serde(default = "default_mode")]
    pub mode: Mode,
    pub credentials: Option<Credentials>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

/// Opaque provider credentials
///
/// Held as `SecretString` so they never leak through Debug output.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub api_key: SecretString,
    pub api_secret: SecretString,
    pub access_token: SecretString,
    pub access_token_secret: SecretString,
}

impl Credentials {
    /// All four credential strings are present and non-empty
    pub fn is_complete(&self) -> bool {
        !self.api_key.expose_secret().is_empty()
            && !self.api_secret.expose_secret().is_empty()
            && !self.access_token.expose_secret().is_empty()
            && !self.access_token_secret.expose_secret().is_empty()
    }

    fn from_env() -> Option<Self> {
        let api_key = std::env::var("X_API_KEY").ok()?;
        let api_secret = std::env::var("X_API_SECRET").ok()?;
        let access_token = std::env::var("X_ACCESS_TOKEN").ok()?;
        let access_token_secret = std::env::var("X_ACCESS_TOKEN_SECRET").ok()?;

        Some(Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            access_token: access_token.into(),
            access_token_secret: access_token_secret.into(),
        })
    }
}

fn default_language() -> Language {
    Language::En
}

fn default_max_length() -> usize {
    280
}

fn default_mode() -> Mode {
    Mode::Mock
}

fn default_log_dir() -> String {
    "logs".to_string()
}

fn default_output_dir() -> String {
    "output".to_string()
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            max_length: default_max_length(),
        }
    }
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            credentials: None,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// Falls back to the built-in defaults when no config file exists,
    /// then applies environment overrides.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        let mut config = if config_path.exists() {
            Self::load_from_path(&config_path)?
        } else {
            Self::default_config()
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }

    /// Create a default configuration
    pub fn default_config() -> Self {
        Self::default()
    }

    /// Apply environment variable overrides
    ///
    /// `TECHCAST_LANGUAGE` and `TECHCAST_MAX_LENGTH` override the content
    /// section; the four `X_*` variables supply credentials when the
    /// config file carries none.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(lang) = std::env::var("TECHCAST_LANGUAGE") {
            self.content.language = lang
                .parse()
                .map_err(|_| ConfigError::UnsupportedLanguage(lang))?;
        }

        if let Ok(max) = std::env::var("TECHCAST_MAX_LENGTH") {
            self.content.max_length = max.parse().map_err(|_| ConfigError::InvalidValue {
                field: "content.max_length".to_string(),
                value: max,
            })?;
        }

        if self.publisher.credentials.is_none() {
            self.publisher.credentials = Credentials::from_env();
        }

        Ok(())
    }

    /// Expand tilde in storage paths
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.storage.log_dir).to_string())
    }

    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.storage.output_dir).to_string())
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("TECHCAST_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("techcast").join("config.toml"))
}
