//! Error types for Techcast

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TechcastError>;

#[derive(Error, Debug)]
pub enum TechcastError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TechcastError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TechcastError::InvalidInput(_) => 3,
            TechcastError::Provider(ProviderError::Authentication(_)) => 2,
            TechcastError::Provider(_) => 1,
            TechcastError::Config(_) => 1,
            TechcastError::Io(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: '{value}'")]
    InvalidValue { field: String, value: String },

    #[error("Content table is empty: {0}")]
    EmptyTable(String),

    #[error("Unsupported language: '{0}'. Valid options: en, zh")]
    UnsupportedLanguage(String),
}

#[derive(Error, Debug, Clone)]
pub enum ProviderError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Posting failed: {0}")]
    Posting(String),

    #[error("Media upload failed: {0}")]
    Media(String),

    #[error("Network error: {0}")]
    Network(String),
}
