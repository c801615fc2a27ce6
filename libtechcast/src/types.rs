//! Core types for Techcast

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Topic domain a generation call targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Focus {
    Hpc,
    Ai,
}

impl FromStr for Focus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hpc" => Ok(Focus::Hpc),
            "ai" => Ok(Focus::Ai),
            _ => Err(format!("Invalid focus: '{}'. Valid options: hpc, ai", s)),
        }
    }
}

impl std::fmt::Display for Focus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Focus::Hpc => write!(f, "hpc"),
            Focus::Ai => write!(f, "ai"),
        }
    }
}

/// Content language
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Zh,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "zh" => Ok(Language::Zh),
            _ => Err(format!("Invalid language: '{}'. Valid options: en, zh", s)),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::En => write!(f, "en"),
            Language::Zh => write!(f, "zh"),
        }
    }
}

/// Publishing mode
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Never contacts the network, logs to files only
    Mock,
    /// Submits to the live provider API
    Real,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mock" => Ok(Mode::Mock),
            "real" => Ok(Mode::Real),
            _ => Err(format!("Invalid mode: '{}'. Valid options: mock, real", s)),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Mock => write!(f, "mock"),
            Mode::Real => write!(f, "real"),
        }
    }
}

/// Provider-assigned identifier for a published post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostId(pub String);

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Provider-assigned identifier for uploaded media
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MediaId(pub String);

impl std::fmt::Display for MediaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Morning and afternoon content generated in one call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyContent {
    pub morning: String,
    pub afternoon: String,
}

/// Simple statistics about a piece of content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentStats {
    pub length: usize,
    pub lines: usize,
    pub hashtags: usize,
    pub mentions: usize,
    pub emojis: usize,
}

/// Result of a publish attempt
///
/// Validation and provider failures are folded into `success = false`
/// with a human-readable message rather than surfaced as errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishOutcome {
    pub success: bool,
    pub message: String,
}

impl PublishOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Posting statistics derived from the post log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostingStats {
    pub mode: Mode,
    pub client_ready: bool,
    pub downgraded: bool,
    pub total_posts: usize,
    pub mock_posts: usize,
    pub real_posts: usize,
}
