//! Techcast - HPC/AI content generation and publishing
//!
//! This library generates short social-media post text from static
//! topic/template tables and submits it to a microblogging provider,
//! with a mock (dry-run) mode that never touches the network.

pub mod client;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod publisher;
pub mod tables;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use config::{Config, Credentials};
pub use error::{Result, TechcastError};
pub use generator::ContentGenerator;
pub use publisher::Publisher;
pub use tables::ContentTables;
pub use types::{DailyContent, Focus, Language, Mode, PublishOutcome};
