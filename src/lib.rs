//! yt-harvest: public video metadata harvester
//!
//! This crate resolves channel and video URLs, pulls channel, video, comment
//! and caption metadata from the video platform's Data API, and flattens the
//! results into uniform output records.

pub mod config;
pub mod fetch;
pub mod harvest;
pub mod output;
pub mod transcript;
pub mod url;
pub mod youtube;

use thiserror::Error;

/// Main error type for yt-harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] fetch::FetchError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No input URLs found in {path}")]
    NoInputUrls { path: String },

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Missing linkage for {id}: {message}")]
    MissingLinkage { id: String, message: String },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("API key is missing or still set to the placeholder value")]
    MissingApiKey,
}

/// Result type alias for yt-harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use harvest::Harvester;
pub use output::OutputRecord;
pub use crate::url::{resolve, Identifier};
