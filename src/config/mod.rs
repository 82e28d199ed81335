//! Configuration module for yt-harvest
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use yt_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Comments per video: {}", config.harvest.comment_limit);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    ApiConfig, CaptionConfig, Config, HarvestConfig, HttpConfig, InputConfig, LoggingConfig,
    OutputConfig, API_KEY_ENV, API_KEY_PLACEHOLDER, DEFAULT_API_BASE_URL, DEFAULT_WATCH_BASE_URL,
};

// Re-export parser functions
pub use parser::{
    compute_config_hash, config_fingerprint, load_config, load_config_with_hash, parse_config,
    resolve_api_key,
};
pub use validation::validate;
