use crate::config::types::{Config, API_KEY_ENV};
use crate::config::validation::validate;
use crate::ConfigResult;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// An empty `[api] key` is filled from the `YT_HARVEST_API_KEY`
/// environment variable before validation.
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> ConfigResult<Config> {
    let content = std::fs::read_to_string(path)?;
    config_from_str(&content)
}

/// Parses, completes and validates configuration text
fn config_from_str(content: &str) -> ConfigResult<Config> {
    let mut config = parse_config(content)?;
    resolve_api_key(&mut config, std::env::var(API_KEY_ENV).ok());
    validate(&config)?;
    Ok(config)
}

/// Parses TOML configuration text without validating it
pub fn parse_config(content: &str) -> ConfigResult<Config> {
    Ok(toml::from_str(content)?)
}

/// Fills an empty API key from a fallback value (normally the environment)
pub fn resolve_api_key(config: &mut Config, fallback: Option<String>) {
    let key = config.api.key.trim();
    if !key.is_empty() {
        config.api.key = key.to_string();
        return;
    }

    if let Some(fallback) = fallback.map(|value| value.trim().to_string()) {
        if !fallback.is_empty() {
            tracing::debug!("Using API key from {}", API_KEY_ENV);
            config.api.key = fallback;
        }
    }
}

/// Hex-encoded SHA-256 fingerprint of configuration text
///
/// This is logged at startup so a run's output can be matched to the
/// configuration revision that produced it.
pub fn config_fingerprint(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}

/// Fingerprints the configuration file at `path`
pub fn compute_config_hash(path: &Path) -> ConfigResult<String> {
    let content = std::fs::read_to_string(path)?;
    Ok(config_fingerprint(&content))
}

/// Loads a configuration and its fingerprint from a single read of the file
pub fn load_config_with_hash(path: &Path) -> ConfigResult<(Config, String)> {
    let content = std::fs::read_to_string(path)?;
    let config = config_from_str(&content)?;
    Ok((config, config_fingerprint(&content)))
}
