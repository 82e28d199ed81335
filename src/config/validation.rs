use crate::config::types::{
    ApiConfig, CaptionConfig, Config, HarvestConfig, HttpConfig, LoggingConfig,
    API_KEY_PLACEHOLDER,
};
use crate::{ConfigError, ConfigResult};
use url::Url;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Upper bound for `timeout-secs` and `backoff-factor`, in seconds
const MAX_DURATION_SECS: f64 = 3600.0;

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_api_config(&config.api)?;
    validate_http_config(&config.http)?;
    validate_harvest_config(&config.harvest)?;
    validate_caption_config(&config.captions)?;
    validate_paths(config)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

/// Validates the API key and base URL
fn validate_api_config(config: &ApiConfig) -> ConfigResult<()> {
    let key = config.key.trim();
    if key.is_empty() || key == API_KEY_PLACEHOLDER {
        return Err(ConfigError::MissingApiKey);
    }

    validate_base_url("base-url", &config.base_url)
}

/// Validates request behavior
fn validate_http_config(config: &HttpConfig) -> ConfigResult<()> {
    if !(config.timeout_secs > 0.0 && config.timeout_secs <= MAX_DURATION_SECS) {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be in (0, {}], got {}",
            MAX_DURATION_SECS, config.timeout_secs
        )));
    }

    if config.max_retries < 1 {
        return Err(ConfigError::Validation(format!(
            "max-retries must be >= 1, got {}",
            config.max_retries
        )));
    }

    if !(0.0..=MAX_DURATION_SECS).contains(&config.backoff_factor) {
        return Err(ConfigError::Validation(format!(
            "backoff-factor must be in [0, {}], got {}",
            MAX_DURATION_SECS, config.backoff_factor
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates collection caps
fn validate_harvest_config(config: &HarvestConfig) -> ConfigResult<()> {
    if config.max_videos_per_channel < 1 {
        return Err(ConfigError::Validation(format!(
            "max-videos-per-channel must be >= 1, got {}",
            config.max_videos_per_channel
        )));
    }

    if config.comment_limit < 1 {
        return Err(ConfigError::Validation(format!(
            "comment-limit must be >= 1, got {}",
            config.comment_limit
        )));
    }

    Ok(())
}

/// Validates caption settings
fn validate_caption_config(config: &CaptionConfig) -> ConfigResult<()> {
    if config.languages.is_empty() {
        return Err(ConfigError::Validation(
            "captions.languages must list at least one language code".to_string(),
        ));
    }

    if let Some(code) = config
        .languages
        .iter()
        .find(|code| code.is_empty() || !code.chars().all(|c| c.is_alphanumeric() || c == '-'))
    {
        return Err(ConfigError::Validation(format!(
            "Invalid caption language code '{}'",
            code
        )));
    }

    validate_base_url("watch-base-url", &config.watch_base_url)
}

/// Validates input and output paths
fn validate_paths(config: &Config) -> ConfigResult<()> {
    if config.input.urls_path.is_empty() {
        return Err(ConfigError::Validation(
            "urls-path cannot be empty".to_string(),
        ));
    }

    if config.output.path.is_empty() {
        return Err(ConfigError::Validation(
            "output path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the base log level
fn validate_logging_config(config: &LoggingConfig) -> ConfigResult<()> {
    let level = config.level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        return Err(ConfigError::Validation(format!(
            "logging.level must be one of {}, got '{}'",
            LOG_LEVELS.join(", "),
            config.level
        )));
    }
    Ok(())
}

/// Validates an http(s) base URL
fn validate_base_url(field: &str, value: &str) -> ConfigResult<()> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", field, value, e)))?;

    if url.scheme() != "https" && url.scheme() != "http" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} '{}' must use http or https",
            field, value
        )));
    }

    Ok(())
}
