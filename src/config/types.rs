use crate::fetch::RetryPolicy;
use serde::Deserialize;
use std::time::Duration;

/// Default Data API base URL
pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Default site base URL used for watch pages
pub const DEFAULT_WATCH_BASE_URL: &str = "https://www.youtube.com";

/// Value shipped in sample configs; treated the same as a missing key
pub const API_KEY_PLACEHOLDER: &str = "YOUR_API_KEY_HERE";

/// Environment variable consulted when the config carries no key
pub const API_KEY_ENV: &str = "YT_HARVEST_API_KEY";

/// Main configuration structure for yt-harvest
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub harvest: HarvestConfig,
    #[serde(default)]
    pub captions: CaptionConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Data API access
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Static API key sent as the `key` query parameter
    pub key: String,

    /// Base URL of the Data API
    #[serde(rename = "base-url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key: String::new(),
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

/// Request behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: f64,

    /// Maximum attempts per request, including the first
    #[serde(rename = "max-retries")]
    pub max_retries: u32,

    /// Backoff factor (seconds); attempt n waits factor * 2^(n-1)
    #[serde(rename = "backoff-factor")]
    pub backoff_factor: f64,

    /// User agent sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10.0,
            max_retries: 3,
            backoff_factor: 1.5,
            user_agent: format!("yt-harvest/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpConfig {
    /// Retry policy described by this section
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.max_retries,
            Duration::from_secs_f64(self.backoff_factor),
            Duration::from_secs_f64(self.timeout_secs),
        )
    }
}

/// Per-run collection caps
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HarvestConfig {
    /// Most recent uploads to process per channel URL
    #[serde(rename = "max-videos-per-channel")]
    pub max_videos_per_channel: usize,

    /// Maximum top-level comments per video
    #[serde(rename = "comment-limit")]
    pub comment_limit: usize,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            max_videos_per_channel: 30,
            comment_limit: 100,
        }
    }
}

/// Caption retrieval
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CaptionConfig {
    /// Whether captions are fetched at all
    pub enabled: bool,

    /// Preferred language codes, in order
    pub languages: Vec<String>,

    /// Site base URL for watch pages
    #[serde(rename = "watch-base-url")]
    pub watch_base_url: String,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            languages: vec!["en".to_string()],
            watch_base_url: DEFAULT_WATCH_BASE_URL.to_string(),
        }
    }
}

/// Input URL list location
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Newline-delimited URL list
    #[serde(rename = "urls-path")]
    pub urls_path: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            urls_path: "data/input_urls.txt".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the JSON records file
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: "data/output.json".to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Base log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
