//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the harvester, including:
//! - Building the shared HTTP client (one connection pool per run)
//! - GET requests with query parameters
//! - Retry logic for transient failures
//! - Parsing JSON bodies into [`Payload`]s

use super::payload::Payload;
use super::retry::{Fault, RetryDecision, RetryPolicy};
use crate::config::HttpConfig;
use reqwest::Client;
use thiserror::Error;

/// Status codes accepted by default
pub const ACCEPT_OK: &[u16] = &[200];

/// Errors that end a fetch without a usable payload
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Giving up on {url} after {attempts} attempts: {message}")]
    Exhausted {
        url: String,
        attempts: u32,
        message: String,
    },

    #[error("Malformed response body from {url} (status {status}): {message}")]
    Malformed {
        url: String,
        status: u16,
        message: String,
    },

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - Sent with every request
/// * `policy` - Supplies the connect and request timeout
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(user_agent: &str, policy: &RetryPolicy) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(policy.timeout)
        .connect_timeout(policy.timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Final answer of the retry loop: a status code and the body text
struct RawResponse {
    status: u16,
    body: String,
    accepted: bool,
}

/// GET client with bounded retries
///
/// The fetcher owns a single [`Client`], so every request of a run shares the
/// same connection pool. It is meant for sequential use by one caller.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    policy: RetryPolicy,
}

impl Fetcher {
    pub fn new(client: Client, policy: RetryPolicy) -> Self {
        Self { client, policy }
    }

    /// Builds the client and retry policy from the `[http]` section
    pub fn from_config(config: &HttpConfig) -> Result<Self, reqwest::Error> {
        let policy = config.retry_policy();
        let client = build_http_client(&config.user_agent, &policy)?;
        Ok(Self::new(client, policy))
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Fetches a URL and parses the body as JSON
    ///
    /// # Retry Logic
    ///
    /// | Condition | Action |
    /// |-----------|--------|
    /// | Status in `accept` | Parse body; malformed → `Malformed`, no retry |
    /// | HTTP 5xx, attempts left | Retry with backoff |
    /// | Other status (or 5xx on last attempt) | Parse body anyway; not JSON → `UnexpectedStatus` |
    /// | Timeout / connection error | Retry with backoff; exhausted → `Exhausted` |
    ///
    /// Callers that treat 403/404 as "no data" pass them in `accept`, or
    /// inspect [`Payload::api_error`] on the returned body.
    pub async fn fetch_json(
        &self,
        url: &str,
        params: &[(&str, String)],
        accept: &[u16],
    ) -> Result<Payload, FetchError> {
        let raw = self.get_with_retry(url, params, accept).await?;

        match Payload::parse(&raw.body) {
            Ok(payload) => Ok(payload),
            Err(e) if raw.accepted => {
                tracing::error!(url, status = raw.status, "Failed to parse JSON: {}", e);
                Err(FetchError::Malformed {
                    url: url.to_string(),
                    status: raw.status,
                    message: e.to_string(),
                })
            }
            Err(_) => Err(FetchError::UnexpectedStatus {
                url: url.to_string(),
                status: raw.status,
            }),
        }
    }

    /// Fetches a URL and returns the body text; only `200` is acceptable
    pub async fn fetch_text(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<String, FetchError> {
        let raw = self.get_with_retry(url, params, ACCEPT_OK).await?;
        if raw.accepted {
            Ok(raw.body)
        } else {
            Err(FetchError::UnexpectedStatus {
                url: url.to_string(),
                status: raw.status,
            })
        }
    }

    async fn get_with_retry(
        &self,
        url: &str,
        params: &[(&str, String)],
        accept: &[u16],
    ) -> Result<RawResponse, FetchError> {
        let mut attempt = 0;
        let mut last_error = String::new();

        while attempt < self.policy.max_retries {
            attempt += 1;
            tracing::debug!(url, attempt, "GET");

            let fault = match self.send_once(url, params).await {
                Ok((status, body)) => {
                    if accept.contains(&status) {
                        return Ok(RawResponse {
                            status,
                            body,
                            accepted: true,
                        });
                    }

                    tracing::warn!(
                        url,
                        attempt,
                        status,
                        "Unexpected status: {}",
                        truncate(&body, 500)
                    );
                    let fault = Fault::Status(status);
                    if self.policy.should_retry(fault, attempt) == RetryDecision::GiveUp {
                        return Ok(RawResponse {
                            status,
                            body,
                            accepted: false,
                        });
                    }
                    last_error = format!("status {}", status);
                    fault
                }
                Err(e) => {
                    tracing::warn!(url, attempt, "Request error: {}", e);
                    last_error = e.to_string();
                    Fault::Transport
                }
            };

            match self.policy.should_retry(fault, attempt) {
                RetryDecision::Retry { delay } => {
                    tracing::debug!("Sleeping for {:.2} seconds before retry", delay.as_secs_f64());
                    tokio::time::sleep(delay).await;
                }
                RetryDecision::GiveUp => break,
            }
        }

        tracing::error!("Giving up on {} after {} attempts", url, attempt);
        Err(FetchError::Exhausted {
            url: url.to_string(),
            attempts: attempt,
            message: last_error,
        })
    }

    async fn send_once(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<(u16, String), reqwest::Error> {
        let response = self
            .client
            .get(url)
            .query(params)
            .timeout(self.policy.timeout)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok((status, body))
    }
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
