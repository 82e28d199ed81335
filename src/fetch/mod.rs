//! Fetch module for talking to HTTP APIs
//!
//! This module contains the request machinery shared by every endpoint:
//! - HTTP fetching with bounded retry and backoff
//! - The loosely-typed payload boundary
//! - Cursor-based pagination

mod fetcher;
mod paginate;
mod payload;
mod retry;

pub use fetcher::{build_http_client, FetchError, Fetcher, ACCEPT_OK};
pub use paginate::{collect, CollectOutcome, Collected};
pub use payload::{Fields, Payload};
pub use retry::{
    Fault, RetryDecision, RetryPolicy, DEFAULT_BACKOFF_FACTOR, DEFAULT_MAX_RETRIES,
    DEFAULT_TIMEOUT,
};
