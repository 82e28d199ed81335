//! Bounded retry with exponential backoff
//!
//! Only transport faults and 5xx responses are retried. Client errors are
//! meaningful answers for some endpoints (comments disabled, unknown video)
//! and are handed back to the caller on the first attempt.

use std::time::Duration;

/// Default maximum attempts per request (including the first)
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default backoff factor
pub const DEFAULT_BACKOFF_FACTOR: Duration = Duration::from_millis(1500);

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// What went wrong on a single attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Timeout, connection error, or a body that could not be read
    Transport,
    /// The server answered with a status outside the acceptable set
    Status(u16),
}

impl Fault {
    /// Returns true if this fault may succeed on a later attempt
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport => true,
            Self::Status(status) => *status >= 500,
        }
    }
}

/// Decision on whether to retry a failed attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryDecision {
    /// Sleep for `delay`, then issue the next attempt
    Retry { delay: Duration },
    /// Stop retrying
    GiveUp,
}

/// Retry configuration
///
/// # Delay Calculation
///
/// ```text
/// delay = backoff_factor * 2^(attempt - 1)
/// ```
///
/// With defaults, delays are 1.5s then 3s before the third and last attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the initial attempt)
    pub max_retries: u32,

    /// Base delay doubled on each further attempt
    pub backoff_factor: Duration,

    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_factor: DEFAULT_BACKOFF_FACTOR,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl RetryPolicy {
    /// Creates a policy; `max_retries` is clamped to at least one attempt
    pub fn new(max_retries: u32, backoff_factor: Duration, timeout: Duration) -> Self {
        Self {
            max_retries: max_retries.max(1),
            backoff_factor,
            timeout,
        }
    }

    /// Decides what to do after `attempt` (1-indexed) failed with `fault`
    pub fn should_retry(&self, fault: Fault, attempt: u32) -> RetryDecision {
        if !fault.is_retryable() || attempt >= self.max_retries {
            return RetryDecision::GiveUp;
        }

        RetryDecision::Retry {
            delay: self.backoff_delay(attempt),
        }
    }

    /// Delay to wait after `attempt` (1-indexed) before the next one
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16) as i32;
        self.backoff_factor.mul_f64(2f64.powi(exponent))
    }
}
