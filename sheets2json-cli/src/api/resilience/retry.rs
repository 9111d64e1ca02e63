//! Retry policy: which failures are transient and how long to wait

use log::debug;
use reqwest::StatusCode;
use std::time::Duration;

use super::config::RetryConfig;

/// Decides whether a failed request is retried and computes backoff delays
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    config: RetryConfig,
}

impl RetryPolicy {
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    pub fn max_attempts(&self) -> u32 {
        self.config.max_attempts
    }

    /// Whether another attempt is allowed after `attempt` (1-based) failed
    pub fn has_attempts_left(&self, attempt: u32) -> bool {
        attempt < self.config.max_attempts
    }

    /// Rate limiting and server-side failures are worth retrying
    pub fn is_retryable_status(status: StatusCode) -> bool {
        status == StatusCode::TOO_MANY_REQUESTS
            || status == StatusCode::REQUEST_TIMEOUT
            || status.is_server_error()
    }

    /// Connection and timeout errors are transient; others (bad URL, decode) are not
    pub fn is_retryable_error(err: &reqwest::Error) -> bool {
        err.is_timeout() || err.is_connect()
    }

    /// Delay after the given failed attempt (1-based), capped at `max_delay`
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(63) as i32;
        let factor = self.config.backoff_multiplier.powi(exponent);
        let millis = self.config.initial_delay.as_millis() as f64 * factor;
        let delay = Duration::from_millis(millis.min(u64::MAX as f64) as u64);
        let delay = delay.min(self.config.max_delay);

        debug!("Retry policy: attempt {} failed, waiting {:?}", attempt, delay);
        delay
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(RetryConfig::default())
    }
}
