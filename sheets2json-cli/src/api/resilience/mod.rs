//! Retry policy for Sheets API requests
//!
//! Transient failures (rate limiting, 5xx, dropped connections) are retried
//! with capped exponential backoff before the fetch gives up.

pub mod config;
pub mod retry;

pub use config::{RetryConfig, RetryConfigBuilder};
pub use retry::RetryPolicy;
