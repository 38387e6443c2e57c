//! Bounded retry with exponential backoff for feed batches

use crate::feed::error::{FetchError, FetchResult};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Configuration for retry behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first one
    pub max_attempts: usize,
    /// Delay before the second attempt, in milliseconds
    pub base_delay_ms: u64,
    /// Upper bound for any single delay, in milliseconds
    pub max_delay_ms: u64,
    /// Multiplier for exponential backoff
    pub backoff_multiplier: f64,
    /// Whether to add ±10% jitter to retry delays
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 500,
            max_delay_ms: 5_000,
            backoff_multiplier: 2.0,
            jitter: true,
        }
    }
}

impl RetryConfig {
    /// A policy that never retries
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    pub fn max_delay(&self) -> Duration {
        Duration::from_millis(self.max_delay_ms)
    }
}

/// Drives an operation until it succeeds, fails permanently, or runs out of attempts
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    config: RetryConfig,
}

impl RetryPolicy {
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Execute an operation with retry logic
    pub async fn run<F, Fut, T>(&self, operation: F) -> FetchResult<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = FetchResult<T>>,
    {
        let max_attempts = self.config.max_attempts.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;
            debug!("Feed fetch attempt {}/{}", attempt, max_attempts);

            let error = match operation().await {
                Ok(result) => {
                    if attempt > 1 {
                        debug!("Feed fetch succeeded on attempt {}", attempt);
                    }
                    return Ok(result);
                }
                Err(error) => error,
            };

            if !error.is_retryable() {
                warn!("Feed fetch failed with non-retryable error: {}", error);
                return Err(error);
            }

            if attempt >= max_attempts {
                warn!(
                    "Feed fetch failed after {} attempts, last error: {}",
                    max_attempts, error
                );
                return Err(error);
            }

            let delay = self.delay_for(attempt, &error);
            warn!(
                "Feed fetch failed (attempt {}), retrying in {:?}: {}",
                attempt, delay, error
            );
            sleep(delay).await;
        }
    }

    /// Delay to wait after the given failed attempt
    fn delay_for(&self, attempt: usize, error: &FetchError) -> Duration {
        let exponent = attempt.saturating_sub(1) as i32;
        let mut delay_ms =
            self.config.base_delay_ms as f64 * self.config.backoff_multiplier.powi(exponent);

        // Rate limited responses get at least one extra backoff step
        if matches!(error, FetchError::Status { status: 429, .. }) {
            delay_ms *= self.config.backoff_multiplier;
        }

        let mut delay = Duration::from_millis(delay_ms as u64).min(self.config.max_delay());

        if self.config.jitter {
            delay = add_jitter(delay);
        }

        delay
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(RetryConfig::default())
    }
}

fn add_jitter(delay: Duration) -> Duration {
    use rand::Rng;

    let jitter_range = delay.as_millis() as f64 * 0.1;
    if jitter_range <= 0.0 {
        return delay;
    }
    let jitter = rand::thread_rng().gen_range(-jitter_range..=jitter_range);
    let adjusted_ms = (delay.as_millis() as f64 + jitter).max(0.0) as u64;
    Duration::from_millis(adjusted_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::types::Endpoint;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn fast_config(max_attempts: usize) -> RetryConfig {
        RetryConfig {
            max_attempts,
            base_delay_ms: 1,
            max_delay_ms: 5,
            backoff_multiplier: 2.0,
            jitter: false,
        }
    }

    #[test]
    fn test_backoff_is_capped() {
        let policy = RetryPolicy::new(RetryConfig {
            jitter: false,
            ..RetryConfig::default()
        });
        let error = FetchError::network(Endpoint::News, "reset");

        assert_eq!(policy.delay_for(1, &error), Duration::from_millis(500));
        assert_eq!(policy.delay_for(2, &error), Duration::from_millis(1000));
        assert_eq!(policy.delay_for(3, &error), Duration::from_millis(2000));
        assert_eq!(policy.delay_for(10, &error), Duration::from_millis(5000));
    }

    #[test]
    fn test_jitter_stays_within_ten_percent() {
        for _ in 0..100 {
            let delay = add_jitter(Duration::from_millis(1000));
            assert!(delay >= Duration::from_millis(900));
            assert!(delay <= Duration::from_millis(1100));
        }
    }

    #[tokio::test]
    async fn test_retries_until_success() {
        let calls = Arc::new(AtomicUsize::new(0));
        let policy = RetryPolicy::new(fast_config(3));

        let result = policy
            .run(|| {
                let calls = calls.clone();
                async move {
                    if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                        Err(FetchError::network(Endpoint::Apod, "refused"))
                    } else {
                        Ok("ok")
                    }
                }
            })
            .await;

        assert_eq!(result, Ok("ok"));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_attempts() {
        let calls = Arc::new(AtomicUsize::new(0));
        let policy = RetryPolicy::new(fast_config(2));

        let result: FetchResult<()> = policy
            .run(|| {
                let calls = calls.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Err(FetchError::status(Endpoint::News, 503))
                }
            })
            .await;

        assert_eq!(result, Err(FetchError::status(Endpoint::News, 503)));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_non_retryable_error_stops_immediately() {
        let calls = Arc::new(AtomicUsize::new(0));
        let policy = RetryPolicy::new(fast_config(5));

        let result: FetchResult<()> = policy
            .run(|| {
                let calls = calls.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Err(FetchError::decode(Endpoint::Poems, "expected an array"))
                }
            })
            .await;

        assert!(matches!(result, Err(FetchError::Decode { .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
