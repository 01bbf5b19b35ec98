//! # Retry with Exponential Backoff
//!
//! Retries a fallible async operation with exponential backoff plus jitter.
//! Used around the initial post generation call. The budget enforcer never
//! retries its rewrite call.
//!
//! The delay before retry `n` (0-based) is `base * 2^n + jitter`, where
//! jitter is uniform in `[0, max_jitter)`. After the last attempt the last
//! error is returned.
//!
//! Sleeping goes through the `Sleeper` trait so tests can record delays
//! instead of waiting for them.

use async_trait::async_trait;
use rand::Rng;
use std::future::Future;
use std::time::Duration;

/// Backoff configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first
    pub max_attempts: u32,
    /// Delay before the first retry
    pub base_delay: Duration,
    /// Upper bound of the random jitter added to each delay
    pub max_jitter: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(2),
            max_jitter: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Policy that never waits; useful when the caller already bounds latency
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            base_delay: Duration::ZERO,
            max_jitter: Duration::ZERO,
        }
    }

    /// Delay before retry number `attempt` (0-based), without jitter
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(2u32.saturating_pow(attempt))
    }

    fn jitter(&self) -> Duration {
        if self.max_jitter.is_zero() {
            return Duration::ZERO;
        }
        let nanos = self.max_jitter.as_nanos().min(u64::MAX as u128) as u64;
        Duration::from_nanos(rand::rng().random_range(0..nanos))
    }
}

/// Something that can wait for a duration
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Sleeper backed by the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Run `operation` until it succeeds, `should_retry` rejects the error, or
/// the policy's attempts are used up
pub async fn retry_with_backoff<T, E, F, Fut, P>(
    policy: &RetryPolicy,
    sleeper: &dyn Sleeper,
    should_retry: P,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    P: Fn(&E) -> bool,
    E: std::fmt::Display,
{
    let attempts = policy.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if attempt + 1 >= attempts || !should_retry(&err) {
                    return Err(err);
                }
                let delay = policy.backoff(attempt) + policy.jitter();
                tracing::warn!(
                    "Retry {}/{} after error: {}. Sleeping {:.2}s",
                    attempt + 1,
                    attempts,
                    err,
                    delay.as_secs_f64()
                );
                sleeper.sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
