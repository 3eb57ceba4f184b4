use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Backoff policy for reconnect attempts.
///
/// Tuned for startup: the storefront boots alongside Postgres in compose and
/// Kubernetes, so the first connection attempt regularly lands before the
/// database accepts traffic.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the initial attempt
    pub max_retries: u32,

    /// Delay before the first retry, in milliseconds
    pub initial_delay_ms: u64,

    /// Ceiling for the backoff delay, in milliseconds
    pub max_delay_ms: u64,

    /// Growth factor applied to the delay after each failure
    pub backoff_multiplier: f64,

    /// Randomize each delay to spread out competing reconnects
    pub use_jitter: bool,
}

impl RetryConfig {
    /// Default policy: 3 retries, 100ms initial delay, 5s cap, doubling, jitter on.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_delay(mut self, delay_ms: u64) -> Self {
        self.initial_delay_ms = delay_ms;
        self
    }

    pub fn with_max_delay(mut self, delay_ms: u64) -> Self {
        self.max_delay_ms = delay_ms;
        self
    }

    pub fn without_jitter(mut self) -> Self {
        self.use_jitter = false;
        self
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 100,
            max_delay_ms: 5000,
            backoff_multiplier: 2.0,
            use_jitter: true,
        }
    }
}

/// Run `operation` until it succeeds or the retry budget is spent.
///
/// The delay grows by `backoff_multiplier` after every failure, capped at
/// `max_delay_ms`. The error of the final attempt is returned as-is.
///
/// # Example
/// ```ignore
/// use database::common::{RetryConfig, retry_with_backoff};
///
/// let policy = RetryConfig::new().with_max_retries(5);
/// let db = retry_with_backoff(|| database::postgres::connect(&db_url), policy).await?;
/// ```
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut failures = 0;
    let mut delay_ms = config.initial_delay_ms;

    loop {
        match operation().await {
            Ok(value) => {
                if failures > 0 {
                    debug!("Succeeded after {} failed attempts", failures);
                }
                return Ok(value);
            }
            Err(e) => {
                failures += 1;

                if failures > config.max_retries {
                    warn!("Giving up after {} attempts: {}", failures, e);
                    return Err(e);
                }

                let sleep_ms = if config.use_jitter {
                    apply_jitter(delay_ms)
                } else {
                    delay_ms
                };

                debug!(
                    "Attempt {} of {} failed: {}. Next try in {}ms",
                    failures,
                    config.max_retries + 1,
                    e,
                    sleep_ms
                );

                tokio::time::sleep(Duration::from_millis(sleep_ms)).await;

                delay_ms =
                    ((delay_ms as f64 * config.backoff_multiplier) as u64).min(config.max_delay_ms);
            }
        }
    }
}

/// Shrink a delay to somewhere in [50%, 100%] of its value.
///
/// Hashing the current time through `RandomState` gives enough spread here
/// without pulling in a randomness crate.
fn apply_jitter(delay: u64) -> u64 {
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;

    let random_factor =
        (RandomState::new().hash_one(std::time::SystemTime::now()) % 50) as f64 / 100.0 + 0.5;

    (delay as f64 * random_factor) as u64
}

/// [`retry_with_backoff`] with the default policy.
pub async fn retry<F, Fut, T, E>(operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    retry_with_backoff(operation, RetryConfig::default()).await
}
